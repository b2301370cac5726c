//! Per-frame simulation step
//!
//! `advance` runs once per rendering frame. Step order is load-bearing: it
//! decides what a laser can hit this frame and keeps test replays stable.

use super::collision::{breached_bottom, hits_side_wall, laser_hits_asteroid, out_of_bounds};
use super::state::{Explosion, GameEvent, GamePhase, GameState, Laser};
use crate::consts::*;
use crate::frame_step;

/// Polled control state for a single frame, read once per `advance`
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub fire: bool,
}

/// Advance the simulation by one frame.
///
/// `dt_ms` is the frame delta (negative values clamp to zero), `now_ms` the
/// absolute wall-clock used for the fire cooldown and spawn interval.
/// Outside `Running` only the background starfield animates.
pub fn advance(state: &mut GameState, input: &InputSnapshot, dt_ms: f64, now_ms: f64) {
    let step = frame_step(dt_ms);

    if state.phase != GamePhase::Running {
        // Title and game-over overlays sit on a live starfield
        advance_stars(state, step);
        return;
    }

    update_ship(state, input, step, now_ms);
    update_lasers(state, step);
    maybe_spawn_asteroid(state, now_ms);
    if update_asteroids(state, step) {
        // Health hit zero: the frame ends here
        return;
    }
    resolve_collisions(state);
    update_explosions(state, step);
    advance_stars(state, step);
}

/// Step 1: rotation from held input, then the cooldown-gated fire check
fn update_ship(state: &mut GameState, input: &InputSnapshot, step: f32, now_ms: f64) {
    if input.rotate_left {
        state.ship.angle -= SHIP_ROTATION_SPEED * step;
    }
    if input.rotate_right {
        state.ship.angle += SHIP_ROTATION_SPEED * step;
    }

    let cooled = state
        .last_fire_ms
        .is_none_or(|t| now_ms - t > FIRE_COOLDOWN_MS);
    if input.fire && cooled {
        state.lasers.push(Laser {
            pos: state.ship.pos,
            vel: state.ship.facing() * LASER_SPEED,
            angle: state.ship.angle,
        });
        state.last_fire_ms = Some(now_ms);
        state.push_event(GameEvent::LaserFired);
    }
}

/// Step 2: translate lasers, drop the ones that reached an edge
fn update_lasers(state: &mut GameState, step: f32) {
    for laser in &mut state.lasers {
        laser.pos += laser.vel * step;
    }
    state
        .lasers
        .retain(|l| !out_of_bounds(l.pos, PLAY_WIDTH, PLAY_HEIGHT));
}

/// Step 3: spawn one asteroid when the level-paced interval has elapsed.
/// A fresh run (`last_spawn_ms == None`) spawns on its first frame.
fn maybe_spawn_asteroid(state: &mut GameState, now_ms: f64) {
    let due = state
        .last_spawn_ms
        .is_none_or(|t| now_ms - t > state.spawn_interval_ms());
    if due {
        state.spawn_asteroid();
        state.last_spawn_ms = Some(now_ms);
    }
}

/// Step 4: asteroid motion, side-wall bounce, and breach handling.
/// Returns true when a breach drained the planet and ended the run.
fn update_asteroids(state: &mut GameState, step: f32) -> bool {
    for a in &mut state.asteroids {
        a.pos += a.vel * step;
        a.rotation += a.rotation_speed * step;
        if hits_side_wall(a.pos.x, a.radius, PLAY_WIDTH) {
            a.vel.x = -a.vel.x;
        }
    }

    let before = state.asteroids.len();
    state
        .asteroids
        .retain(|a| !breached_bottom(a.pos.y, a.radius, PLAY_HEIGHT));
    let breaches = before - state.asteroids.len();

    for _ in 0..breaches {
        state.health -= BREACH_DAMAGE;
        state.push_event(GameEvent::Breach {
            health: state.health,
        });
        if state.health <= 0 {
            state.phase = GamePhase::GameOver;
            state.push_event(GameEvent::GameOver {
                final_score: state.score,
            });
            log::info!("game over, final score {}", state.score);
            return true;
        }
    }
    false
}

/// Step 5: laser-vs-asteroid resolution.
///
/// Each laser destroys at most one asteroid, and an asteroid destroyed this
/// frame is flagged so a later laser cannot claim it again. Compaction
/// happens once, after the whole scan.
fn resolve_collisions(state: &mut GameState) {
    if state.lasers.is_empty() || state.asteroids.is_empty() {
        return;
    }

    let mut laser_dead = vec![false; state.lasers.len()];
    let mut asteroid_dead = vec![false; state.asteroids.len()];
    let mut hits: Vec<usize> = Vec::new();

    for (li, laser) in state.lasers.iter().enumerate() {
        for (ai, asteroid) in state.asteroids.iter().enumerate() {
            if asteroid_dead[ai] {
                continue;
            }
            if laser_hits_asteroid(laser.pos, asteroid.pos, asteroid.radius) {
                laser_dead[li] = true;
                asteroid_dead[ai] = true;
                hits.push(ai);
                break;
            }
        }
    }

    let prev_level = state.level();
    for &ai in &hits {
        let (pos, radius) = {
            let a = &state.asteroids[ai];
            (a.pos, a.radius)
        };
        let reward = 10 * (radius / 5.0).round() as u32;
        state.explosions.push(Explosion::new(pos, radius));
        state.score += reward;
        state.push_event(GameEvent::AsteroidDestroyed { reward });
    }
    if state.level() > prev_level {
        state.push_event(GameEvent::LevelUp {
            level: state.level(),
        });
        log::info!("level up to {}", state.level());
    }

    let mut i = 0;
    state.lasers.retain(|_| {
        let dead = laser_dead[i];
        i += 1;
        !dead
    });
    let mut i = 0;
    state.asteroids.retain(|_| {
        let dead = asteroid_dead[i];
        i += 1;
        !dead
    });
}

/// Step 6: explosion fade-out
fn update_explosions(state: &mut GameState, step: f32) {
    for e in &mut state.explosions {
        e.life -= EXPLOSION_DECAY * step;
    }
    state.explosions.retain(|e| e.life > 0.0);
}

/// Step 7: starfield scroll with bottom-to-top wrap
fn advance_stars(state: &mut GameState, step: f32) {
    use rand::Rng;

    let GameState { stars, rng, .. } = state;
    for star in stars.iter_mut() {
        star.pos.y += star.speed * step;
        if star.pos.y > PLAY_HEIGHT {
            star.pos.y = 0.0;
            star.pos.x = rng.random_range(0.0..PLAY_WIDTH);
        }
    }
}
