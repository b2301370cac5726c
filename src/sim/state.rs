//! Game state and core simulation types
//!
//! `GameState` is the single owner of every entity store and all run stats.
//! The presentation adapter only ever reads from it; the host drains events.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for start input
    Title,
    /// Active gameplay
    Running,
    /// Planet destroyed, waiting for restart input
    GameOver,
}

/// Simulation events emitted during `advance`, drained once per frame by the
/// host. Best-effort consumers (audio, overlays) may drop them freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Run began from the title screen
    Started,
    /// Run began again after a game over
    Restarted,
    /// A laser was fired
    LaserFired,
    /// A laser destroyed an asteroid
    AsteroidDestroyed { reward: u32 },
    /// Score crossed a level threshold
    LevelUp { level: u32 },
    /// An asteroid reached the planet
    Breach { health: i32 },
    /// Health hit zero; the run is over
    GameOver { final_score: u32 },
}

/// The player's ship. One instance, never destroyed.
#[derive(Debug, Clone)]
pub struct Ship {
    pub pos: Vec2,
    /// Facing angle in radians; unbounded, only fed to sin/cos
    pub angle: f32,
    pub radius: f32,
}

impl Ship {
    /// Start pose: centered above the planet, pointing straight up
    pub fn at_start() -> Self {
        Self {
            pos: Vec2::new(PLAY_WIDTH / 2.0, PLAY_HEIGHT - SHIP_BOTTOM_OFFSET),
            angle: -std::f32::consts::FRAC_PI_2,
            radius: SHIP_RADIUS,
        }
    }

    /// Unit vector along the current facing
    pub fn facing(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin())
    }
}

/// A laser bolt fired by the ship
#[derive(Debug, Clone)]
pub struct Laser {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing at fire time, kept for the draw transform only
    pub angle: f32,
}

/// A falling asteroid
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
}

/// A fading explosion left behind by a destroyed asteroid
#[derive(Debug, Clone)]
pub struct Explosion {
    pub pos: Vec2,
    pub base_radius: f32,
    /// Normalized remaining life in [0, 1]
    pub life: f32,
}

impl Explosion {
    pub fn new(pos: Vec2, base_radius: f32) -> Self {
        Self {
            pos,
            base_radius,
            life: 1.0,
        }
    }

    /// Radius the adapter should draw this frame (grows as it fades)
    pub fn draw_radius(&self) -> f32 {
        self.base_radius * self.life * EXPLOSION_GROWTH
    }

    /// Largest radius this explosion can reach
    pub fn max_radius(&self) -> f32 {
        self.base_radius * EXPLOSION_GROWTH
    }

    /// Draw opacity in [0, 1]
    pub fn opacity(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }
}

/// A decorative background star. Fixed pool, wraps, never destroyed.
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
}

/// Complete game state: FSM, stats, entity stores, RNG
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    /// Planet health; starts at [`PLANET_MAX_HEALTH`], -10 per breach
    pub health: i32,
    pub ship: Ship,
    pub lasers: Vec<Laser>,
    pub asteroids: Vec<Asteroid>,
    pub explosions: Vec<Explosion>,
    pub stars: Vec<Star>,
    /// Wall-clock ms of the last shot; `None` means no shot yet this run
    pub last_fire_ms: Option<f64>,
    /// Wall-clock ms of the last asteroid spawn; `None` spawns immediately
    pub last_spawn_ms: Option<f64>,
    events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game on the title screen with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        // Starfield pool is seeded once and lives for the whole session
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.random_range(0.0..PLAY_WIDTH),
                    rng.random_range(0.0..PLAY_HEIGHT),
                ),
                radius: rng.random_range(STAR_MIN_RADIUS..STAR_MAX_RADIUS),
                speed: rng.random_range(STAR_MIN_SPEED..STAR_MAX_SPEED),
            })
            .collect();

        Self {
            seed,
            phase: GamePhase::Title,
            score: 0,
            health: PLANET_MAX_HEALTH,
            ship: Ship::at_start(),
            lasers: Vec::new(),
            asteroids: Vec::new(),
            explosions: Vec::new(),
            stars,
            last_fire_ms: None,
            last_spawn_ms: None,
            events: Vec::new(),
            rng,
        }
    }

    /// Current level, derived from score. Never stored, so the level law
    /// `level == score / 500 + 1` holds at every observation point.
    pub fn level(&self) -> u32 {
        self.score / LEVEL_SCORE_STEP + 1
    }

    /// Current asteroid spawn interval, derived from level with a floor
    pub fn spawn_interval_ms(&self) -> f64 {
        (BASE_SPAWN_INTERVAL_MS - f64::from(self.level()) * SPAWN_INTERVAL_PER_LEVEL_MS)
            .max(MIN_SPAWN_INTERVAL_MS)
    }

    /// Planet health as a fraction in [0, 1] for the HUD bar
    pub fn health_pct(&self) -> f32 {
        self.health.clamp(0, PLANET_MAX_HEALTH) as f32 / PLANET_MAX_HEALTH as f32
    }

    /// Title -> Running. Resets the run and emits [`GameEvent::Started`].
    pub fn start(&mut self) {
        self.reset_run();
        self.phase = GamePhase::Running;
        self.push_event(GameEvent::Started);
        log::info!("run started (seed {})", self.seed);
    }

    /// GameOver -> Running. Identical reset to `start`; there is no way
    /// back to the title screen.
    pub fn restart(&mut self) {
        self.reset_run();
        self.phase = GamePhase::Running;
        self.push_event(GameEvent::Restarted);
        log::info!("run restarted");
    }

    /// Clear stats, transient stores, and timers; re-seed the ship pose.
    /// The starfield survives resets.
    fn reset_run(&mut self) {
        self.score = 0;
        self.health = PLANET_MAX_HEALTH;
        self.ship = Ship::at_start();
        self.lasers.clear();
        self.asteroids.clear();
        self.explosions.clear();
        self.last_fire_ms = None;
        self.last_spawn_ms = None;
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Spawn one asteroid just above the top edge. Ranges are uniform:
    /// diameter [20, 40), drift [-1, 1), fall speed [1, 3) + 0.2 per level,
    /// spin [-0.025, 0.025).
    pub(crate) fn spawn_asteroid(&mut self) {
        let level = self.level();
        let diameter = self
            .rng
            .random_range(ASTEROID_MIN_DIAMETER..ASTEROID_MAX_DIAMETER);
        let x = self.rng.random_range(0.0..PLAY_WIDTH);
        let vx = self.rng.random_range(-ASTEROID_MAX_DRIFT..ASTEROID_MAX_DRIFT);
        let vy = self
            .rng
            .random_range(ASTEROID_MIN_FALL_SPEED..ASTEROID_MAX_FALL_SPEED)
            + ASTEROID_FALL_PER_LEVEL * level as f32;
        let rotation_speed = self.rng.random_range(-ASTEROID_MAX_SPIN..ASTEROID_MAX_SPIN);

        self.asteroids.push(Asteroid {
            pos: Vec2::new(x, -diameter),
            vel: Vec2::new(vx, vy),
            radius: diameter / 2.0,
            rotation: 0.0,
            rotation_speed,
        });
    }
}
