//! Meteor Guard - defend the planet from falling asteroids
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `renderer`: Canvas 2D presentation adapter (wasm only)
//! - `audio`: Web Audio sound cues (wasm only)
//! - `settings`: Player preferences persisted to LocalStorage

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (logical pixels)
    pub const PLAY_WIDTH: f32 = 800.0;
    pub const PLAY_HEIGHT: f32 = 600.0;

    /// Nominal frame duration; velocities are expressed per 60 Hz frame
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Cap on how many nominal frames one `advance` may cover
    pub const MAX_FRAME_STEP: f32 = 4.0;

    /// Ship defaults - parked above the planet, pointing up
    pub const SHIP_RADIUS: f32 = 15.0;
    pub const SHIP_ROTATION_SPEED: f32 = 0.1;
    pub const SHIP_BOTTOM_OFFSET: f32 = 50.0;

    /// Laser defaults
    pub const LASER_SPEED: f32 = 8.0;
    pub const LASER_WIDTH: f32 = 4.0;
    pub const LASER_HEIGHT: f32 = 10.0;
    pub const FIRE_COOLDOWN_MS: f64 = 300.0;

    /// Asteroid spawn ranges (diameter, velocities, spin)
    pub const ASTEROID_MIN_DIAMETER: f32 = 20.0;
    pub const ASTEROID_MAX_DIAMETER: f32 = 40.0;
    pub const ASTEROID_MIN_FALL_SPEED: f32 = 1.0;
    pub const ASTEROID_MAX_FALL_SPEED: f32 = 3.0;
    pub const ASTEROID_FALL_PER_LEVEL: f32 = 0.2;
    pub const ASTEROID_MAX_DRIFT: f32 = 1.0;
    pub const ASTEROID_MAX_SPIN: f32 = 0.025;

    /// Extra reach added to an asteroid's radius when testing laser hits
    pub const COLLISION_PAD: f32 = 5.0;

    /// Explosion fade-out per nominal frame, and rendered growth factor
    pub const EXPLOSION_DECAY: f32 = 0.05;
    pub const EXPLOSION_GROWTH: f32 = 1.5;

    /// Planet health pool
    pub const PLANET_MAX_HEALTH: i32 = 100;
    pub const BREACH_DAMAGE: i32 = 10;

    /// Asteroid spawn pacing: interval shrinks with level down to a floor
    pub const BASE_SPAWN_INTERVAL_MS: f64 = 1500.0;
    pub const SPAWN_INTERVAL_PER_LEVEL_MS: f64 = 100.0;
    pub const MIN_SPAWN_INTERVAL_MS: f64 = 500.0;

    /// Points per level
    pub const LEVEL_SCORE_STEP: u32 = 500;

    /// Background starfield
    pub const STAR_COUNT: usize = 100;
    pub const STAR_MIN_RADIUS: f32 = 0.5;
    pub const STAR_MAX_RADIUS: f32 = 2.0;
    pub const STAR_MIN_SPEED: f32 = 0.1;
    pub const STAR_MAX_SPEED: f32 = 0.4;
}

/// Convert a frame delta in milliseconds to a motion step in nominal frames.
///
/// Negative deltas clamp to zero so malformed input leaves the simulation
/// untouched; oversized deltas clamp to [`consts::MAX_FRAME_STEP`].
#[inline]
pub fn frame_step(dt_ms: f64) -> f32 {
    ((dt_ms.max(0.0) / consts::FRAME_MS) as f32).min(consts::MAX_FRAME_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_step_nominal() {
        assert!((frame_step(consts::FRAME_MS) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_frame_step_clamps_negative() {
        assert_eq!(frame_step(-50.0), 0.0);
    }

    #[test]
    fn test_frame_step_clamps_huge() {
        assert_eq!(frame_step(10_000.0), consts::MAX_FRAME_STEP);
    }
}
