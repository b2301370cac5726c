//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (store order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{breached_bottom, hits_side_wall, laser_hits_asteroid, out_of_bounds};
pub use state::{Asteroid, Explosion, GameEvent, GamePhase, GameState, Laser, Ship, Star};
pub use tick::{InputSnapshot, advance};
