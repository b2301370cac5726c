//! Boundary and hit-test predicates
//!
//! Small pure functions so every inequality has a test pinning its direction.

use glam::Vec2;

use crate::consts::COLLISION_PAD;

/// Laser-vs-asteroid hit test: centers closer than `radius + pad`.
pub fn laser_hits_asteroid(laser_pos: Vec2, asteroid_pos: Vec2, asteroid_radius: f32) -> bool {
    laser_pos.distance(asteroid_pos) < asteroid_radius + COLLISION_PAD
}

/// Inclusive exit policy: a point exactly on an edge counts as out of the
/// play area. Only strictly interior points survive.
pub fn out_of_bounds(pos: Vec2, width: f32, height: f32) -> bool {
    pos.x <= 0.0 || pos.x >= width || pos.y <= 0.0 || pos.y >= height
}

/// True when an asteroid's circular bound crosses the left or right edge
pub fn hits_side_wall(x: f32, radius: f32, width: f32) -> bool {
    x - radius < 0.0 || x + radius > width
}

/// True when an asteroid's top edge has passed the bottom boundary (a breach)
pub fn breached_bottom(y: f32, radius: f32, height: f32) -> bool {
    y - radius > height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laser_hit_inside_pad() {
        let asteroid = Vec2::new(100.0, 100.0);
        // Radius 20 + pad 5: distance 24 hits, distance 25 misses
        assert!(laser_hits_asteroid(Vec2::new(124.0, 100.0), asteroid, 20.0));
        assert!(!laser_hits_asteroid(Vec2::new(125.0, 100.0), asteroid, 20.0));
    }

    #[test]
    fn test_out_of_bounds_edge_is_out() {
        // Exactly on an edge is removed; tested both ways
        assert!(out_of_bounds(Vec2::new(0.0, 300.0), 800.0, 600.0));
        assert!(out_of_bounds(Vec2::new(800.0, 300.0), 800.0, 600.0));
        assert!(out_of_bounds(Vec2::new(400.0, 0.0), 800.0, 600.0));
        assert!(out_of_bounds(Vec2::new(400.0, 600.0), 800.0, 600.0));
        assert!(!out_of_bounds(Vec2::new(0.1, 300.0), 800.0, 600.0));
        assert!(!out_of_bounds(Vec2::new(799.9, 599.9), 800.0, 600.0));
    }

    #[test]
    fn test_side_wall_contact() {
        assert!(hits_side_wall(9.0, 10.0, 800.0));
        assert!(hits_side_wall(795.0, 10.0, 800.0));
        assert!(!hits_side_wall(400.0, 10.0, 800.0));
        // Touching exactly does not trigger the bounce
        assert!(!hits_side_wall(10.0, 10.0, 800.0));
    }

    #[test]
    fn test_breach_requires_top_edge_past_bottom() {
        // Asteroid still partially visible: not a breach
        assert!(!breached_bottom(605.0, 15.0, 600.0));
        assert!(!breached_bottom(615.0, 15.0, 600.0));
        // Top edge below the boundary: breach
        assert!(breached_bottom(616.0, 15.0, 600.0));
    }
}
