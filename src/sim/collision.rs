//! Point-versus-circle collision tests
//!
//! Bullets and the ship both collide as points; asteroids are circles.

use glam::Vec2;

use super::state::Asteroid;

/// True when `point` lies strictly inside the circle
///
/// A point exactly on the rim does not count.
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance(center) < radius
}

/// True when `point` lies strictly inside `asteroid`
#[inline]
pub fn point_hits_asteroid(point: Vec2, asteroid: &Asteroid) -> bool {
    point_in_circle(point, asteroid.pos, asteroid.radius)
}

/// Index of the first asteroid containing `point`, scanning newest first
///
/// When asteroids overlap only the first one found is reported.
pub fn first_hit(point: Vec2, asteroids: &[Asteroid]) -> Option<usize> {
    asteroids
        .iter()
        .rposition(|asteroid| point_hits_asteroid(point, asteroid))
}

/// True when `point` is inside any asteroid
pub fn any_hit(point: Vec2, asteroids: &[Asteroid]) -> bool {
    asteroids
        .iter()
        .any(|asteroid| point_hits_asteroid(point, asteroid))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rock(x: f32, y: f32, radius: f32) -> Asteroid {
        Asteroid {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius,
        }
    }

    #[test]
    fn test_boundary_is_exclusive() {
        let asteroid = rock(100.0, 100.0, 30.0);
        assert!(!point_hits_asteroid(Vec2::new(130.0, 100.0), &asteroid));
        assert!(point_hits_asteroid(Vec2::new(129.999, 100.0), &asteroid));
        assert!(!point_hits_asteroid(Vec2::new(100.0, 70.0), &asteroid));
        assert!(point_hits_asteroid(Vec2::new(100.0, 70.001), &asteroid));
    }

    #[test]
    fn test_centre_hits() {
        assert!(point_in_circle(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), 0.5));
    }

    #[test]
    fn test_diagonal_miss() {
        // (21, 21) is ~29.7 from origin; radius 29 misses, 30 hits
        assert!(!point_in_circle(Vec2::new(21.0, 21.0), Vec2::ZERO, 29.0));
        assert!(point_in_circle(Vec2::new(21.0, 21.0), Vec2::ZERO, 30.0));
    }

    #[test]
    fn test_first_hit_prefers_newest() {
        let asteroids = [rock(100.0, 100.0, 30.0), rock(110.0, 100.0, 30.0), rock(500.0, 500.0, 30.0)];
        assert_eq!(first_hit(Vec2::new(105.0, 100.0), &asteroids), Some(1));
        assert_eq!(first_hit(Vec2::new(75.0, 100.0), &asteroids), Some(0));
        assert_eq!(first_hit(Vec2::new(300.0, 300.0), &asteroids), None);
    }

    #[test]
    fn test_any_hit() {
        let asteroids = [rock(100.0, 100.0, 30.0)];
        assert!(any_hit(Vec2::new(90.0, 90.0), &asteroids));
        assert!(!any_hit(Vec2::new(0.0, 0.0), &asteroids));
        assert!(!any_hit(Vec2::new(0.0, 0.0), &[]));
    }
}
