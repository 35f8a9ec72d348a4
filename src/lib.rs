//! Asteroids - a screen-wrapping arcade shooter
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (ship, bullets, asteroids, collisions)
//! - `settings`: Startup configuration loaded from JSON
//!
//! Rendering and input sampling live outside the library. A host feeds
//! [`sim::TickInput`] into [`sim::tick`] once per frame and draws the
//! [`sim::Snapshot`] it gets back from the state.

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Default screen dimensions
    pub const DEFAULT_SCREEN_WIDTH: u32 = 1720;
    pub const DEFAULT_SCREEN_HEIGHT: u32 = 1060;

    /// Ship turn rate (radians per frame)
    pub const SHIP_TURN_STEP: f32 = 0.1;
    /// Ship thrust (units per frame²), applied forward or in reverse
    pub const SHIP_ACCELERATION: f32 = 0.2;
    /// Per-frame velocity damping
    pub const SHIP_FRICTION: f32 = 0.99;
    /// Distance from ship centre to each hull vertex
    pub const SHIP_HULL_RADIUS: f32 = 10.0;

    /// Bullet speed (units per frame)
    pub const BULLET_SPEED: f32 = 5.0;
    /// Minimum time between shots
    pub const FIRE_COOLDOWN: Duration = Duration::from_millis(300);

    /// Time between periodic asteroid spawns
    pub const ASTEROID_SPAWN_INTERVAL: Duration = Duration::from_secs(3);
    /// Radius of a freshly spawned asteroid
    pub const ASTEROID_START_RADIUS: f32 = 30.0;
    /// Asteroids at or below this radius are destroyed without splitting
    pub const ASTEROID_MIN_SPLIT_RADIUS: f32 = 10.0;
    /// Spawn speed range (units per frame), half-open
    pub const ASTEROID_MIN_SPEED: f32 = 1.0;
    pub const ASTEROID_MAX_SPEED: f32 = 3.0;
    /// Speed added to each child on a split
    pub const SPLIT_SPEED_BONUS: f32 = 0.5;

    /// Asteroids seeded on restart
    pub const RESTART_ASTEROID_COUNT: usize = 10;
    /// Asteroids seeded when a new game is created
    pub const DEFAULT_INITIAL_ASTEROIDS: usize = 5;
}

/// Wrap a coordinate into `[0, max)` using floored modulo
///
/// Works for any overshoot, including large negative values. Float rounding
/// can make `rem_euclid` return `max` itself for tiny negative inputs; that
/// case folds back to 0. Exact negative multiples of `max` give `-0.0`,
/// which is normalized to `0.0`.
#[inline]
pub fn wrap_coordinate(value: f32, max: f32) -> f32 {
    let wrapped = value.rem_euclid(max);
    if wrapped >= max { 0.0 } else { wrapped + 0.0 }
}

/// Wrap a position into the `width` x `height` screen
#[inline]
pub fn wrap_position(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(wrap_coordinate(pos.x, width), wrap_coordinate(pos.y, height))
}

/// Unit vector pointing along `angle` (radians), scaled by `length`
#[inline]
pub fn heading_vector(angle: f32, length: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin()) * length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_coordinate_in_range() {
        assert_eq!(wrap_coordinate(12.5, 100.0), 12.5);
        assert_eq!(wrap_coordinate(0.0, 100.0), 0.0);
    }

    #[test]
    fn test_wrap_coordinate_overshoot() {
        assert!((wrap_coordinate(105.0, 100.0) - 5.0).abs() < 1e-4);
        assert!((wrap_coordinate(-5.0, 100.0) - 95.0).abs() < 1e-4);
        assert!((wrap_coordinate(-1005.0, 100.0) - 95.0).abs() < 1e-3);
        assert_eq!(wrap_coordinate(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_wrap_coordinate_tiny_negative() {
        let wrapped = wrap_coordinate(-1e-9, 1720.0);
        assert!((0.0..1720.0).contains(&wrapped));
    }

    #[test]
    fn test_wrap_coordinate_no_negative_zero() {
        for value in [-1720.0, -3440.00001, 0.0, -0.0] {
            let wrapped = wrap_coordinate(value, 1720.0);
            assert_eq!(wrapped, 0.0);
            assert!(wrapped.is_sign_positive(), "{value} wrapped to -0.0");
        }
    }

    #[test]
    fn test_heading_vector() {
        let v = heading_vector(0.0, 5.0);
        assert!((v.x - 5.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);

        let v = heading_vector(std::f32::consts::FRAC_PI_2, 2.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 2.0).abs() < 1e-6);
    }
}
