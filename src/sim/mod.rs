//! Frame-driven simulation module
//!
//! All gameplay logic lives here:
//! - One owned `GameState`, advanced by `tick` once per frame
//! - Randomness comes in through a caller-supplied `rand::Rng`
//! - No rendering, windowing or platform dependencies

pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{any_hit, first_hit, point_hits_asteroid, point_in_circle};
pub use snapshot::{AsteroidView, ShipView, Snapshot};
pub use state::{Asteroid, Bullet, GameEvent, GamePhase, GameState, Ship};
pub use tick::{TickInput, tick};
