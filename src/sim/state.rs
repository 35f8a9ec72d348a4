//! Game state and core simulation types
//!
//! Everything the per-frame step mutates lives in [`GameState`]. The state
//! is an ordinary owned value: the host holds it and lends it to
//! [`super::tick`] once per frame.

use std::f32::consts::TAU;
use std::time::Duration;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::*;
use crate::settings::Settings;
use crate::heading_vector;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Ship was hit; waiting for restart input
    GameOver,
}

/// Something that happened during the last tick
///
/// Cleared at the start of every tick. Hosts use these for logging and
/// effects; the simulation never reads them back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BulletFired,
    AsteroidSpawned,
    /// A bullet destroyed an asteroid of `radius`; `split` if it broke in two
    AsteroidDestroyed { radius: f32, split: bool },
    ShipDestroyed { score: u64 },
    Restarted,
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing angle (radians)
    pub angle: f32,
}

impl Ship {
    /// A stationary ship facing angle 0
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
        }
    }

    /// Hull triangle: nose first, then the two rear corners
    pub fn outline(&self) -> [Vec2; 3] {
        let rear = TAU / 3.0;
        [
            self.pos + heading_vector(self.angle, SHIP_HULL_RADIUS),
            self.pos + heading_vector(self.angle + rear, SHIP_HULL_RADIUS),
            self.pos + heading_vector(self.angle - rear, SHIP_HULL_RADIUS),
        ]
    }
}

/// A projectile. Bullets have no radius; they collide as points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// An asteroid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Asteroid {
    /// Asteroid moving along `angle` at `speed`
    pub fn with_heading(pos: Vec2, angle: f32, speed: f32, radius: f32) -> Self {
        Self {
            pos,
            vel: heading_vector(angle, speed),
            radius,
        }
    }

    /// Full-size asteroid at a random point with random heading and speed
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let angle = rng.random_range(0.0..TAU);
        let speed = rng.random_range(ASTEROID_MIN_SPEED..ASTEROID_MAX_SPEED);
        let pos = Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height));
        Self::with_heading(pos, angle, speed, ASTEROID_START_RADIUS)
    }

    /// Current speed (units per frame)
    pub fn speed(&self) -> f32 {
        // A stationary parent still yields children at SPLIT_SPEED_BONUS
        if self.vel == Vec2::ZERO {
            0.0
        } else {
            self.vel.length()
        }
    }

    /// Children produced when this asteroid is shot, if it is big enough
    ///
    /// Both children start at this asteroid's position with half its radius
    /// and independent random headings.
    pub fn split<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<[Asteroid; 2]> {
        if self.radius <= ASTEROID_MIN_SPLIT_RADIUS {
            return None;
        }
        let speed = self.speed() + SPLIT_SPEED_BONUS;
        let radius = self.radius / 2.0;
        let first = rng.random_range(0.0..TAU);
        let second = rng.random_range(0.0..TAU);
        Some([
            Self::with_heading(self.pos, first, speed, radius),
            Self::with_heading(self.pos, second, speed, radius),
        ])
    }
}

/// Reject a zero screen dimension when loading a state
fn positive_dimension<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = u32::deserialize(deserializer)?;
    if value == 0 {
        return Err(serde::de::Error::custom("screen dimension must be positive"));
    }
    Ok(value)
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Screen dimensions, fixed at construction and always positive
    #[serde(deserialize_with = "positive_dimension")]
    width: u32,
    #[serde(deserialize_with = "positive_dimension")]
    height: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Asteroids destroyed this run
    pub score: u64,
    /// Player ship
    pub ship: Ship,
    /// Live bullets (order irrelevant)
    pub bullets: Vec<Bullet>,
    /// Live asteroids (newest last)
    pub asteroids: Vec<Asteroid>,
    /// Host time of the last shot
    pub last_fire: Option<Duration>,
    /// Host time of the last periodic spawn
    pub last_spawn: Option<Duration>,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Empty playfield with the ship centred and no asteroids
    pub fn empty(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            phase: GamePhase::Playing,
            score: 0,
            ship: Ship::new(Self::centre_of(width, height)),
            bullets: Vec::new(),
            asteroids: Vec::new(),
            last_fire: None,
            last_spawn: None,
            events: Vec::new(),
        }
    }

    /// New game with `initial_asteroids` random asteroids
    ///
    /// The ship starts at the screen centre and the opening field covers the
    /// whole screen, whatever its size.
    pub fn new<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        initial_asteroids: usize,
        rng: &mut R,
    ) -> Self {
        let mut state = Self::empty(width, height);
        state.seed_asteroids(initial_asteroids, rng);
        log::info!(
            "New game on {}x{} with {} asteroids",
            state.width,
            state.height,
            state.asteroids.len()
        );
        state
    }

    /// New game configured from startup settings
    pub fn from_settings<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Self {
        Self::new(
            settings.screen_width,
            settings.screen_height,
            settings.initial_asteroids,
            rng,
        )
    }

    fn centre_of(width: u32, height: u32) -> Vec2 {
        Vec2::new(width as f32 / 2.0, height as f32 / 2.0)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Screen size as floats, for physics
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Screen centre
    pub fn centre(&self) -> Vec2 {
        Self::centre_of(self.width, self.height)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Strictly inside `[0, width) x [0, height)`
    pub fn in_bounds(&self, pos: Vec2) -> bool {
        let bounds = self.bounds();
        pos.x >= 0.0 && pos.x < bounds.x && pos.y >= 0.0 && pos.y < bounds.y
    }

    /// Append `count` random full-size asteroids
    pub fn seed_asteroids<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        let bounds = self.bounds();
        self.asteroids
            .extend((0..count).map(|_| Asteroid::random(rng, bounds.x, bounds.y)));
    }

    /// Start a fresh run: ship centred and stopped, score and bullets
    /// cleared, asteroid field replaced with a fixed number of new rocks
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.ship = Ship::new(self.centre());
        self.bullets.clear();
        self.asteroids.clear();
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.seed_asteroids(RESTART_ASTEROID_COUNT, rng);
        self.events.push(GameEvent::Restarted);
        log::info!("Restarted with {} asteroids", self.asteroids.len());
    }
}
