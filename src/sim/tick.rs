//! Per-frame simulation step
//!
//! One call to [`tick`] advances the game by exactly one rendered frame.
//! Physics constants are per-frame, so there is no `dt`; only the bullet
//! cooldown and the asteroid spawner look at host time.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{any_hit, first_hit};
use super::state::{Asteroid, Bullet, GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::{heading_vector, wrap_position};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Rotate counter-clockwise
    pub turn_left: bool,
    /// Rotate clockwise
    pub turn_right: bool,
    /// Accelerate forward
    pub thrust: bool,
    /// Accelerate backward
    pub reverse: bool,
    /// Fire a bullet (rate limited)
    pub fire: bool,
    /// Start a new run (only honoured after game over)
    pub restart: bool,
    /// Host monotonic time, non-decreasing between ticks
    pub now: Duration,
}

/// Advance the game state by one frame
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, input: &TickInput, rng: &mut R) {
    state.events.clear();

    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.restart(rng);
        }
        return;
    }

    steer_ship(state, input);

    if input.fire {
        fire_bullet(state, input.now);
    }
    move_bullets(state);

    spawn_asteroid(state, input.now, rng);
    move_asteroids(state);

    resolve_bullet_hits(state, rng);
    check_ship_collision(state);
}

/// Turn, thrust, damp, integrate and wrap the ship
fn steer_ship(state: &mut GameState, input: &TickInput) {
    let bounds = state.bounds();
    let ship = &mut state.ship;

    if input.turn_left {
        ship.angle -= SHIP_TURN_STEP;
    }
    if input.turn_right {
        ship.angle += SHIP_TURN_STEP;
    }
    if input.thrust {
        ship.vel += heading_vector(ship.angle, SHIP_ACCELERATION);
    }
    if input.reverse {
        ship.vel -= heading_vector(ship.angle, SHIP_ACCELERATION);
    }

    // Move with this frame's velocity, then bleed speed for the next one
    ship.pos += ship.vel;
    ship.vel *= SHIP_FRICTION;
    ship.pos = wrap_position(ship.pos, bounds.x, bounds.y);
}

/// Spawn a bullet at the ship unless the cooldown is still running
fn fire_bullet(state: &mut GameState, now: Duration) {
    let cooled_down = match state.last_fire {
        Some(last) => now.saturating_sub(last) > FIRE_COOLDOWN,
        None => true,
    };
    if !state.bullets.is_empty() && !cooled_down {
        return;
    }

    state.bullets.push(Bullet {
        pos: state.ship.pos,
        vel: heading_vector(state.ship.angle, BULLET_SPEED),
    });
    state.last_fire = Some(now);
    state.events.push(GameEvent::BulletFired);
    log::debug!("Bullet fired at ({:.1}, {:.1})", state.ship.pos.x, state.ship.pos.y);
}

/// Move bullets and drop the ones that left the screen. Bullets never wrap.
fn move_bullets(state: &mut GameState) {
    for bullet in &mut state.bullets {
        bullet.pos += bullet.vel;
    }
    let bounds = state.bounds();
    state.bullets.retain(|bullet| {
        let p = bullet.pos;
        p.x >= 0.0 && p.x < bounds.x && p.y >= 0.0 && p.y < bounds.y
    });
}

/// Add one random asteroid when the spawn interval has elapsed
fn spawn_asteroid<R: Rng + ?Sized>(state: &mut GameState, now: Duration, rng: &mut R) {
    let due = match state.last_spawn {
        Some(last) => now.saturating_sub(last) > ASTEROID_SPAWN_INTERVAL,
        None => true,
    };
    if !due {
        return;
    }

    let bounds = state.bounds();
    let asteroid = Asteroid::random(rng, bounds.x, bounds.y);
    log::debug!(
        "Asteroid spawned at ({:.1}, {:.1}), speed {:.2}",
        asteroid.pos.x,
        asteroid.pos.y,
        asteroid.speed()
    );
    state.asteroids.push(asteroid);
    state.last_spawn = Some(now);
    state.events.push(GameEvent::AsteroidSpawned);
}

/// Drift and wrap every asteroid. Asteroids keep their speed forever.
fn move_asteroids(state: &mut GameState) {
    let bounds = state.bounds();
    for asteroid in &mut state.asteroids {
        asteroid.pos = wrap_position(asteroid.pos + asteroid.vel, bounds.x, bounds.y);
    }
}

/// Each bullet destroys at most one asteroid per frame
///
/// Bullets are checked newest first, asteroids newest first; the first
/// asteroid found absorbs the bullet even if others overlap it. Children of
/// a split are appended and can be hit by later bullets in the same frame.
fn resolve_bullet_hits<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    for i in (0..state.bullets.len()).rev() {
        let Some(j) = first_hit(state.bullets[i].pos, &state.asteroids) else {
            continue;
        };
        state.bullets.remove(i);
        split_asteroid(state, j, rng);
        state.score += 1;
    }
}

/// Remove the asteroid at `index`, replacing it with its children if any
fn split_asteroid<R: Rng + ?Sized>(state: &mut GameState, index: usize, rng: &mut R) {
    let parent = state.asteroids.remove(index);
    let children = parent.split(rng);
    let split = children.is_some();
    if let Some(children) = children {
        state.asteroids.extend(children);
    }
    state.events.push(GameEvent::AsteroidDestroyed {
        radius: parent.radius,
        split,
    });
    log::debug!("Asteroid r={} destroyed (split: {})", parent.radius, split);
}

/// End the run if the ship sits inside any asteroid
fn check_ship_collision(state: &mut GameState) {
    if any_hit(state.ship.pos, &state.asteroids) {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::ShipDestroyed { score: state.score });
        log::info!("Ship destroyed. Final score: {}", state.score);
    }
}
