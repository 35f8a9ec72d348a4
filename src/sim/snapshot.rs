//! Read-only view of a frame for renderers
//!
//! Built from [`GameState`] after each tick. Renderers draw this and never
//! touch the state itself.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Ship pose plus its hull triangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub pos: Vec2,
    pub angle: f32,
    /// Nose, then the two rear corners
    pub outline: [Vec2; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub screen_width: u32,
    pub screen_height: u32,
    pub ship: ShipView,
    pub bullets: Vec<Vec2>,
    pub asteroids: Vec<AsteroidView>,
    pub score: u64,
    pub game_over: bool,
    /// HUD text, top line first
    pub hud: Vec<String>,
}

impl GameState {
    /// Capture the current frame for drawing
    pub fn snapshot(&self) -> Snapshot {
        let game_over = self.is_game_over();
        let hud = if game_over {
            vec!["Game Over".to_string(), "Press R to Restart".to_string()]
        } else {
            vec![format!("Score: {}", self.score)]
        };

        Snapshot {
            screen_width: self.width(),
            screen_height: self.height(),
            ship: ShipView {
                pos: self.ship.pos,
                angle: self.ship.angle,
                outline: self.ship.outline(),
            },
            bullets: self.bullets.iter().map(|b| b.pos).collect(),
            asteroids: self
                .asteroids
                .iter()
                .map(|a| AsteroidView {
                    pos: a.pos,
                    radius: a.radius,
                })
                .collect(),
            score: self.score,
            game_over,
            hud,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Asteroid, Bullet, GamePhase};

    #[test]
    fn test_snapshot_playing() {
        let mut state = GameState::empty(800, 600);
        state.score = 4;
        state.bullets.push(Bullet {
            pos: Vec2::new(1.0, 2.0),
            vel: Vec2::X,
        });
        state.asteroids.push(Asteroid {
            pos: Vec2::new(50.0, 60.0),
            vel: Vec2::Y,
            radius: 15.0,
        });

        let snap = state.snapshot();
        assert_eq!(snap.screen_width, 800);
        assert_eq!(snap.ship.pos, Vec2::new(400.0, 300.0));
        assert_eq!(snap.bullets, vec![Vec2::new(1.0, 2.0)]);
        assert_eq!(
            snap.asteroids,
            vec![AsteroidView {
                pos: Vec2::new(50.0, 60.0),
                radius: 15.0
            }]
        );
        assert!(!snap.game_over);
        assert_eq!(snap.hud, vec!["Score: 4".to_string()]);
    }

    #[test]
    fn test_snapshot_game_over() {
        let mut state = GameState::empty(800, 600);
        state.phase = GamePhase::GameOver;
        let snap = state.snapshot();
        assert!(snap.game_over);
        assert_eq!(snap.hud[0], "Game Over");
        assert_eq!(snap.hud[1], "Press R to Restart");
    }

    #[test]
    fn test_snapshot_json() {
        let state = GameState::empty(800, 600);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, 0);
        assert_eq!(back.screen_height, 600);
        assert!(json.contains("\"game_over\":false"));
    }
}
