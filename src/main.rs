//! Asteroids entry point
//!
//! Runs the simulation headless at a fixed frame rate. A windowed host
//! would swap the autopilot for keyboard sampling and draw each snapshot.

mod native {
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use asteroids::Settings;
    use asteroids::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Frames to wait on the game-over screen before restarting
    const RESTART_DELAY_FRAMES: u64 = 90;

    /// Scripted pilot: circles slowly, fires constantly, restarts after a pause
    #[derive(Default)]
    struct Autopilot {
        frames_over: u64,
    }

    impl Autopilot {
        fn sample(&mut self, state: &GameState, frame: u64, now: Duration) -> TickInput {
            if state.phase == GamePhase::GameOver {
                self.frames_over += 1;
                return TickInput {
                    restart: self.frames_over > RESTART_DELAY_FRAMES,
                    now,
                    ..Default::default()
                };
            }
            self.frames_over = 0;

            TickInput {
                turn_right: frame % 4 == 0,
                thrust: frame % 40 < 5,
                fire: true,
                now,
                ..Default::default()
            }
        }
    }

    /// Game instance holding all host-side state
    struct Game {
        state: GameState,
        rng: Pcg32,
        autopilot: Option<Autopilot>,
        started: Instant,
        frame: u64,
        best_score: u64,
    }

    impl Game {
        fn new(settings: &Settings) -> Self {
            let seed = settings.seed.unwrap_or_else(|| rand::random());
            log::info!("Seed: {}", seed);
            let mut rng = Pcg32::seed_from_u64(seed);
            let state = GameState::from_settings(settings, &mut rng);
            Self {
                state,
                rng,
                autopilot: settings.autopilot.then(Autopilot::default),
                started: Instant::now(),
                frame: 0,
                best_score: 0,
            }
        }

        /// Sample input and run one simulation step
        fn update(&mut self) {
            let now = self.started.elapsed();
            let input = match self.autopilot.as_mut() {
                Some(pilot) => pilot.sample(&self.state, self.frame, now),
                None => TickInput {
                    now,
                    ..Default::default()
                },
            };

            tick(&mut self.state, &input, &mut self.rng);
            self.frame += 1;
            self.best_score = self.best_score.max(self.state.score);

            for event in &self.state.events {
                match event {
                    GameEvent::ShipDestroyed { score } => {
                        log::info!("Frame {}: game over with score {}", self.frame, score)
                    }
                    GameEvent::Restarted => log::info!("Frame {}: new run", self.frame),
                    other => log::trace!("Frame {}: {:?}", self.frame, other),
                }
            }
        }
    }

    pub fn run() {
        env_logger::init();
        log::info!("Asteroids (headless) starting...");

        let path = std::env::args_os().nth(1).map(PathBuf::from);
        let settings = Settings::load(path.as_deref());
        let frame_time = settings.frame_duration();

        let mut game = Game::new(&settings);
        let mut next_frame = Instant::now();

        while settings.max_frames == 0 || game.frame < settings.max_frames {
            game.update();

            if game.frame % u64::from(settings.frame_rate) == 0 {
                let snap = game.state.snapshot();
                log::info!(
                    "Frame {}: {} | asteroids {} | bullets {}",
                    game.frame,
                    snap.hud.join(" / "),
                    snap.asteroids.len(),
                    snap.bullets.len()
                );
            }

            next_frame += frame_time;
            let now = Instant::now();
            if next_frame > now {
                std::thread::sleep(next_frame - now);
            } else {
                // Running behind; don't try to catch up
                next_frame = now;
            }
        }

        log::info!("Stopped after {} frames, best score {}", game.frame, game.best_score);
        match serde_json::to_string_pretty(&game.state.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize final snapshot: {}", e),
        }
    }
}

fn main() {
    native::run();
}
