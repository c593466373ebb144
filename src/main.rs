//! Dino Run entry point
//!
//! Drives the simulation headlessly: a fixed-step accumulator fed by a
//! frame clock, autopilot input, and audio cues routed to the log.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::thread;
    use std::time::{Duration, Instant};

    use clap::Parser;

    use dino_run::Settings;
    use dino_run::audio::{AudioManager, LogSink};
    use dino_run::consts::*;
    use dino_run::sim::{GameEvent, GameState, RunState, TickInput, tick};

    #[derive(Parser, Debug)]
    #[command(name = "dino-run", about = "Headless endless-runner simulation")]
    struct Args {
        /// Session seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Simulated seconds before quitting
        #[arg(long, default_value_t = 120.0)]
        seconds: f32,
        /// Runs to play before quitting
        #[arg(long, default_value_t = 3)]
        runs: u32,
        /// JSON settings file
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Pace frames at the target FPS instead of running flat out
        #[arg(long)]
        realtime: bool,
        /// Print the final frame as JSON
        #[arg(long)]
        dump_frame: bool,
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        audio: AudioManager,
        accumulator: f32,
        input: TickInput,
        /// Final score of every finished run
        scores: Vec<u32>,
    }

    impl Game {
        fn new(seed: u64, settings: &Settings) -> Self {
            let mut audio = AudioManager::new(Box::new(LogSink));
            audio.apply_settings(settings);
            Self {
                state: GameState::with_tuning(seed, settings.tuning.clone()),
                audio,
                accumulator: 0.0,
                input: TickInput {
                    autopilot: true,
                    ..Default::default()
                },
                scores: Vec::new(),
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.jump = false;
                self.input.restart = false;

                self.audio.handle_events(&self.state.events);
                for event in &self.state.events {
                    if let GameEvent::Death { score } = event {
                        log::info!("Run {} over with score {score}", self.state.runs);
                        self.scores.push(*score);
                    }
                }
            }
        }

        fn is_game_over(&self) -> bool {
            self.state.run_state == RunState::GameOver
        }
    }

    pub fn run() -> anyhow::Result<()> {
        env_logger::init();
        let args = Args::parse();

        let settings = Settings::load_or_default(args.settings.as_deref());
        let seed = args.seed.unwrap_or_else(rand::random);
        log::info!("Dino Run (headless) starting, seed {seed}");

        let mut game = Game::new(seed, &settings);
        let frame_dt = settings.frame_dt();
        let frame_budget = Duration::from_secs_f32(frame_dt);
        let total_frames = (args.seconds.max(0.0) / frame_dt).ceil() as u64;

        for _ in 0..total_frames {
            let frame_start = Instant::now();

            if game.is_game_over() {
                if game.scores.len() as u32 >= args.runs {
                    break;
                }
                game.input.restart = true;
            }
            game.update(frame_dt);

            if args.realtime {
                let spent = frame_start.elapsed();
                if spent < frame_budget {
                    thread::sleep(frame_budget - spent);
                }
            }
        }

        let frame = game.state.snapshot();
        if frame.run_state == RunState::Running {
            log::info!(
                "Time limit reached during run {} at score {}",
                game.state.runs,
                frame.score
            );
        }
        let best = game.scores.iter().copied().chain([frame.score]).max().unwrap_or(0);
        println!(
            "seed {seed}: {} finished run(s), scores {:?}, best {best}",
            game.scores.len(),
            game.scores
        );

        if args.dump_frame {
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser shell; embedders drive `dino_run::sim::tick` directly
}
