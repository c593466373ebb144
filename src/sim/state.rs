//! Game state and core simulation types
//!
//! Everything the tick function mutates lives in `GameState`. It is built
//! once per session and reset wholesale on restart.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::SimClock;
use super::obstacle::{Obstacle, ObstacleKind, ObstacleSet};
use super::player::PlayerBody;
use super::scenery::Scenery;
use super::score::ScoreTracker;
use super::spawner::ObstacleSpawner;
use crate::consts::{GROUND_Y, PLAYER_X};
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Running,
    /// Collided; waiting for restart
    GameOver,
}

/// One-shot cues emitted by a tick for the audio layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player left the ground
    Jump,
    /// Score reached a multiple of the milestone interval
    Milestone { score: u32 },
    /// Run ended; carries the final score
    Death { score: u32 },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Generator driving obstacle and cloud choices
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub clock: SimClock,
    pub run_state: RunState,
    pub player: PlayerBody,
    pub obstacles: ObstacleSet,
    pub spawner: ObstacleSpawner,
    pub score: ScoreTracker,
    pub scenery: Scenery,
    /// Runs started this session, including the current one
    pub runs: u32,
    /// Cues produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        log::info!("New session (seed {seed})");
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            clock: SimClock::new(),
            run_state: RunState::Running,
            player: PlayerBody::at_rest(PLAYER_X, GROUND_Y),
            obstacles: ObstacleSet::new(),
            spawner: ObstacleSpawner::new(tuning.spawn_cooldown, tuning.ground_obstacle_chance),
            score: ScoreTracker::new(tuning.base_speed),
            scenery: Scenery::new(tuning.cloud_interval),
            runs: 1,
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an obstacle of `kind` at its spawn point, moving at the current speed
    pub fn spawn_obstacle(&mut self, kind: ObstacleKind) -> u32 {
        let id = self.next_entity_id();
        self.obstacles.insert(Obstacle::spawn(id, kind, self.score.speed));
        log::debug!("Spawned obstacle {id}: {kind:?}");
        id
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.run_state == RunState::GameOver
    }

    /// Start a fresh run. The clock and generator keep going so the
    /// session stays reproducible.
    pub fn restart(&mut self) {
        let now = self.clock.now();
        let final_score = self.score.display_score();

        self.player = PlayerBody::at_rest(self.player.x, self.player.rest_y);
        self.obstacles.clear();
        self.spawner.reset(now);
        self.score.reset();
        self.scenery.reset(now);
        self.run_state = RunState::Running;
        self.runs += 1;

        log::info!("Run {} started (previous score {final_score})", self.runs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(1);
        assert_eq!(state.run_state, RunState::Running);
        assert_eq!(state.score.score, 0.0);
        assert_eq!(state.score.speed, 5.0);
        assert!(state.obstacles.is_empty());
        assert!(state.player.is_grounded());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(1);
        state.spawn_obstacle(ObstacleKind::Ground { variant: 2 });
        state.score.score = 321.0;
        state.score.speed = 12.0;
        state.player.jump(-30.0);
        state.player.integrate(0.1, 2.0);
        state.player.set_ducking(true);
        state.run_state = RunState::GameOver;

        state.restart();

        assert_eq!(state.run_state, RunState::Running);
        assert_eq!(state.score.score, 0.0);
        assert_eq!(state.score.speed, state.tuning.base_speed);
        assert!(state.obstacles.is_empty());
        assert!(state.player.is_grounded());
        assert_eq!(state.player.velocity, 0.0);
        assert_eq!(state.player.posture, crate::sim::Posture::Standing);
        assert_eq!(state.runs, 2);
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut state = GameState::new(1);
        let a = state.spawn_obstacle(ObstacleKind::Flying { band: 0 });
        let b = state.spawn_obstacle(ObstacleKind::Ground { variant: 1 });
        assert!(b > a);
        assert_eq!(state.obstacles.len(), 2);
    }
}
