//! Obstacle spawner: cooldown timer plus weighted random choice

use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::obstacle::ObstacleKind;
use crate::consts::{FLYING_ALTITUDES, GROUND_OBSTACLE_VARIANTS};

const FLYING_BANDS: [usize; FLYING_ALTITUDES.len()] = [0, 1];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleSpawner {
    /// Time of the most recent spawn (or reset)
    pub last_spawn: Duration,
    /// Minimum time between spawns
    pub cooldown: Duration,
    /// Probability that a spawn is a ground obstacle
    pub ground_chance: f64,
}

impl ObstacleSpawner {
    pub fn new(cooldown_secs: f32, ground_chance: f64) -> Self {
        Self {
            last_spawn: Duration::ZERO,
            cooldown: super::clock::duration_from_secs(cooldown_secs),
            ground_chance: ground_chance.clamp(0.0, 1.0),
        }
    }

    /// Restart the cooldown from `now`
    pub fn reset(&mut self, now: Duration) {
        self.last_spawn = now;
    }

    /// Whether the cooldown has elapsed at `now`
    pub fn is_ready(&self, now: Duration) -> bool {
        now.saturating_sub(self.last_spawn) >= self.cooldown
    }

    /// Pick what to spawn if the cooldown has elapsed
    pub fn poll<R: Rng>(&mut self, now: Duration, rng: &mut R) -> Option<ObstacleKind> {
        if !self.is_ready(now) {
            return None;
        }
        self.last_spawn = now;
        Some(self.choose_kind(rng))
    }

    fn choose_kind<R: Rng>(&self, rng: &mut R) -> ObstacleKind {
        if rng.random_bool(self.ground_chance) {
            ObstacleKind::Ground {
                variant: rng.random_range(1..=GROUND_OBSTACLE_VARIANTS),
            }
        } else {
            let band = FLYING_BANDS.choose(rng).copied().unwrap_or(0);
            ObstacleKind::Flying { band }
        }
    }
}
