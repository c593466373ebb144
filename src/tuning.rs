//! Data-driven game balance
//!
//! Every rate here is expressed per reference frame (1/60 s), so a tick of
//! `dt` seconds applies it `frames(dt)` times.

use serde::{Deserialize, Serialize};

/// Balance parameters for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Upward velocity applied by a jump (negative = up)
    pub jump_impulse: f32,
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Inset applied on every side of the player rect for collisions
    pub footprint_margin: f32,
    /// Seconds between player animation frames
    pub player_anim_interval: f32,

    // === Obstacles ===
    /// Seconds between obstacle spawns
    pub spawn_cooldown: f32,
    /// Probability that a spawn is a ground obstacle
    pub ground_obstacle_chance: f64,

    // === Speed & score ===
    /// Scroll speed at run start and after restart
    pub base_speed: f32,
    /// Speed added per frame while running
    pub speed_ramp: f32,
    /// Score added per frame while running
    pub score_rate: f64,
    /// Milestone cue spacing in whole points
    pub milestone_interval: u32,

    // === Scenery ===
    /// Seconds between cloud spawns
    pub cloud_interval: f32,
    /// Cloud drift per frame (independent of scroll speed)
    pub cloud_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            jump_impulse: -30.0,
            gravity: 2.0,
            footprint_margin: 10.0,
            player_anim_interval: 0.1,

            spawn_cooldown: 0.8,
            ground_obstacle_chance: 0.7,

            base_speed: 5.0,
            speed_ramp: 0.0025,
            score_rate: 0.1,
            milestone_interval: 100,

            cloud_interval: 3.0,
            cloud_speed: 1.0,
        }
    }
}

impl Tuning {
    /// Clamp values that would break simulation invariants
    pub fn sanitized(mut self) -> Self {
        if !(0.0..=1.0).contains(&self.ground_obstacle_chance) {
            log::warn!(
                "ground_obstacle_chance {} out of range, clamping",
                self.ground_obstacle_chance
            );
            self.ground_obstacle_chance = self.ground_obstacle_chance.clamp(0.0, 1.0);
        }
        self.base_speed = self.base_speed.max(0.0);
        self.speed_ramp = self.speed_ramp.max(0.0);
        self.score_rate = self.score_rate.max(0.0);
        self.gravity = self.gravity.max(0.0);
        self.footprint_margin = self.footprint_margin.max(0.0);
        self.milestone_interval = self.milestone_interval.max(1);
        self
    }
}
