//! Dino Run - An endless-runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, obstacles, scoring, run state)
//! - `audio`: Routing of simulation cue events to a sound backend
//! - `settings`: Player preferences and config file loading
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Reference frame rate that all per-frame rates are expressed in
    pub const REFERENCE_HZ: f32 = 60.0;
    /// Fixed simulation timestep (one reference frame)
    pub const SIM_DT: f32 = 1.0 / REFERENCE_HZ;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Visible field dimensions
    pub const FIELD_WIDTH: f32 = 1280.0;
    pub const FIELD_HEIGHT: f32 = 720.0;
    /// Rest line for the player's feet and ground obstacles
    pub const GROUND_Y: f32 = 400.0;

    /// Player anchor (mid-bottom x) and sprite sizes
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_STANDING_SIZE: (f32, f32) = (50.0, 70.0);
    pub const PLAYER_DUCKING_SIZE: (f32, f32) = (70.0, 40.0);

    /// Ground obstacle size and spawn anchor
    pub const GROUND_OBSTACLE_SIZE: (f32, f32) = (60.0, 80.0);
    pub const GROUND_OBSTACLE_SPAWN_X: f32 = FIELD_WIDTH;
    /// Number of cosmetic ground obstacle variants
    pub const GROUND_OBSTACLE_VARIANTS: u8 = 6;

    /// Flying obstacle size, spawn anchor and altitude bands (bottom edge)
    pub const FLYING_OBSTACLE_SIZE: (f32, f32) = (80.0, 52.0);
    pub const FLYING_OBSTACLE_SPAWN_X: f32 = FIELD_WIDTH + 100.0;
    pub const FLYING_ALTITUDES: [f32; 2] = [280.0, 350.0];
    /// Flap phase advance per tick (wraps at 2.0)
    pub const FLAP_STEP: f32 = 0.1;

    /// Cloud size, spawn anchor and altitude range (bottom edge)
    pub const CLOUD_SIZE: (f32, f32) = (200.0, 80.0);
    pub const CLOUD_SPAWN_X: f32 = FIELD_WIDTH + 100.0;
    pub const CLOUD_ALTITUDE_RANGE: (f32, f32) = (50.0, 300.0);
}

/// Number of reference frames covered by a tick of length `dt` seconds
#[inline]
pub fn frames(dt: f32) -> f32 {
    dt * consts::REFERENCE_HZ
}
