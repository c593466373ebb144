//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod obstacle;
pub mod player;
pub mod rect;
pub mod scenery;
pub mod score;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use clock::SimClock;
pub use collision::{CollisionResult, any_collision, first_collision};
pub use obstacle::{Obstacle, ObstacleKind, ObstacleSet};
pub use player::{PlayerBody, Posture};
pub use rect::Rect;
pub use scenery::Scenery;
pub use score::{ScoreTracker, crossed_milestone};
pub use snapshot::{Frame, ObstacleView, PlayerPose, Sprite};
pub use spawner::ObstacleSpawner;
pub use state::{GameEvent, GameState, RunState};
pub use tick::{TickInput, tick};
