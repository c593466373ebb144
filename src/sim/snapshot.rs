//! Per-tick output for the presentation layer
//!
//! A `Frame` is a read-only copy of everything a renderer or HUD needs.
//! The simulation itself never reads it back.

use serde::{Deserialize, Serialize};

use super::obstacle::ObstacleKind;
use super::player::Posture;
use super::rect::Rect;
use super::state::{GameState, RunState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPose {
    pub rect: Rect,
    pub posture: Posture,
    pub anim_frame: u8,
    pub grounded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub kind: ObstacleKind,
    pub rect: Rect,
    pub anim_frame: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub run_state: RunState,
    /// Whole points for the HUD
    pub score: u32,
    pub speed: f32,
    pub player: PlayerPose,
    pub obstacles: Vec<ObstacleView>,
    pub clouds: Vec<Rect>,
    pub ground_offset: f32,
}

/// Uniform draw-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Sprite {
    Cloud { rect: Rect },
    Ground { offset: f32 },
    Player(PlayerPose),
    Obstacle(ObstacleView),
}

impl Frame {
    /// Flatten into back-to-front draw order
    pub fn draw_list(&self) -> Vec<Sprite> {
        let mut sprites = Vec::with_capacity(self.clouds.len() + self.obstacles.len() + 2);
        sprites.extend(self.clouds.iter().map(|&rect| Sprite::Cloud { rect }));
        sprites.push(Sprite::Ground {
            offset: self.ground_offset,
        });
        sprites.push(Sprite::Player(self.player.clone()));
        sprites.extend(self.obstacles.iter().cloned().map(Sprite::Obstacle));
        sprites
    }

    /// Overlay text shown while the run is over
    pub fn overlay_text(&self) -> Option<String> {
        match self.run_state {
            RunState::Running => None,
            RunState::GameOver => Some(format!("Game Over! Score: {}", self.score)),
        }
    }
}

impl GameState {
    /// Capture the current state for rendering
    pub fn snapshot(&self) -> Frame {
        Frame {
            tick: self.clock.ticks,
            run_state: self.run_state,
            score: self.score.display_score(),
            speed: self.score.speed,
            player: PlayerPose {
                rect: self.player.rect(),
                posture: self.player.posture,
                anim_frame: self.player.anim_frame,
                grounded: self.player.is_grounded(),
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    kind: o.kind,
                    rect: o.rect,
                    anim_frame: o.anim_frame(),
                })
                .collect(),
            clouds: self.scenery.clouds.clone(),
            ground_offset: self.scenery.ground_offset,
        }
    }
}
