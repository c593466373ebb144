//! Attract-mode controller: plays the game from the current state

use super::obstacle::ObstacleKind;
use super::player::Posture;
use super::state::GameState;

/// Jump when a ground obstacle is this many frames of travel away
pub const JUMP_LEAD_FRAMES: f32 = 4.0;
/// Start ducking when a low flyer is this many frames of travel away
pub const DUCK_LEAD_FRAMES: f32 = 8.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutopilotCommand {
    pub jump: bool,
    pub duck: bool,
}

/// Decide inputs for the next tick
pub fn decide(state: &GameState) -> AutopilotCommand {
    let mut command = AutopilotCommand::default();
    if state.is_game_over() {
        return command;
    }

    let mut standing = state.player.clone();
    standing.posture = Posture::Standing;
    let footprint = standing.footprint(state.tuning.footprint_margin);
    let speed = state.score.speed;

    for obstacle in state
        .obstacles
        .iter()
        .filter(|o| o.rect.right() > footprint.left())
    {
        let gap = obstacle.rect.left() - footprint.right();
        match obstacle.kind {
            ObstacleKind::Ground { .. } => {
                if (0.0..=speed * JUMP_LEAD_FRAMES).contains(&gap) {
                    command.jump = true;
                }
            }
            ObstacleKind::Flying { .. } => {
                let in_lane = obstacle.rect.top() < footprint.bottom()
                    && obstacle.rect.bottom() > footprint.top();
                if in_lane && gap <= speed * DUCK_LEAD_FRAMES {
                    command.duck = true;
                }
            }
        }
    }

    command
}
