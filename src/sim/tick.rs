//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Per tick:
//! clock → player → spawner/obstacles → collision → score/speed → cues.

use super::autopilot;
use super::collision::first_collision;
use super::state::{GameEvent, GameState, RunState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump pressed this tick (edge); restarts first when the run is over
    pub jump: bool,
    /// Duck held (level)
    pub duck: bool,
    /// Restart pressed this tick (edge); ignored while running
    pub restart: bool,
    /// Attract mode - autopilot chooses jump/duck while running
    pub autopilot: bool,
}

/// Advance the game state by one timestep.
///
/// Cues produced by this tick are left in `state.events`.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.clock.advance(dt);

    let previous_run_state = state.run_state;

    let mut input = input.clone();
    if input.autopilot && !state.is_game_over() {
        let command = autopilot::decide(state);
        input.jump = command.jump;
        input.duck = command.duck;
    }
    let input = &input;

    if state.is_game_over() {
        // Jump doubles as restart so the character leaves the ground at once
        if input.restart || input.jump {
            state.restart();
        } else {
            return;
        }
    }

    let now = state.clock.now();
    let tuning = state.tuning.clone();

    // Player
    state.player.set_ducking(input.duck);
    if input.jump && state.player.jump(tuning.jump_impulse) {
        state.events.push(GameEvent::Jump);
    }
    state.player.update(dt, &tuning);

    // Obstacles
    if let Some(kind) = state.spawner.poll(now, &mut state.rng) {
        state.spawn_obstacle(kind);
    }
    state.obstacles.advance(dt, state.score.speed);
    let retired = state.obstacles.retire_offscreen();
    if retired > 0 {
        log::trace!("Retired {retired} obstacle(s)");
    }

    // Collision
    let footprint = state.player.footprint(tuning.footprint_margin);
    if let Some(hit) = first_collision(&footprint, &state.obstacles) {
        log::info!(
            "Hit obstacle {} at score {} (speed {:.2})",
            hit.obstacle_id,
            state.score.display_score(),
            state.score.speed
        );
        state.run_state = RunState::GameOver;
    } else {
        // Score & difficulty
        if let Some(milestone) = state.score.advance(
            dt,
            tuning.score_rate,
            tuning.speed_ramp,
            tuning.milestone_interval,
        ) {
            log::debug!("Milestone {milestone}");
            state.events.push(GameEvent::Milestone { score: milestone });
        }

        let speed = state.score.speed;
        state
            .scenery
            .update(now, dt, speed, tuning.cloud_speed, &mut state.rng);
    }

    if previous_run_state == RunState::Running && state.run_state == RunState::GameOver {
        state.events.push(GameEvent::Death {
            score: state.score.display_score(),
        });
    }
}
