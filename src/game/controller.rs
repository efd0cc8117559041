//! Player commands
//!
//! Commands are applied between ticks. None of them can fail: a request that
//! does not make sense in the current phase is dropped without touching the
//! state, and the caller can tell from [`CommandResult::accepted`].

use log::info;

use super::{
    action::{Command, Direction},
    engine::GameEngine,
    snapshot::Snapshot,
    state::{GameState, Phase},
};
use crate::clock::Scheduler;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    /// Whether the command changed anything
    pub accepted: bool,
    /// State after the command, for the renderer
    pub snapshot: Snapshot,
}

impl GameEngine {
    /// Apply one player command to `state`
    pub fn apply(
        &mut self,
        state: &mut GameState,
        command: Command,
        clock: &mut impl Scheduler,
    ) -> CommandResult {
        let accepted = match command {
            Command::ChangeDirection(direction) => Self::change_direction(state, direction),
            Command::TogglePause => Self::toggle_pause(state, clock),
            Command::EnableHardMode => Self::enable_hard_mode(state),
            Command::ShrinkCheat => self.shrink(state, clock),
            Command::Restart => self.restart(state, clock),
        };

        CommandResult {
            accepted,
            snapshot: state.snapshot(),
        }
    }

    // Checked against the heading the snake actually has, not a previous
    // pending request, so two quick presses can never fold it back on itself.
    fn change_direction(state: &mut GameState, direction: Direction) -> bool {
        if !in_play(state) || state.snake.direction.is_opposite(direction) {
            return false;
        }
        state.pending_direction = Some(direction);
        true
    }

    fn toggle_pause(state: &mut GameState, clock: &mut impl Scheduler) -> bool {
        match state.phase {
            Phase::Running => {
                clock.pause();
                state.phase = Phase::Paused;
                info!("paused");
                true
            }
            Phase::Paused => {
                clock.resume();
                state.phase = Phase::Running;
                info!("resumed");
                true
            }
            Phase::NotStarted | Phase::GameOver => false,
        }
    }

    /// Takes effect on the next meal
    fn enable_hard_mode(state: &mut GameState) -> bool {
        if !in_play(state) || state.hard_mode {
            return false;
        }
        state.hard_mode = true;
        info!("hard mode on");
        true
    }

    /// Trade every block but the head for a reset of speed and a slow clock
    fn shrink(&mut self, state: &mut GameState, clock: &mut impl Scheduler) -> bool {
        if !in_play(state) || state.snake.len() < self.config.shrink_min_length {
            return false;
        }
        state.snake.truncate(1);
        state.score = self.config.score_for(state.snake.len());
        state.speed = 1.0;
        state.hard_mode = false;
        clock.set_rate(self.config.slow_motion_rate);
        info!("shrink cheat used, slow motion at {}x", self.config.slow_motion_rate);
        true
    }

    fn restart(&mut self, state: &mut GameState, clock: &mut impl Scheduler) -> bool {
        if state.phase != Phase::GameOver {
            return false;
        }
        info!("restarting after score {}", state.score);
        self.stop(state, clock);
        self.start(state, clock);
        true
    }
}

fn in_play(state: &GameState) -> bool {
    matches!(state.phase, Phase::Running | Phase::Paused)
}
