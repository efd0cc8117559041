use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::state::Position;

/// Startup argument that selects the extra ruleset
pub const EXTRA_SELECTOR: &str = "extra";

/// Ruleset for self-collisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    /// Hitting your own body ends the game
    #[default]
    Classic,
    /// Hitting your own body cuts off everything from the struck cell to the tail
    Extra,
}

impl Variant {
    /// Picks the ruleset from the optional startup argument.
    ///
    /// Only the literal `"extra"` selects [`Variant::Extra`]; anything else,
    /// including no argument at all, plays the classic game.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(EXTRA_SELECTOR) => Variant::Extra,
            _ => Variant::Classic,
        }
    }
}

/// Configuration for a play session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the board in blocks
    pub grid_width: usize,
    /// Height of the board in blocks
    pub grid_height: usize,
    /// Cell the single-block snake starts on
    pub start: Position,
    /// Ruleset, fixed for the whole session
    pub variant: Variant,

    // Timing
    /// Tick period at rate 1.0
    pub base_period: Duration,
    /// Speed gained per meal while hard mode is on
    pub speed_increment: f64,
    /// Clock rate requested by the shrink cheat
    pub slow_motion_rate: f64,

    // Scoring
    /// Points per body cell behind the head
    pub score_multiplier: u32,
    /// Shortest snake allowed to use the shrink cheat
    pub shrink_min_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 15,
            start: Position::new(0, 0),
            variant: Variant::Classic,
            base_period: Duration::from_millis(80),
            speed_increment: 0.2,
            slow_motion_rate: 0.5,
            score_multiplier: 10,
            shrink_min_length: 7,
        }
    }
}

impl GameConfig {
    /// Create the standard 20x15 board for the given ruleset
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    pub fn with_grid(mut self, width: usize, height: usize) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    pub fn with_start(mut self, start: Position) -> Self {
        self.start = start;
        self
    }

    /// Score for a snake of the given length
    pub fn score_for(&self, length: usize) -> u32 {
        (length.saturating_sub(1) as u32) * self.score_multiplier
    }
}
