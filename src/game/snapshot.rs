use serde::{Deserialize, Serialize};

use super::config::Variant;
use super::state::{Food, GameState, Phase, Segment};

/// Background style hint for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Background {
    Light,
    /// Hard mode is on
    Dark,
}

/// Read-only view of the game handed to the renderer after every tick and
/// every command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snake blocks, head first
    pub cells: Vec<Segment>,
    pub food: Food,
    pub score: u32,
    pub speed: f64,
    pub phase: Phase,
    pub variant: Variant,
    pub background: Background,
    pub grid_width: usize,
    pub grid_height: usize,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.snake.body.iter().copied().collect(),
            food: self.food,
            score: self.score,
            speed: self.speed,
            phase: self.phase,
            variant: self.variant,
            background: if self.hard_mode {
                Background::Dark
            } else {
                Background::Light
            },
            grid_width: self.grid_width,
            grid_height: self.grid_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position, Snake, Tint};

    fn state() -> GameState {
        GameState::new(
            Snake::from_cells(&[Position::new(2, 1), Position::new(1, 1)], Direction::Right),
            Food::new(Position::new(7, 3), Tint::Blue),
            20,
            15,
            Variant::Extra,
        )
    }

    #[test]
    fn test_snapshot_copies_cells_head_first() {
        let snapshot = state().snapshot();

        assert_eq!(snapshot.cells.len(), 2);
        assert_eq!(snapshot.cells.first().map(|s| s.position), Some(Position::new(2, 1)));
        assert_eq!(snapshot.food, Food::new(Position::new(7, 3), Tint::Blue));
        assert_eq!(snapshot.phase, Phase::NotStarted);
        assert_eq!(snapshot.variant, Variant::Extra);
    }

    #[test]
    fn test_background_follows_hard_mode() {
        let mut state = state();
        assert_eq!(state.snapshot().background, Background::Light);

        state.hard_mode = true;
        assert_eq!(state.snapshot().background, Background::Dark);
    }
}
