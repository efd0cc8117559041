use serde::{Deserialize, Serialize};

/// Heading of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) in blocks for one step in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// Requests coming from the player, consumed by [`GameEngine::apply`].
///
/// [`GameEngine::apply`]: super::GameEngine::apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn on the next tick (ignored when it would reverse the snake)
    ChangeDirection(Direction),
    /// Suspend or resume the clock
    TogglePause,
    /// Speed up on every meal from now on
    EnableHardMode,
    /// Cut the snake down to its head in exchange for a slow, calm restart
    ShrinkCheat,
    /// Start over after a game over
    Restart,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::ChangeDirection(direction)
    }
}
