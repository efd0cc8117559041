use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::action::Direction;
use super::config::Variant;

/// A cell on the board, in blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one block in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Color tag carried by food and by every snake cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tint {
    Green,
    Blue,
    Magenta,
    Yellow,
    Orange,
    Red,
}

impl Tint {
    /// Color of the head and of every cell grown in the classic game
    pub const SNAKE: Tint = Tint::Green;
    /// Color of food in the classic game
    pub const CLASSIC_FOOD: Tint = Tint::Orange;

    /// Cumulative thresholds for the extra-mode food palette
    const PALETTE: [(f64, Tint); 4] = [
        (0.2, Tint::Blue),
        (0.4, Tint::Magenta),
        (0.6, Tint::Yellow),
        (0.8, Tint::Orange),
    ];

    /// Draws a food color with equal weight for each of the five palette entries
    pub fn roll(rng: &mut impl Rng) -> Self {
        Self::from_chance(rng.gen_range(0.0..1.0))
    }

    /// Maps a chance in `[0, 1)` onto the palette
    pub fn from_chance(chance: f64) -> Self {
        Self::PALETTE
            .iter()
            .find(|(threshold, _)| chance <= *threshold)
            .map(|(_, tint)| *tint)
            .unwrap_or(Tint::Red)
    }
}

/// One block of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub position: Position,
    pub tint: Tint,
}

impl Segment {
    pub fn new(position: Position, tint: Tint) -> Self {
        Self { position, tint }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: VecDeque<Segment>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a single-block snake
    pub fn new(head: Position, direction: Direction) -> Self {
        Self::from_cells(&[head], direction)
    }

    /// Create a snake from explicit cells, head first, all in the snake color
    pub fn from_cells(cells: &[Position], direction: Direction) -> Self {
        Self {
            body: cells
                .iter()
                .map(|&pos| Segment::new(pos, Tint::SNAKE))
                .collect(),
            direction,
        }
    }

    /// Get the head position.
    ///
    /// Panics on an empty snake, which only exists between `stop` and `start`.
    pub fn head(&self) -> Position {
        self.body[0].position
    }

    /// Iterate over cell positions, head first
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().map(|segment| segment.position)
    }

    /// Moves the snake so its head lands on `new_head`, returning the cell the
    /// tail just vacated.
    ///
    /// The tail segment itself becomes the new head and keeps its tint. A
    /// single-block snake is moved in place.
    pub fn advance(&mut self, new_head: Position) -> Position {
        match self.body.pop_back() {
            Some(mut tail) if !self.body.is_empty() => {
                let vacated = tail.position;
                tail.position = new_head;
                self.body.push_front(tail);
                vacated
            }
            Some(mut only) => {
                let vacated = only.position;
                only.position = new_head;
                self.body.push_back(only);
                vacated
            }
            None => new_head,
        }
    }

    /// Index of the first body segment (excluding the head) on `pos`
    pub fn body_hit(&self, pos: Position) -> Option<usize> {
        self.body
            .iter()
            .skip(1)
            .position(|segment| segment.position == pos)
            .map(|i| i + 1)
    }

    /// Drops every segment from `len` through the tail
    pub fn truncate(&mut self, len: usize) {
        self.body.truncate(len);
    }

    /// Appends a new tail segment
    pub fn grow(&mut self, position: Position, tint: Tint) {
        self.body.push_back(Segment::new(position, tint));
    }

    pub fn clear(&mut self) {
        self.body.clear();
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// The single food block on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub position: Position,
    pub tint: Tint,
}

impl Food {
    pub fn new(position: Position, tint: Tint) -> Self {
        Self { position, tint }
    }
}

/// Lifecycle of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

impl Phase {
    /// Only a running game is advanced by ticks
    pub fn is_advancing(&self) -> bool {
        matches!(self, Phase::Running)
    }
}

/// Complete game state, owned by the host and handed to the engine per operation
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub grid_width: usize,
    pub grid_height: usize,
    pub variant: Variant,
    pub score: u32,
    /// Speed multiplier; only grows in hard mode
    pub speed: f64,
    pub hard_mode: bool,
    pub phase: Phase,
    /// Direction change waiting for the next tick
    pub pending_direction: Option<Direction>,
    pub steps: u32,
}

impl GameState {
    /// Create a new game state that has not started yet
    pub fn new(
        snake: Snake,
        food: Food,
        grid_width: usize,
        grid_height: usize,
        variant: Variant,
    ) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            variant,
            score: 0,
            speed: 1.0,
            hard_mode: false,
            phase: Phase::NotStarted,
            pending_direction: None,
            steps: 0,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Direction the snake will take on the next tick
    pub fn heading(&self) -> Direction {
        self.pending_direction.unwrap_or(self.snake.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(snake: &Snake) -> Vec<Position> {
        snake.positions().collect()
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_palette_thresholds() {
        assert_eq!(Tint::from_chance(0.0), Tint::Blue);
        assert_eq!(Tint::from_chance(0.2), Tint::Blue);
        assert_eq!(Tint::from_chance(0.21), Tint::Magenta);
        assert_eq!(Tint::from_chance(0.5), Tint::Yellow);
        assert_eq!(Tint::from_chance(0.8), Tint::Orange);
        assert_eq!(Tint::from_chance(0.99), Tint::Red);
    }

    #[test]
    fn test_single_block_moves_in_place() {
        let mut snake = Snake::new(Position::new(2, 2), Direction::Right);
        let vacated = snake.advance(Position::new(3, 2));

        assert_eq!(vacated, Position::new(2, 2));
        assert_eq!(cells(&snake), vec![Position::new(3, 2)]);
    }

    #[test]
    fn test_tail_is_recycled_as_head() {
        let mut snake = Snake::from_cells(
            &[Position::new(3, 2), Position::new(2, 2), Position::new(1, 2)],
            Direction::Right,
        );
        snake.body[2].tint = Tint::Red;

        let vacated = snake.advance(Position::new(4, 2));

        assert_eq!(vacated, Position::new(1, 2));
        assert_eq!(
            cells(&snake),
            vec![Position::new(4, 2), Position::new(3, 2), Position::new(2, 2)]
        );
        // the old tail keeps its color at the front
        assert_eq!(snake.body[0].tint, Tint::Red);
    }

    #[test]
    fn test_body_hit_skips_head() {
        let snake = Snake::from_cells(
            &[Position::new(3, 2), Position::new(2, 2), Position::new(1, 2)],
            Direction::Right,
        );
        assert_eq!(snake.body_hit(Position::new(3, 2)), None);
        assert_eq!(snake.body_hit(Position::new(2, 2)), Some(1));
        assert_eq!(snake.body_hit(Position::new(1, 2)), Some(2));
        assert_eq!(snake.body_hit(Position::new(9, 9)), None);
    }

    #[test]
    fn test_grow_and_truncate() {
        let mut snake = Snake::new(Position::new(0, 0), Direction::Right);
        snake.grow(Position::new(-1, 0), Tint::Yellow);
        snake.grow(Position::new(-2, 0), Tint::Blue);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.body[2].tint, Tint::Blue);

        snake.truncate(1);
        assert_eq!(cells(&snake), vec![Position::new(0, 0)]);

        snake.clear();
        assert!(snake.is_empty());
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right),
            Food::new(Position::new(10, 10), Tint::Orange),
            20,
            15,
            Variant::Classic,
        );

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 14)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 15)));
    }

    #[test]
    fn test_heading_prefers_pending_direction() {
        let mut state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right),
            Food::new(Position::new(1, 1), Tint::Orange),
            20,
            15,
            Variant::Classic,
        );
        assert_eq!(state.heading(), Direction::Right);

        state.pending_direction = Some(Direction::Up);
        assert_eq!(state.heading(), Direction::Up);
    }
}
