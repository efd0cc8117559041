use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{
    action::Direction,
    config::{GameConfig, Variant},
    snapshot::Snapshot,
    state::{Food, GameState, Phase, Position, Snake, Tint},
};
use crate::clock::Scheduler;

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake hit itself in the classic game
    SelfCollision,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game was not running, nothing moved
    Idle,
    /// Snake moved into empty space
    Moved,
    /// Snake ate the food and grew by one block
    Ate,
    /// Extra ruleset: the snake bit itself and lost every block from `at` on
    Truncated { at: usize },
    /// Game over
    Collided(CollisionType),
}

/// Result of a game tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    pub outcome: TickOutcome,
    /// Whether this tick ended the game
    pub game_over: bool,
    /// State after the tick, for the renderer
    pub snapshot: Snapshot,
}

impl TickResult {
    fn new(outcome: TickOutcome, state: &GameState) -> Self {
        Self {
            outcome,
            game_over: matches!(outcome, TickOutcome::Collided(_)),
            snapshot: state.snapshot(),
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    pub(super) config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food placement and colors are reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build a fresh, not yet started game: one green block on the start cell
    /// heading right, and a food block somewhere on the board.
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.config.start, Direction::Right);
        let food = Food::new(self.random_cell(), self.first_food_tint());

        GameState::new(
            snake,
            food,
            self.config.grid_width,
            self.config.grid_height,
            self.config.variant,
        )
    }

    /// Reinitialize `state` and set the clock going at the base rate
    pub fn start(&mut self, state: &mut GameState, clock: &mut impl Scheduler) {
        *state = self.reset();
        state.phase = Phase::Running;
        clock.set_rate(1.0);
        clock.resume();
        info!("game started ({:?})", state.variant);
    }

    /// Halt the clock and take the snake off the board
    pub fn stop(&mut self, state: &mut GameState, clock: &mut impl Scheduler) {
        clock.stop();
        state.snake.clear();
        state.pending_direction = None;
        state.phase = Phase::NotStarted;
    }

    /// Advance the game by one block.
    ///
    /// Checks run in a fixed order: self-collision, then the board edge, then
    /// food. A self-collision or an edge hit ends the tick before food is
    /// looked at, so a block that is both body and food counts as body.
    pub fn tick(&mut self, state: &mut GameState, clock: &mut impl Scheduler) -> TickResult {
        if !state.phase.is_advancing() || state.snake.is_empty() {
            return TickResult::new(TickOutcome::Idle, state);
        }

        if let Some(direction) = state.pending_direction.take() {
            if !state.snake.direction.is_opposite(direction) {
                state.snake.direction = direction;
            }
        }

        let new_head = state.snake.head().moved_in_direction(state.snake.direction);
        let vacated = state.snake.advance(new_head);
        state.steps += 1;

        if let Some(hit) = state.snake.body_hit(new_head) {
            match state.variant {
                Variant::Classic => {
                    return self.game_over(state, clock, CollisionType::SelfCollision);
                }
                Variant::Extra => {
                    state.snake.truncate(hit);
                    state.score = self.config.score_for(state.snake.len());
                    debug!("bit own body at block {hit}, score now {}", state.score);
                    return TickResult::new(TickOutcome::Truncated { at: hit }, state);
                }
            }
        }

        if !state.is_in_bounds(new_head) {
            return self.game_over(state, clock, CollisionType::Wall);
        }

        if new_head == state.food.position {
            self.feed(state, vacated, clock);
            return TickResult::new(TickOutcome::Ate, state);
        }

        TickResult::new(TickOutcome::Moved, state)
    }

    fn game_over(
        &mut self,
        state: &mut GameState,
        clock: &mut impl Scheduler,
        collision: CollisionType,
    ) -> TickResult {
        clock.stop();
        state.phase = Phase::GameOver;
        state.speed = 1.0;
        state.hard_mode = false;
        state.pending_direction = None;
        info!(
            "game over: {:?} after {} steps, score {}",
            collision, state.steps, state.score
        );

        TickResult::new(TickOutcome::Collided(collision), state)
    }

    /// Grow into the cell the tail just left and move the food elsewhere
    fn feed(&mut self, state: &mut GameState, vacated: Position, clock: &mut impl Scheduler) {
        let eaten = state.food;
        state.food.position = self.relocate_food(eaten.position);

        let tint = match state.variant {
            Variant::Extra => eaten.tint,
            Variant::Classic => Tint::SNAKE,
        };
        state.snake.grow(vacated, tint);
        state.score = self.config.score_for(state.snake.len());

        // any slow motion ends with the next meal
        clock.set_rate(1.0);
        if state.hard_mode {
            state.speed += self.config.speed_increment;
            clock.set_rate(state.speed);
        }

        if state.variant == Variant::Extra {
            state.food.tint = Tint::roll(&mut self.rng);
        }

        debug!(
            "ate {:?} food, length {}, score {}, speed {:.1}",
            eaten.tint,
            state.snake.len(),
            state.score,
            state.speed
        );
    }

    fn first_food_tint(&mut self) -> Tint {
        match self.config.variant {
            Variant::Classic => Tint::CLASSIC_FOOD,
            Variant::Extra => Tint::roll(&mut self.rng),
        }
    }

    /// Pick a random cell other than `previous`.
    ///
    /// The snake's own cells are not avoided.
    fn relocate_food(&mut self, previous: Position) -> Position {
        if self.config.grid_width * self.config.grid_height <= 1 {
            return previous;
        }
        loop {
            let pos = self.random_cell();
            if pos != previous {
                return pos;
            }
        }
    }

    fn random_cell(&mut self) -> Position {
        let x = self.rng.gen_range(0..self.config.grid_width.max(1)) as i32;
        let y = self.rng.gen_range(0..self.config.grid_height.max(1)) as i32;
        Position::new(x, y)
    }
}
