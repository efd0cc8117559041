use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::clock::TickClock;
use crate::game::{
    Command, GameConfig, GameEngine, GameState, Phase, Snapshot, TickOutcome,
};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    clock: TickClock,
    snapshot: Snapshot,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let clock = TickClock::new(config.base_period);
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        let snapshot = state.snapshot();

        Self {
            engine,
            state,
            clock,
            snapshot,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        self.start_game();

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            "session over: {} games, best score {}",
            self.metrics.games_played, self.metrics.high_score
        );
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame), independent of the game speed
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick; never fires while paused or after game over
                _ = self.clock.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.snapshot, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Command(command) => self.apply(command),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn start_game(&mut self) {
        self.engine.start(&mut self.state, &mut self.clock);
        self.metrics.on_game_start();
        self.snapshot = self.state.snapshot();
    }

    fn apply(&mut self, command: Command) {
        let result = self.engine.apply(&mut self.state, command, &mut self.clock);

        if result.accepted {
            match command {
                Command::TogglePause if self.state.phase == Phase::Paused => {
                    self.metrics.on_pause()
                }
                Command::TogglePause => self.metrics.on_resume(),
                Command::ShrinkCheat => self.metrics.on_shrink(),
                Command::Restart => self.metrics.on_game_start(),
                Command::ChangeDirection(_) | Command::EnableHardMode => {}
            }
        }

        self.snapshot = result.snapshot;
    }

    fn update_game(&mut self) {
        let result = self.engine.tick(&mut self.state, &mut self.clock);

        match result.outcome {
            TickOutcome::Ate => self.metrics.on_food(),
            TickOutcome::Collided(_) => self.metrics.on_game_over(self.state.score),
            TickOutcome::Idle | TickOutcome::Moved | TickOutcome::Truncated { .. } => {}
        }

        self.snapshot = result.snapshot;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockStatus;
    use crate::game::{Direction, Position, Snake, Variant};

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default());
        assert_eq!(mode.state.phase, Phase::NotStarted);
        assert_eq!(mode.snapshot.score, 0);
        assert_eq!(mode.clock.status(), ClockStatus::Stopped);
    }

    #[tokio::test]
    async fn test_pause_suspends_clock() {
        let mut mode = HumanMode::new(GameConfig::default());
        mode.start_game();
        assert_eq!(mode.clock.status(), ClockStatus::Running);

        mode.apply(Command::TogglePause);
        assert_eq!(mode.snapshot.phase, Phase::Paused);
        assert_eq!(mode.clock.status(), ClockStatus::Paused);

        mode.apply(Command::TogglePause);
        assert_eq!(mode.clock.status(), ClockStatus::Running);
    }

    #[tokio::test]
    async fn test_game_over_and_restart() {
        let config = GameConfig::new(Variant::Classic).with_start(Position::new(19, 3));
        let mut mode = HumanMode::new(config);
        mode.start_game();
        mode.state.food.position = Position::new(0, 0);

        mode.update_game();
        assert_eq!(mode.snapshot.phase, Phase::GameOver);
        assert_eq!(mode.clock.status(), ClockStatus::Stopped);
        assert_eq!(mode.metrics.games_played, 1);

        mode.apply(Command::Restart);
        assert_eq!(mode.snapshot.phase, Phase::Running);
        assert_eq!(mode.snapshot.cells.len(), 1);
        assert_eq!(mode.clock.status(), ClockStatus::Running);
    }

    #[tokio::test]
    async fn test_shrink_cheat_slows_clock() {
        let mut mode = HumanMode::new(GameConfig::default());
        mode.start_game();
        let cells: Vec<_> = (0..8).map(|i| Position::new(10 - i, 5)).collect();
        mode.state.snake = Snake::from_cells(&cells, Direction::Right);

        mode.apply(Command::ShrinkCheat);

        assert_eq!(mode.snapshot.cells.len(), 1);
        assert_eq!(mode.clock.rate(), 0.5);
        assert_eq!(mode.metrics.shrinks_used, 1);
    }
}
