use std::time::{Duration, Instant};

/// In-memory statistics for one sitting; nothing is saved between runs
pub struct GameMetrics {
    /// Play time of the current game, not counting pauses
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    /// Meals in the current game
    pub food_eaten: u32,
    /// Shrink cheats used in the current game
    pub shrinks_used: u32,
    banked: Duration,
    clock_started: Option<Instant>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            food_eaten: 0,
            shrinks_used: 0,
            banked: Duration::ZERO,
            clock_started: None,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.banked
            + self
                .clock_started
                .map(|started| started.elapsed())
                .unwrap_or_default();
    }

    pub fn on_game_start(&mut self) {
        self.banked = Duration::ZERO;
        self.elapsed_time = Duration::ZERO;
        self.food_eaten = 0;
        self.shrinks_used = 0;
        self.clock_started = Some(Instant::now());
    }

    pub fn on_pause(&mut self) {
        if let Some(started) = self.clock_started.take() {
            self.banked += started.elapsed();
        }
        self.update();
    }

    pub fn on_resume(&mut self) {
        if self.clock_started.is_none() {
            self.clock_started = Some(Instant::now());
        }
    }

    pub fn on_food(&mut self) {
        self.food_eaten += 1;
    }

    pub fn on_shrink(&mut self) {
        self.shrinks_used += 1;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.on_pause();
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(30);
        assert_eq!(metrics.high_score, 30);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(10);
        assert_eq!(metrics.high_score, 30);
        assert_eq!(metrics.games_played, 2);
    }

    #[test]
    fn test_game_start_resets_per_game_counters() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        metrics.on_food();
        metrics.on_food();
        metrics.on_shrink();
        assert_eq!(metrics.food_eaten, 2);
        assert_eq!(metrics.shrinks_used, 1);

        metrics.on_game_over(20);
        metrics.on_game_start();
        assert_eq!(metrics.food_eaten, 0);
        assert_eq!(metrics.shrinks_used, 0);
        assert_eq!(metrics.high_score, 20);
    }

    #[test]
    fn test_paused_time_is_not_counted() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(20));
        metrics.on_pause();
        let at_pause = metrics.elapsed_time;
        assert!(at_pause >= Duration::from_millis(20));

        std::thread::sleep(Duration::from_millis(30));
        metrics.update();
        assert_eq!(metrics.elapsed_time, at_pause);

        metrics.on_resume();
        std::thread::sleep(Duration::from_millis(5));
        metrics.update();
        assert!(metrics.elapsed_time > at_pause);
    }
}
