use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::collections::HashMap;

use crate::game::{Background, Phase, Position, Snapshot, Tint, Variant};
use crate::metrics::GameMetrics;

/// Draws [`Snapshot`]s; never looks at the engine state directly
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics), chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if snapshot.phase == Phase::GameOver {
            frame.render_widget(self.render_game_over(snapshot, metrics), game_area);
        } else {
            frame.render_widget(self.render_grid(snapshot), game_area);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let (background, empty) = match snapshot.background {
            Background::Light => (Color::White, Color::Gray),
            Background::Dark => (Color::Black, Color::DarkGray),
        };

        // first block wins, so the head is drawn over a body block on the same cell
        let mut occupied: HashMap<Position, (usize, Tint)> = HashMap::new();
        for (i, segment) in snapshot.cells.iter().enumerate() {
            occupied.entry(segment.position).or_insert((i, segment.tint));
        }

        let mut lines = Vec::with_capacity(snapshot.grid_height);
        for y in 0..snapshot.grid_height {
            let mut spans = Vec::with_capacity(snapshot.grid_width);

            for x in 0..snapshot.grid_width {
                let pos = Position::new(x as i32, y as i32);
                let style = Style::default().bg(background);

                let cell = match occupied.get(&pos) {
                    Some((0, tint)) => Span::styled(
                        "■ ",
                        style.fg(tint_color(*tint)).add_modifier(Modifier::BOLD),
                    ),
                    Some((_, tint)) => Span::styled("■ ", style.fg(tint_color(*tint))),
                    None if pos == snapshot.food.position => Span::styled(
                        "● ",
                        style
                            .fg(tint_color(snapshot.food.tint))
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled("· ", style.fg(empty)),
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let title = match snapshot.phase {
            Phase::Paused => " Snake - PAUSED ",
            _ => " Snake ",
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let mut spans = vec![
            Span::styled("Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(snapshot.cells.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Speed: ", label),
            Span::styled(format!("{:.1}x", snapshot.speed), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled(
                match snapshot.variant {
                    Variant::Classic => "CLASSIC",
                    Variant::Extra => "EXTRA",
                },
                Style::default().fg(Color::Cyan),
            ),
        ];

        if snapshot.background == Background::Dark {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                "HARD",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_game_over(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Your score is ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![Span::styled(
                format!(
                    "Food eaten: {}   Shrinks used: {}   Games played: {}",
                    metrics.food_eaten, metrics.shrinks_used, metrics.games_played
                ),
                Style::default().fg(Color::Gray),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Play again? Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let key = Style::default().fg(Color::Cyan);
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", key),
            Span::raw(" or "),
            Span::styled("WASD", key),
            Span::raw(" move | "),
            Span::styled("P", key),
            Span::raw(" pause | "),
            Span::styled("H", key),
            Span::raw(" hard | "),
            Span::styled("N", key),
            Span::raw(" shrink | "),
            Span::styled("R", key),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Green => Color::Green,
        Tint::Blue => Color::Blue,
        Tint::Magenta => Color::Magenta,
        Tint::Yellow => Color::Yellow,
        Tint::Orange => Color::Rgb(255, 165, 0),
        Tint::Red => Color::Red,
    }
}
