use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Cell, Direction, GameState, Phase};

/// Draws the game as a pure function of state; nothing here feeds back into
/// the core. The renderer remembers where the grid landed on screen so the
/// pointer mapper can translate tap coordinates into grid space.
pub struct Renderer {
    grid_inner: Option<Rect>,
}

impl Renderer {
    pub fn new() -> Self {
        Self { grid_inner: None }
    }

    /// Screen position of a cell's rendered center, if a grid is on screen.
    /// Cells are drawn two columns wide and one row tall.
    pub fn cell_center(&self, cell: Cell) -> Option<(i32, i32)> {
        let inner = self.grid_inner?;
        Some((
            i32::from(inner.x) + cell.x * 2,
            i32::from(inner.y) + cell.y,
        ))
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        state: &GameState,
        direction: Direction,
        high_score: u32,
        interval: Duration,
    ) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Game area
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

        frame.render_widget(self.stats(state, high_score, interval), chunks[0]);

        self.grid_inner = None;
        match state.phase {
            Phase::Running | Phase::Paused => {
                let area = self.grid_area(chunks[1], state.grid_extent);
                self.grid_inner = Some(area.inner(ratatui::layout::Margin::new(1, 1)));
                frame.render_widget(self.grid(state, direction), area);
            }
            Phase::NotStarted => {
                frame.render_widget(self.start_screen(), chunks[1]);
            }
            Phase::Over => {
                frame.render_widget(self.game_over(state, high_score), chunks[1]);
            }
        }

        frame.render_widget(self.controls(state.phase), chunks[2]);
    }

    /// Center a board of `extent` cells in the available area, clipping if
    /// the terminal is too small.
    fn grid_area(&self, area: Rect, extent: usize) -> Rect {
        let want_w = (extent as u16) * 2 + 2;
        let want_h = (extent as u16) + 2;
        let w = want_w.min(area.width);
        let h = want_h.min(area.height);

        Rect {
            x: area.x + (area.width - w) / 2,
            y: area.y + (area.height - h) / 2,
            width: w,
            height: h,
        }
    }

    fn grid<'a>(&self, state: &GameState, direction: Direction) -> Paragraph<'a> {
        let head_glyph = match direction {
            Direction::Up => "▲ ",
            Direction::Down => "▼ ",
            Direction::Left => "◀ ",
            Direction::Right => "▶ ",
        };

        let mut lines = Vec::new();

        for y in 0..state.grid_extent {
            let mut spans = Vec::new();

            for x in 0..state.grid_extent {
                let cell = Cell::new(x as i32, y as i32);

                let span = if cell == state.snake.head() {
                    Span::styled(
                        head_glyph,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.contains(cell) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if cell == state.food {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        let title = match state.phase {
            Phase::Paused => " Snake (paused) ",
            _ => " Snake ",
        };

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(title),
        )
    }

    fn stats<'a>(&self, state: &GameState, high_score: u32, interval: Duration) -> Paragraph<'a> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}ms", interval.as_millis()),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn start_screen<'a>(&self) -> Paragraph<'a> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn game_over<'a>(&self, state: &GameState, high_score: u32) -> Paragraph<'a> {
        let mut text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        if state.score >= high_score && state.score > 0 {
            text.push(Line::from(vec![Span::styled(
                "New high score!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]));
        }

        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "R",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Q",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn controls<'a>(&self, phase: Phase) -> Paragraph<'a> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" drag or click to steer | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(match phase {
                Phase::Paused => " to resume | ",
                _ => " to pause | ",
            }),
            Span::styled("R", Style::default().fg(Color::Cyan)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
