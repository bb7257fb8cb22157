//! The terminal app: owns the game session and drives it from a single
//! `tokio::select!` loop over input events, the game tick, and the render
//! timer. Everything runs on one task, so state mutations never overlap.

use std::io::{stderr, Stderr};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use crate::game::{GameConfig, GameEngine, Phase};
use crate::input::{KeyIntent, KeyboardMapper, PointerMapper};
use crate::render::Renderer;
use crate::score::HighScoreStore;

/// Frames render at 30 FPS regardless of the game tick
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Rows reserved around the board: header, footer, and the grid border
const CHROME_ROWS: u16 = 8;

pub struct App {
    engine: GameEngine,
    store: HighScoreStore,
    renderer: Renderer,
    keyboard: KeyboardMapper,
    pointer: PointerMapper,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig, store: HighScoreStore) -> Self {
        let high_score = store.load();

        Self {
            engine: GameEngine::new(config, high_score),
            store,
            renderer: Renderer::new(),
            keyboard: KeyboardMapper::new(),
            pointer: PointerMapper::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Size the grid to the surface we actually got; takes effect at the
        // first reset.
        if let Ok((width, height)) = crossterm::terminal::size() {
            self.engine.set_surface_extent(surface_extent(width, height));
        }

        // Run the loop with cleanup, so errors surface after the terminal is
        // restored.
        let result = self.run_event_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut ticker = tick_timer(self.engine.tick_interval());
        let mut render_timer = time::interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Terminal events: keyboard, mouse, resize
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        if self.handle_event(event)? {
                            ticker = tick_timer(self.engine.tick_interval());
                        }
                    }
                }

                // Game logic tick
                _ = ticker.tick() => {
                    let outcome = self.engine.tick();

                    if outcome.high_score_changed {
                        self.store.save(self.engine.high_score())?;
                    }

                    // Replacing the timer here is what reschedules the tick:
                    // on this single task the old timer can never fire again.
                    if outcome.interval_changed {
                        ticker = tick_timer(self.engine.tick_interval());
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    let (engine, renderer) = (&self.engine, &mut self.renderer);
                    terminal.draw(|frame| {
                        renderer.render(
                            frame,
                            engine.state(),
                            engine.direction(),
                            engine.high_score(),
                            engine.tick_interval(),
                        );
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

    /// Dispatch one terminal event. Returns true when the tick timer must be
    /// rescheduled (the engine's interval was reset).
    fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) => match self.keyboard.map(key) {
                KeyIntent::Propose(direction) => {
                    self.engine.propose(direction);
                }
                KeyIntent::Start => {
                    // Only a start that actually began a run resets the
                    // interval; a no-op press must leave the timer alone.
                    return Ok(self.engine.start());
                }
                KeyIntent::TogglePause => {
                    self.engine.toggle_pause();
                }
                KeyIntent::Restart => {
                    self.engine.restart();
                    return Ok(true);
                }
                KeyIntent::Quit => {
                    self.should_quit = true;
                }
                KeyIntent::None => {}
            },

            Event::Mouse(mouse) => {
                // Pointer gestures only steer an active session.
                if matches!(self.engine.state().phase, Phase::Running | Phase::Paused) {
                    let head_center = self.renderer.cell_center(self.engine.state().snake.head());
                    if let Some(direction) = self.pointer.on_event(mouse, head_center) {
                        self.engine.propose(direction);
                    }
                }
            }

            Event::Resize(width, height) => {
                self.engine.set_surface_extent(surface_extent(width, height));
            }

            _ => {}
        }

        Ok(false)
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// A repeating tick timer whose first fire is one full period away, so that
/// rescheduling after a speed-up never double-fires.
fn tick_timer(period: Duration) -> Interval {
    let mut timer = time::interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}

/// Largest grid extent the surface can hold: two columns per cell plus the
/// surrounding chrome. The engine clamps this into its configured range.
fn surface_extent(width: u16, height: u16) -> usize {
    let by_width = usize::from(width.saturating_sub(2)) / 2;
    let by_height = usize::from(height.saturating_sub(CHROME_ROWS));
    by_width.min(by_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tempfile::TempDir;

    fn test_app() -> App {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("scores.json"));
        App::new(GameConfig::default(), store)
    }

    #[test]
    fn test_app_loads_stored_high_score() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("scores.json"));
        store.save(12).unwrap();

        let app = App::new(GameConfig::default(), store);

        assert_eq!(app.engine.high_score(), 12);
        assert_eq!(app.engine.state().phase, Phase::NotStarted);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_start_key_reschedules_only_out_of_not_started() {
        let mut app = test_app();
        let enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        // First Enter begins the run and asks for a fresh timer.
        assert!(app.handle_event(enter.clone()).unwrap());
        assert_eq!(app.engine.state().phase, Phase::Running);

        // Enter during a run is a no-op and must not touch the tick timer,
        // or repeated presses would keep pushing the next tick out.
        let before = app.engine.state().clone();
        assert!(!app.handle_event(enter).unwrap());
        assert_eq!(*app.engine.state(), before);
    }

    #[test]
    fn test_surface_extent_math() {
        // 80x24 terminal: width allows 39 cells, height only 16
        assert_eq!(surface_extent(80, 24), 16);
        // Tall and narrow: width is the limit
        assert_eq!(surface_extent(30, 50), 14);
        // Degenerate sizes do not underflow
        assert_eq!(surface_extent(1, 1), 0);
    }
}
