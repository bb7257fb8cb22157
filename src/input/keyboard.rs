use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Direction;

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Propose(Direction),
    Start,
    TogglePause,
    Restart,
    Quit,
    None,
}

/// Translates key events into control and direction intents.
///
/// Only the initial press of a key registers; key auto-repeat and release
/// events are dropped here so holding an arrow key does not flood the
/// direction queue.
pub struct KeyboardMapper;

impl KeyboardMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map(&self, key: KeyEvent) -> KeyIntent {
        if key.kind != KeyEventKind::Press {
            return KeyIntent::None;
        }

        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyIntent::Quit;
        }

        match key.code {
            KeyCode::Up => KeyIntent::Propose(Direction::Up),
            KeyCode::Down => KeyIntent::Propose(Direction::Down),
            KeyCode::Left => KeyIntent::Propose(Direction::Left),
            KeyCode::Right => KeyIntent::Propose(Direction::Right),

            KeyCode::Char(' ') => KeyIntent::TogglePause,
            KeyCode::Enter => KeyIntent::Start,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyIntent::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyIntent::Quit,

            _ => KeyIntent::None,
        }
    }
}

impl Default for KeyboardMapper {
    fn default() -> Self {
        Self::new()
    }
}
