//! Core game logic: the grid, the snake, the direction queue, and the tick
//! engine. No I/O or rendering dependencies live here; the app layer drives
//! the engine off a timer and persists what the tick outcomes tell it to.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::{GameConfig, MIN_GRID_EXTENT};
pub use direction::{Direction, DirectionQueue};
pub use engine::{GameEngine, TickOutcome};
pub use state::{Cell, GameOverReason, GameState, Phase, Snake};
