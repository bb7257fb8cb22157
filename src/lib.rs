//! gridsnake - a grid-based snake game on a fixed-tick engine
//!
//! This library provides:
//! - Core game logic (game module): grid, snake, direction queue, tick engine
//! - Input mappers (input module): keyboard and pointer gestures
//! - TUI rendering (render module)
//! - Persistent high-score storage (score module)
//! - The terminal event loop (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod render;
pub mod score;
