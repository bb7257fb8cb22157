//! Input mappers: each source turns raw terminal events into direction
//! proposals (and app controls) that funnel into the direction queue.

pub mod keyboard;
pub mod pointer;

pub use keyboard::{KeyIntent, KeyboardMapper};
pub use pointer::PointerMapper;
