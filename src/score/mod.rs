pub mod store;

pub use store::{HighScoreStore, DEFAULT_SCORE_FILE};
