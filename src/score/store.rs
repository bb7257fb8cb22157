//! Persistent high-score storage.
//!
//! A single JSON file keyed by a fixed name, read once at startup and
//! rewritten whenever the high score increases. A missing or unreadable file
//! simply means a high score of zero; only writes can fail.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the score file, relative to the working directory
pub const DEFAULT_SCORE_FILE: &str = "snake_highscore.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScoreRecord {
    #[serde(rename = "snakeHighScore")]
    high_score: u32,
}

pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored high score, defaulting to 0 when the file is absent
    /// or does not parse.
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|json| serde_json::from_str::<ScoreRecord>(&json).ok())
            .map(|record| record.high_score)
            .unwrap_or(0)
    }

    /// Persist a new high score
    pub fn save(&self, high_score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create score directory {}", parent.display())
                })?;
            }
        }

        let json = serde_json::to_string_pretty(&ScoreRecord { high_score })
            .context("Failed to serialize high score")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write score file {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_defaults_to_zero() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("scores.json"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("scores.json"));

        store.save(42).unwrap();
        assert_eq!(store.load(), 42);

        store.save(43).unwrap();
        assert_eq!(store.load(), 43);
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("nested/dir/scores.json"));

        store.save(7).unwrap();
        assert_eq!(store.load(), 7);
    }

    #[test]
    fn test_corrupt_file_defaults_to_zero() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "not json at all").unwrap();

        let store = HighScoreStore::new(path);
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_uses_fixed_key_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");
        let store = HighScoreStore::new(&path);

        store.save(9).unwrap();
        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("snakeHighScore"));
    }
}
