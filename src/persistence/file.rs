//! Native best-score file
//!
//! Writes go to `<path>.tmp` first and are renamed over the real file, so a
//! crash mid-write never leaves a truncated save behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::HighScoreStore;
use crate::error::PersistenceError;

/// Environment variable overriding the save file location
pub const SAVE_PATH_ENV: &str = "PIG_RHYTHM_SAVE";

#[derive(Debug, Serialize, Deserialize)]
struct BestScoreRecord {
    best_score: u32,
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$PIG_RHYTHM_SAVE`, or `pig-rhythm-highscore.json` in the working directory
    pub fn from_env() -> Self {
        let path = std::env::var_os(SAVE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(format!("{}.json", super::STORAGE_KEY)));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    fn load_high_score(&self) -> Result<u32, PersistenceError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let record: BestScoreRecord = serde_json::from_str(&json)?;
        Ok(record.best_score)
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(&BestScoreRecord { best_score: score })?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::info!("Best score {} saved to {}", score, self.path.display());
        Ok(())
    }
}
