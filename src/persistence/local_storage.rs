//! Browser LocalStorage backend

use super::{HighScoreStore, STORAGE_KEY, parse_score};
use crate::error::PersistenceError;

#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, PersistenceError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(PersistenceError::Unavailable)
    }
}

impl HighScoreStore for LocalStorageStore {
    fn load_high_score(&self) -> Result<u32, PersistenceError> {
        let value = Self::storage()?
            .get_item(STORAGE_KEY)
            .map_err(|e| PersistenceError::Read(format!("{:?}", e)))?;
        match value {
            Some(raw) => parse_score(&raw),
            None => Ok(0),
        }
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), PersistenceError> {
        Self::storage()?
            .set_item(STORAGE_KEY, &score.to_string())
            .map_err(|e| PersistenceError::Write(format!("{:?}", e)))?;
        log::info!("Best score {} saved", score);
        Ok(())
    }
}
