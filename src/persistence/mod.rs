//! Best score persistence
//!
//! The game keeps exactly one persisted value: the best score. It is read
//! once at startup and written whenever a round beats it.
//!
//! Backends:
//! - `LocalStorageStore`: browser LocalStorage (wasm32)
//! - `JsonFileStore`: small JSON file with tmp-then-rename writes (native)
//! - `MemoryStore`: in-process, for headless runs and tests

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

use std::cell::Cell;
use std::rc::Rc;

use crate::error::PersistenceError;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Storage key / file stem for the best score
pub const STORAGE_KEY: &str = "pig-rhythm-highscore";

/// Where the best score lives
pub trait HighScoreStore {
    /// Stored best score, 0 if nothing was ever saved
    fn load_high_score(&self) -> Result<u32, PersistenceError>;
    fn save_high_score(&mut self, score: u32) -> Result<(), PersistenceError>;
}

/// In-memory store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<Cell<Option<u32>>>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        let store = Self::new();
        store.slot.set(Some(score));
        store
    }

    /// A store whose every read and write fails
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Value currently held, if any was saved
    pub fn stored(&self) -> Option<u32> {
        self.slot.get()
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&self) -> Result<u32, PersistenceError> {
        if self.failing {
            return Err(PersistenceError::Unavailable);
        }
        Ok(self.slot.get().unwrap_or(0))
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), PersistenceError> {
        if self.failing {
            return Err(PersistenceError::Write("memory store is read-only".into()));
        }
        self.slot.set(Some(score));
        Ok(())
    }
}

/// Parse a stored best score the way it was written (plain decimal)
pub fn parse_score(raw: &str) -> Result<u32, PersistenceError> {
    raw.trim()
        .parse()
        .map_err(|_| PersistenceError::Malformed(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_defaults_to_zero() {
        assert_eq!(MemoryStore::new().load_high_score().unwrap(), 0);
    }

    #[test]
    fn test_memory_store_clones_share_slot() {
        let store = MemoryStore::with_score(3);
        let mut handle = store.clone();
        handle.save_high_score(8).unwrap();
        assert_eq!(store.stored(), Some(8));
        assert_eq!(store.load_high_score().unwrap(), 8);
    }

    #[test]
    fn test_failing_store() {
        let mut store = MemoryStore::failing();
        assert!(matches!(
            store.load_high_score(),
            Err(PersistenceError::Unavailable)
        ));
        assert!(store.save_high_score(1).is_err());
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("42").unwrap(), 42);
        assert_eq!(parse_score(" 7\n").unwrap(), 7);
        assert!(matches!(
            parse_score("lots"),
            Err(PersistenceError::Malformed(_))
        ));
        assert!(parse_score("-3").is_err());
    }
}
