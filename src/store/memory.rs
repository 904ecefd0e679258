use std::sync::Mutex;

use uuid::Uuid;

use crate::models::ScoreRecord;

use super::{rank, ScoreStore, StoreError, StoredScore};

/// Scores held in process memory; lost on restart.
#[derive(Default)]
pub struct MemoryScoreStore {
    entries: Mutex<Vec<StoredScore>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<StoredScore>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    /// Run `f` against the raw entry list under the lock.
    pub(super) fn with_entries_mut<T>(
        &self,
        f: impl FnOnce(&mut Vec<StoredScore>) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        f(&mut *entries)
    }
}

impl ScoreStore for MemoryScoreStore {
    fn add(&self, record: ScoreRecord) -> Result<Uuid, StoreError> {
        self.with_entries_mut(|entries| {
            let stored = StoredScore::new(record);
            let id = stored.id;
            entries.push(stored);
            Ok(id)
        })
    }

    fn leaderboard(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        self.with_entries_mut(|entries| Ok(rank(entries)))
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.with_entries_mut(|entries| {
            entries.clear();
            Ok(())
        })
    }
}
