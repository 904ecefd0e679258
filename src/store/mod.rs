//! Score storage behind the HTTP service.
//!
//! Records are kept in submission order; [`rank`] produces the leaderboard
//! order (score descending, earlier submissions first on ties).

mod file;
mod memory;

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ScoreRecord;

pub use file::JsonFileScoreStore;
pub use memory::MemoryScoreStore;

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Corrupt(serde_json::Error),
    /// A writer panicked while holding the lock.
    Poisoned,
    /// Backend-specific failure with a message fit for users.
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "score storage failed: {}", e),
            StoreError::Corrupt(e) => write!(f, "score file is corrupt: {}", e),
            StoreError::Poisoned => write!(f, "score storage is unavailable"),
            StoreError::Unavailable(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Corrupt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Corrupt(err)
    }
}

/// A record as kept by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredScore {
    pub id: Uuid,
    #[serde(flatten)]
    pub record: ScoreRecord,
}

impl StoredScore {
    pub fn new(record: ScoreRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            record,
        }
    }
}

pub trait ScoreStore: Send + Sync {
    /// Append a record, returning its id.
    fn add(&self, record: ScoreRecord) -> Result<Uuid, StoreError>;

    /// All records in leaderboard order.
    fn leaderboard(&self) -> Result<Vec<ScoreRecord>, StoreError>;

    /// Remove every record.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Order records by score, highest first. Ties keep submission order.
pub fn rank(entries: &[StoredScore]) -> Vec<ScoreRecord> {
    let mut ranked: Vec<ScoreRecord> = entries.iter().map(|e| e.record.clone()).collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
