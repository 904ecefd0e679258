use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::models::ScoreRecord;

use super::{rank, MemoryScoreStore, ScoreStore, StoreError, StoredScore};

/// Scores mirrored to a JSON file, rewritten on every change.
///
/// A failed write rolls the in-memory list back.
pub struct JsonFileScoreStore {
    path: PathBuf,
    inner: MemoryScoreStore,
}

impl JsonFileScoreStore {
    /// Open the store, loading any scores already saved at `path`.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = read_entries(&path)?;
        log::info!("Loaded {} scores from {}", entries.len(), path.display());

        Ok(Self {
            path,
            inner: MemoryScoreStore::with_entries(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_entries(path: &Path) -> Result<Vec<StoredScore>, StoreError> {
    match fs::read_to_string(path) {
        Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

fn write_entries(path: &Path, entries: &[StoredScore]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(entries)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl ScoreStore for JsonFileScoreStore {
    fn add(&self, record: ScoreRecord) -> Result<Uuid, StoreError> {
        self.inner.with_entries_mut(|entries| {
            let stored = StoredScore::new(record);
            let id = stored.id;
            entries.push(stored);

            if let Err(e) = write_entries(&self.path, entries) {
                entries.pop();
                return Err(e);
            }
            Ok(id)
        })
    }

    fn leaderboard(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        self.inner.with_entries_mut(|entries| Ok(rank(entries)))
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.inner.with_entries_mut(|entries| {
            write_entries(&self.path, &[])?;
            entries.clear();
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let store = JsonFileScoreStore::open(&path).unwrap();
        store.add(ScoreRecord::new("Ada", 7)).unwrap();
        store.add(ScoreRecord::new("Grace", 9)).unwrap();
        drop(store);

        let reopened = JsonFileScoreStore::open(&path).unwrap();
        assert_eq!(
            reopened.leaderboard().unwrap(),
            vec![ScoreRecord::new("Grace", 9), ScoreRecord::new("Ada", 7)]
        );
    }

    #[test]
    fn test_clear_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let store = JsonFileScoreStore::open(&path).unwrap();
        store.add(ScoreRecord::new("Ada", 7)).unwrap();
        store.clear().unwrap();

        let reopened = JsonFileScoreStore::open(&path).unwrap();
        assert!(reopened.leaderboard().unwrap().is_empty());
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("scores.json");

        let store = JsonFileScoreStore::open(&path).unwrap();
        assert!(matches!(
            store.add(ScoreRecord::new("Ada", 7)),
            Err(StoreError::Io(_))
        ));
        assert!(store.leaderboard().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "{ not a list").unwrap();

        assert!(matches!(
            JsonFileScoreStore::open(&path),
            Err(StoreError::Corrupt(_))
        ));
    }
}
