//! Session context and display-name persistence.
//!
//! The chosen display name is carried in a [`SessionContext`] handed to the
//! screens that need it. Reading and writing the persisted copy goes through
//! a [`NameStore`].

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::config::NAME_STORAGE_KEY;

/// Longest display name accepted, in characters.
pub const NAME_MAX_LENGTH: usize = 32;

#[derive(Debug)]
pub enum ProfileError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::Io(e) => write!(f, "profile storage failed: {}", e),
            ProfileError::Parse(e) => write!(f, "profile file is corrupt: {}", e),
        }
    }
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileError::Io(e) => Some(e),
            ProfileError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ProfileError {
    fn from(err: io::Error) -> Self {
        ProfileError::Io(err)
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        ProfileError::Parse(err)
    }
}

/// Validates a display name, returning the trimmed form.
pub fn validate_name(name: &str) -> Result<String, &'static str> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err("Please enter your name");
    }

    if trimmed.chars().count() > NAME_MAX_LENGTH {
        return Err("Name must be at most 32 characters");
    }

    Ok(trimmed.to_string())
}

/// Storage for the display name that survives restarts.
pub trait NameStore: Send {
    fn load(&self) -> Result<Option<String>, ProfileError>;
    fn save(&self, name: &str) -> Result<(), ProfileError>;
}

/// Keeps the name under a fixed key in a small JSON file.
///
/// Other keys already present in the file are preserved.
pub struct FileNameStore {
    path: PathBuf,
}

impl FileNameStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, ProfileError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(HashMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl NameStore for FileNameStore {
    fn load(&self) -> Result<Option<String>, ProfileError> {
        Ok(self.read_entries()?.remove(NAME_STORAGE_KEY))
    }

    fn save(&self, name: &str) -> Result<(), ProfileError> {
        let mut entries = self.read_entries()?;
        entries.insert(NAME_STORAGE_KEY.to_string(), name.to_string());
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryNameStore {
    name: Mutex<Option<String>>,
}

impl MemoryNameStore {
    pub fn with_name(name: &str) -> Self {
        Self {
            name: Mutex::new(Some(name.to_string())),
        }
    }
}

impl NameStore for MemoryNameStore {
    fn load(&self) -> Result<Option<String>, ProfileError> {
        Ok(self.name.lock().map(|n| n.clone()).unwrap_or_default())
    }

    fn save(&self, name: &str) -> Result<(), ProfileError> {
        if let Ok(mut stored) = self.name.lock() {
            *stored = Some(name.to_string());
        }
        Ok(())
    }
}

/// Per-run state shared by the screens.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    display_name: Option<String>,
}

impl SessionContext {
    /// Restore the context from storage. A broken store starts empty.
    pub fn restore(store: &dyn NameStore) -> Self {
        let display_name = match store.load() {
            Ok(name) => name.and_then(|n| validate_name(&n).ok()),
            Err(e) => {
                log::warn!("Could not read saved name: {}", e);
                None
            }
        };
        Self { display_name }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Validate and adopt a name, persisting it through `store`.
    ///
    /// A storage failure is logged; the name still applies to this run.
    pub fn set_display_name(&mut self, name: &str, store: &dyn NameStore) -> Result<(), &'static str> {
        let name = validate_name(name)?;
        if let Err(e) = store.save(&name) {
            log::warn!("Could not save name: {}", e);
        }
        self.display_name = Some(name);
        Ok(())
    }
}
