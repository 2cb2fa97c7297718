//! Persistence of the user-state record (theme + favorites).
//!
//! The store loads once at construction and saves after every favorites or
//! theme mutation. The only contract is that the two fields round-trip
//! exactly across a save/load cycle.

use std::io;
use std::path::PathBuf;

use cinedex_model::UserState;
use parking_lot::Mutex;
use thiserror::Error;
use tracing::warn;

/// Failure while writing the persisted user state.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Storage backend for [`UserState`].
pub trait UserStateStore: Send + Sync {
    /// Best-effort load; an absent or unreadable record yields `None`.
    fn load(&self) -> Option<UserState>;

    fn save(&self, state: &UserState) -> Result<(), PersistError>;
}

/// JSON document on disk, one file per record.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform config directory
    /// (`<config_dir>/cinedex/user_state.json`).
    pub fn default_location() -> Option<Self> {
        dirs::config_dir()
            .map(|dir| Self::new(dir.join("cinedex").join("user_state.json")))
    }
}

impl UserStateStore for JsonFileStore {
    fn load(&self) -> Option<UserState> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed to read user state");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "discarding unreadable user state");
                None
            }
        }
    }

    fn save(&self, state: &UserState) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<Option<UserState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStateStore for MemoryStore {
    fn load(&self) -> Option<UserState> {
        self.state.lock().clone()
    }

    fn save(&self, state: &UserState) -> Result<(), PersistError> {
        *self.state.lock() = Some(state.clone());
        Ok(())
    }
}
