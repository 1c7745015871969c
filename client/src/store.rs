//! Durable storage for the session token
//!
//! The client keeps exactly one token. Reads and writes are uncoordinated;
//! the last write wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Directory under the platform data dir holding client state
pub const APP_DIR: &str = "scribe";

/// Session file name inside [`APP_DIR`]
pub const SESSION_FILE: &str = "session.json";

/// Where the client keeps its token
pub trait TokenStore: Send + Sync {
    /// The stored token, if any
    fn load(&self) -> Result<Option<String>, ClientError>;

    /// Replace the stored token
    fn save(&self, token: &str) -> Result<(), ClientError>;

    /// Forget the stored token. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), ClientError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// Token persisted as JSON in a file, surviving restarts
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_local_dir>/scribe/session.json`, if the platform has a data dir
    pub fn default_location() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join(SESSION_FILE))
    }

    /// Store at [`FileTokenStore::default_location`]
    pub fn at_default_location() -> Result<Self, ClientError> {
        Self::default_location()
            .map(Self::new)
            .ok_or_else(|| ClientError::Config("No local data directory on this platform".into()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, ClientError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<StoredSession>(&contents) {
            Ok(session) if !session.token.is_empty() => Ok(Some(session.token)),
            Ok(_) => Ok(None),
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable session file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string(&StoredSession {
            token: token.to_string(),
        })?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Token held in memory only, lost with the process
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, ClientError> {
        Ok(self.token.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}
