//! Local file storage configuration for post images

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where uploaded images are written
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding uploaded images
    pub uploads_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            uploads_dir: PathBuf::from("uploads"),
        }
    }
}

impl StorageConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        std::env::var("UPLOADS_DIR")
            .map(|dir| Self {
                uploads_dir: PathBuf::from(dir),
            })
            .unwrap_or_default()
    }
}
