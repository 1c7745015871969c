//! Local-disk image store backing `/uploads`

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sb_core::errors::{DomainError, DomainResult};
use sb_core::services::post::{is_safe_file_name, ImageStore};

use crate::InfrastructureError;

/// Image store keeping one file per image in a single directory
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    /// Create a store rooted at `root`, creating the directory if needed
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, InfrastructureError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        tracing::info!(path = %root.display(), "Image store ready");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, file_name: &str) -> DomainResult<PathBuf> {
        if !is_safe_file_name(file_name) {
            return Err(DomainError::validation("Invalid file name"));
        }
        Ok(self.root.join(file_name))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> DomainResult<()> {
        let path = self.path_for(file_name)?;
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            tracing::error!(file = %file_name, "Failed to write image: {}", e);
            DomainError::from(InfrastructureError::Io(e))
        })
    }

    async fn load(&self, file_name: &str) -> DomainResult<Option<Vec<u8>>> {
        let path = self.path_for(file_name)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(InfrastructureError::Io(e).into()),
        }
    }

    async fn delete(&self, file_name: &str) -> DomainResult<bool> {
        let path = self.path_for(file_name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(InfrastructureError::Io(e).into()),
        }
    }
}
