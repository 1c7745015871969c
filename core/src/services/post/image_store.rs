//! Image storage abstraction for post illustrations

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainResult;

/// An uploaded image before it is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// File name as sent by the client
    pub original_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(original_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            original_name: original_name.into(),
            bytes,
        }
    }
}

/// Trait for image storage backends
///
/// File names passed in are always produced by [`stored_file_name`] or
/// checked with [`is_safe_file_name`] first.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Write an image under `file_name`, replacing any existing file
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> DomainResult<()>;

    /// Read an image, `None` if there is no such file
    async fn load(&self, file_name: &str) -> DomainResult<Option<Vec<u8>>>;

    /// Remove an image, returning whether it existed
    async fn delete(&self, file_name: &str) -> DomainResult<bool>;
}

/// Strip any directory part and keep only `[A-Za-z0-9._-]`
pub fn sanitize_file_name(original: &str) -> String {
    let base = original
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    let cleaned = cleaned.trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        String::from("image")
    } else {
        cleaned
    }
}

/// Name an upload is stored under: upload time in unix millis followed by
/// the sanitized client file name
pub fn stored_file_name(original: &str, unix_millis: i64) -> String {
    format!("{}{}", unix_millis, sanitize_file_name(original))
}

/// Whether `name` can be used as a file name inside the uploads directory
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains("..")
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}

/// In-memory image store
#[derive(Clone, Default)]
pub struct MockImageStore {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MockImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of all stored files, sorted
    pub async fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.files.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl ImageStore for MockImageStore {
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> DomainResult<()> {
        self.files.write().await.insert(file_name.to_string(), bytes);
        Ok(())
    }

    async fn load(&self, file_name: &str) -> DomainResult<Option<Vec<u8>>> {
        Ok(self.files.read().await.get(file_name).cloned())
    }

    async fn delete(&self, file_name: &str) -> DomainResult<bool> {
        Ok(self.files.write().await.remove(file_name).is_some())
    }
}
