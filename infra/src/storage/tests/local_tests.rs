//! Unit tests for the local-disk image store

use sb_core::errors::DomainError;
use sb_core::services::post::ImageStore;

use crate::storage::LocalImageStore;

#[tokio::test]
async fn test_creates_root_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("uploads");

    let store = LocalImageStore::new(&root).await.unwrap();
    assert!(store.root().is_dir());
}

#[tokio::test]
async fn test_save_load_delete() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalImageStore::new(dir.path()).await.unwrap();

    store.save("1700000000000cat.png", vec![1, 2, 3]).await.unwrap();
    assert!(dir.path().join("1700000000000cat.png").is_file());
    assert_eq!(
        store.load("1700000000000cat.png").await.unwrap(),
        Some(vec![1, 2, 3])
    );

    assert!(store.delete("1700000000000cat.png").await.unwrap());
    assert!(!store.delete("1700000000000cat.png").await.unwrap());
    assert_eq!(store.load("1700000000000cat.png").await.unwrap(), None);
}

#[tokio::test]
async fn test_rejects_path_traversal() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalImageStore::new(dir.path().join("uploads")).await.unwrap();

    assert!(matches!(
        store.load("../secret").await,
        Err(DomainError::Validation { .. })
    ));
    assert!(matches!(
        store.save("a/b.png", vec![0]).await,
        Err(DomainError::Validation { .. })
    ));
}
