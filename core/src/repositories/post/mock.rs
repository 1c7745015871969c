//! In-memory implementation of PostRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::post::Post;
use crate::errors::DomainError;

use super::trait_::PostRepository;

/// Mock post repository. Posts are kept in insertion order so that ties on
/// `created_at` resolve to the most recently inserted post.
#[derive(Clone, Default)]
pub struct MockPostRepository {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl MockPostRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for MockPostRepository {
    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        let mut posts = self.posts.write().await;
        if posts.iter().any(|p| p.id == post.id) {
            return Err(DomainError::validation("Post already exists"));
        }
        posts.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.read().await;
        let mut all: Vec<Post> = posts.iter().rev().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_popular(&self, limit: usize) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.read().await;
        let mut popular: Vec<Post> = posts.iter().rev().cloned().collect();
        popular.sort_by(|a, b| b.views.cmp(&a.views));
        popular.truncate(limit);
        Ok(popular)
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| posts.iter().find(|p| p.id == *id).cloned())
            .collect())
    }

    async fn increment_views(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let mut posts = self.posts.write().await;
        Ok(posts.iter_mut().find(|p| p.id == id).map(|post| {
            post.views += 1;
            post.clone()
        }))
    }

    async fn update(&self, post: Post) -> Result<Post, DomainError> {
        let mut posts = self.posts.write().await;
        let stored = posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or_else(|| DomainError::not_found("Post"))?;

        stored.title = post.title;
        stored.text = post.text;
        stored.image_url = post.image_url;
        stored.updated_at = post.updated_at;
        Ok(stored.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() != before)
    }
}
