//! In-memory implementation of CommentRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::comment::Comment;
use crate::errors::DomainError;

use super::trait_::CommentRepository;

/// Mock comment repository, comments kept in insertion order
#[derive(Clone, Default)]
pub struct MockCommentRepository {
    comments: Arc<RwLock<Vec<Comment>>>,
}

impl MockCommentRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for MockCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, DomainError> {
        let mut comments = self.comments.write().await;
        comments.push(comment.clone());
        Ok(comment)
    }

    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        let comments = self.comments.read().await;
        Ok(comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn delete_by_post(&self, post_id: Uuid) -> Result<u64, DomainError> {
        let mut comments = self.comments.write().await;
        let before = comments.len();
        comments.retain(|c| c.post_id != post_id);
        Ok((before - comments.len()) as u64)
    }
}
