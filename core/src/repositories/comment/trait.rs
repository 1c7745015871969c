//! Comment repository trait defining the interface for comment persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::comment::Comment;
use crate::errors::DomainError;

/// Repository trait for Comment entity persistence operations
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment
    async fn create(&self, comment: Comment) -> Result<Comment, DomainError>;

    /// Comments on a post, oldest first
    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError>;

    /// Remove every comment on a post, returning how many were removed
    async fn delete_by_post(&self, post_id: Uuid) -> Result<u64, DomainError>;
}
