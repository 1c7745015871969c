//! Post repository trait defining the interface for post persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::post::Post;
use crate::errors::DomainError;

/// Repository trait for Post entity persistence operations
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post
    async fn create(&self, post: Post) -> Result<Post, DomainError>;

    /// Find a post by id without touching its view counter
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError>;

    /// All posts, newest first
    async fn find_all(&self) -> Result<Vec<Post>, DomainError>;

    /// At most `limit` posts ordered by view count, highest first
    async fn find_popular(&self, limit: usize) -> Result<Vec<Post>, DomainError>;

    /// Posts with the given ids, in the order of `ids`. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Post>, DomainError>;

    /// Atomically add one to the view counter and return the updated post
    ///
    /// # Returns
    /// * `Ok(Some(Post))` - The post after the increment
    /// * `Ok(None)` - No such post
    async fn increment_views(&self, id: Uuid) -> Result<Option<Post>, DomainError>;

    /// Overwrite title, text, image and `updated_at` of an existing post
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No such post
    async fn update(&self, post: Post) -> Result<Post, DomainError>;

    /// Delete a post
    ///
    /// # Returns
    /// * `Ok(true)` - Post was deleted
    /// * `Ok(false)` - Post not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
