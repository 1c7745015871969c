//! Comment service implementation

use std::collections::HashMap;
use std::sync::Arc;

use sb_shared::types::{AuthorSummary, CommentView};
use uuid::Uuid;

use crate::domain::entities::comment::Comment;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{CommentRepository, PostRepository, UserRepository};

/// Service for commenting on posts
pub struct CommentService<C, P, U>
where
    C: CommentRepository,
    P: PostRepository,
    U: UserRepository,
{
    comment_repository: Arc<C>,
    post_repository: Arc<P>,
    user_repository: Arc<U>,
}

impl<C, P, U> CommentService<C, P, U>
where
    C: CommentRepository,
    P: PostRepository,
    U: UserRepository,
{
    pub fn new(comment_repository: Arc<C>, post_repository: Arc<P>, user_repository: Arc<U>) -> Self {
        Self {
            comment_repository,
            post_repository,
            user_repository,
        }
    }

    /// Add a comment by `author_id` to `post_id`
    ///
    /// # Returns
    ///
    /// * `Ok(CommentView)` - The stored comment with its author resolved
    /// * `Err(DomainError::Validation)` - Blank comment
    /// * `Err(DomainError::NotFound)` - No such post
    pub async fn create_comment(
        &self,
        author_id: Uuid,
        post_id: Uuid,
        text: &str,
    ) -> DomainResult<CommentView> {
        if text.trim().is_empty() {
            return Err(DomainError::validation("The comment cannot be empty"));
        }

        self.post_repository
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post"))?;

        let author = self
            .user_repository
            .find_by_id(author_id)
            .await?
            .ok_or(AuthError::StaleIdentity)?;

        let comment = self
            .comment_repository
            .create(Comment::new(post_id, author.id, text.to_string()))
            .await?;

        tracing::debug!(comment_id = %comment.id, post_id = %post_id, "Comment added");
        Ok(comment.into_view(AuthorSummary {
            id: author.id,
            username: author.username,
        }))
    }

    /// Comments on a post, oldest first
    pub async fn post_comments(&self, post_id: Uuid) -> DomainResult<Vec<CommentView>> {
        self.post_repository
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post"))?;

        let comments = self.comment_repository.find_by_post(post_id).await?;

        let mut authors: HashMap<Uuid, String> = HashMap::new();
        let mut views = Vec::with_capacity(comments.len());
        for comment in comments {
            if !authors.contains_key(&comment.author) {
                let username = self
                    .user_repository
                    .find_by_id(comment.author)
                    .await?
                    .map(|user| user.username)
                    .unwrap_or_default();
                authors.insert(comment.author, username);
            }

            let author = AuthorSummary {
                id: comment.author,
                username: authors.get(&comment.author).cloned().unwrap_or_default(),
            };
            views.push(comment.into_view(author));
        }

        Ok(views)
    }
}
