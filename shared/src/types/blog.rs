//! Post and comment bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub id: Uuid,
    /// Author's username at the time of posting
    pub username: String,
    pub title: String,
    pub text: String,
    /// Stored image file name, empty when the post has no image
    pub image_url: String,
    pub views: u64,
    pub author: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `GET /api/posts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsOverview {
    /// All posts, newest first
    pub posts: Vec<PostView>,
    /// Most viewed posts, highest view count first
    pub popular_posts: Vec<PostView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub username: String,
}

/// A comment with its author resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    pub id: Uuid,
    pub post_id: Uuid,
    pub comment: String,
    pub author: AuthorSummary,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/comments/{post_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    /// Missing is treated like empty and rejected the same way
    #[serde(default)]
    pub comment: String,
}

/// Body of a successful `DELETE /api/posts/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostResponse {
    pub id: Uuid,
    pub message: String,
}
