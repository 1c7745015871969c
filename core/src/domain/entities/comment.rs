//! Comment entity.

use chrono::{DateTime, Utc};
use sb_shared::types::{AuthorSummary, CommentView};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment left on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub comment: String,
    /// Commenter's user id
    pub author: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post_id: Uuid, author: Uuid, comment: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            comment,
            author,
            created_at: Utc::now(),
        }
    }

    /// Builds the API view with the author resolved
    pub fn into_view(self, author: AuthorSummary) -> CommentView {
        CommentView {
            id: self.id,
            post_id: self.post_id,
            comment: self.comment,
            author,
            created_at: self.created_at,
        }
    }
}
