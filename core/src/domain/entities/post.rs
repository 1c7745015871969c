//! Post entity.

use chrono::{DateTime, Utc};
use sb_shared::types::PostView;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,

    /// Author's username captured at creation
    pub username: String,

    pub title: String,

    pub text: String,

    /// Stored image file name, empty when there is no image
    pub image_url: String,

    /// Number of times the post detail has been fetched
    pub views: u64,

    /// Author's user id
    pub author: Uuid,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Creates a new post authored by `author`
    pub fn new(author: &User, title: String, text: String, image_url: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: author.username.clone(),
            title,
            text,
            image_url: image_url.unwrap_or_default(),
            views: 0,
            author: author.id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.author == user_id
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    /// Replaces title and text
    pub fn edit(&mut self, title: String, text: String) {
        self.title = title;
        self.text = text;
        self.updated_at = Utc::now();
    }

    /// Replaces the image, returning the previous file name if there was one
    pub fn replace_image(&mut self, image_url: String) -> Option<String> {
        let previous = std::mem::replace(&mut self.image_url, image_url);
        self.updated_at = Utc::now();
        if previous.is_empty() {
            None
        } else {
            Some(previous)
        }
    }

    pub fn view(&self) -> PostView {
        PostView::from(self)
    }
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            username: post.username.clone(),
            title: post.title.clone(),
            text: post.text.clone(),
            image_url: post.image_url.clone(),
            views: post.views,
            author: post.author,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
