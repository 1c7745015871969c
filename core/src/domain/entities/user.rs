//! User entity representing a registered author in the Scribe system.

use chrono::{DateTime, Utc};
use sb_shared::types::UserProfile;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique, case-sensitive login name
    pub username: String,

    /// bcrypt hash (salt and cost embedded)
    pub password_hash: String,

    /// Owned post ids, oldest first
    pub posts: Vec<Uuid>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(username: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            posts: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a post to the ownership list
    pub fn push_post(&mut self, post_id: Uuid) {
        if !self.posts.contains(&post_id) {
            self.posts.push(post_id);
            self.updated_at = Utc::now();
        }
    }

    /// Removes a post from the ownership list
    pub fn pull_post(&mut self, post_id: Uuid) -> bool {
        let before = self.posts.len();
        self.posts.retain(|id| *id != post_id);
        let removed = self.posts.len() != before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    pub fn owns_post(&self, post_id: Uuid) -> bool {
        self.posts.contains(&post_id)
    }

    /// Public view without the password hash
    pub fn profile(&self) -> UserProfile {
        UserProfile::from(self)
    }
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            posts: user.posts.clone(),
            created_at: user.created_at,
        }
    }
}
