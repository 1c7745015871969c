//! MySQL implementation of the UserRepository trait.
//!
//! Users live in `users`; the ordered list of owned posts lives in
//! `user_posts`, ordered by its auto-increment `seq`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use sb_core::domain::entities::user::User;
use sb_core::errors::{AuthError, DomainError};
use sb_core::repositories::UserRepository;

use super::{column, parse_id, query_failed};

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a `users` row to a User entity without its posts
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = column(row, "id")?;

        Ok(User {
            id: parse_id(&id, "users.id")?,
            username: column(row, "username")?,
            password_hash: column(row, "password_hash")?,
            posts: Vec::new(),
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }

    /// Owned post ids in ownership order
    async fn load_posts(&self, user_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        let ids: Vec<String> = sqlx::query_scalar(
            "SELECT post_id FROM user_posts WHERE user_id = ? ORDER BY seq",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed("Loading user posts"))?;

        ids.iter()
            .map(|id| parse_id(id, "user_posts.post_id"))
            .collect()
    }

    async fn hydrate(&self, row: Option<sqlx::mysql::MySqlRow>) -> Result<Option<User>, DomainError> {
        match row {
            Some(row) => {
                let mut user = Self::row_to_user(&row)?;
                user.posts = self.load_posts(user.id).await?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, username, password_hash, created_at, updated_at
            FROM users
            WHERE username = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("Finding user by username"))?;

        self.hydrate(row).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, username, password_hash, created_at, updated_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("Finding user by id"))?;

        self.hydrate(row).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, username, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => {}
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(AuthError::DuplicateUsername.into());
            }
            Err(e) => return Err(query_failed("Creating user")(e)),
        }

        for post_id in &user.posts {
            self.push_post(user.id, *post_id).await?;
        }

        Ok(user)
    }

    async fn push_post(&self, user_id: Uuid, post_id: Uuid) -> Result<(), DomainError> {
        let matches: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(user_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed("Checking user existence"))?;

        if matches == 0 {
            return Err(DomainError::not_found("User"));
        }

        sqlx::query("INSERT IGNORE INTO user_posts (user_id, post_id) VALUES (?, ?)")
            .bind(user_id.to_string())
            .bind(post_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("Recording post ownership"))?;

        sqlx::query("UPDATE users SET updated_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("Touching user"))?;

        Ok(())
    }

    async fn pull_post(&self, user_id: Uuid, post_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM user_posts WHERE user_id = ? AND post_id = ?")
            .bind(user_id.to_string())
            .bind(post_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("Removing post ownership"))?;

        Ok(result.rows_affected() > 0)
    }
}
