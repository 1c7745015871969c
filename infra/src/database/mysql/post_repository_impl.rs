//! MySQL implementation of the PostRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use sb_core::domain::entities::post::Post;
use sb_core::errors::DomainError;
use sb_core::repositories::PostRepository;

use super::{column, parse_id, query_failed};

const POST_COLUMNS: &str =
    "id, username, title, text, image_url, views, author, created_at, updated_at";

/// MySQL implementation of PostRepository
pub struct MySqlPostRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlPostRepository {
    /// Create a new MySQL post repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_post(row: &sqlx::mysql::MySqlRow) -> Result<Post, DomainError> {
        let id: String = column(row, "id")?;
        let author: String = column(row, "author")?;

        Ok(Post {
            id: parse_id(&id, "posts.id")?,
            username: column(row, "username")?,
            title: column(row, "title")?,
            text: column(row, "text")?,
            image_url: column(row, "image_url")?,
            views: column::<u64>(row, "views")?,
            author: parse_id(&author, "posts.author")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }

    fn rows_to_posts(rows: &[sqlx::mysql::MySqlRow]) -> Result<Vec<Post>, DomainError> {
        rows.iter().map(Self::row_to_post).collect()
    }
}

#[async_trait]
impl PostRepository for MySqlPostRepository {
    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        let query = r#"
            INSERT INTO posts (
                id, username, title, text, image_url, views, author, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(post.id.to_string())
            .bind(&post.username)
            .bind(&post.title)
            .bind(&post.text)
            .bind(&post.image_url)
            .bind(post.views)
            .bind(post.author.to_string())
            .bind(post.created_at)
            .bind(post.updated_at)
            .execute(&self.pool)
            .await
            .map_err(query_failed("Creating post"))?;

        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let query = format!("SELECT {} FROM posts WHERE id = ? LIMIT 1", POST_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("Finding post"))?;

        row.as_ref().map(Self::row_to_post).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        let query = format!("SELECT {} FROM posts ORDER BY created_at DESC", POST_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("Listing posts"))?;

        Self::rows_to_posts(&rows)
    }

    async fn find_popular(&self, limit: usize) -> Result<Vec<Post>, DomainError> {
        let query = format!(
            "SELECT {} FROM posts ORDER BY views DESC, created_at DESC LIMIT ?",
            POST_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(limit as u64)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("Listing popular posts"))?;

        Self::rows_to_posts(&rows)
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Post>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            "SELECT {} FROM posts WHERE id IN ({})",
            POST_COLUMNS, placeholders
        );

        let mut statement = sqlx::query(&query);
        for id in ids {
            statement = statement.bind(id.to_string());
        }

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("Finding posts by id"))?;
        let found = Self::rows_to_posts(&rows)?;

        // Restore the caller's order
        Ok(ids
            .iter()
            .filter_map(|id| found.iter().find(|p| p.id == *id).cloned())
            .collect())
    }

    async fn increment_views(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let result = sqlx::query("UPDATE posts SET views = views + 1 WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("Incrementing post views"))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn update(&self, post: Post) -> Result<Post, DomainError> {
        let query = r#"
            UPDATE posts
            SET title = ?, text = ?, image_url = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&post.title)
            .bind(&post.text)
            .bind(&post.image_url)
            .bind(post.updated_at)
            .bind(post.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("Updating post"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Post"));
        }

        self.find_by_id(post.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post"))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("Deleting post"))?;

        Ok(result.rows_affected() > 0)
    }
}
