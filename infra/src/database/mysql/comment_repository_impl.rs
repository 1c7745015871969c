//! MySQL implementation of the CommentRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use sb_core::domain::entities::comment::Comment;
use sb_core::errors::DomainError;
use sb_core::repositories::CommentRepository;

use super::{column, parse_id, query_failed};

/// MySQL implementation of CommentRepository
pub struct MySqlCommentRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCommentRepository {
    /// Create a new MySQL comment repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_comment(row: &sqlx::mysql::MySqlRow) -> Result<Comment, DomainError> {
        let id: String = column(row, "id")?;
        let post_id: String = column(row, "post_id")?;
        let author: String = column(row, "author")?;

        Ok(Comment {
            id: parse_id(&id, "comments.id")?,
            post_id: parse_id(&post_id, "comments.post_id")?,
            comment: column(row, "comment")?,
            author: parse_id(&author, "comments.author")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
        })
    }
}

#[async_trait]
impl CommentRepository for MySqlCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, DomainError> {
        let query = r#"
            INSERT INTO comments (id, post_id, comment, author, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(comment.id.to_string())
            .bind(comment.post_id.to_string())
            .bind(&comment.comment)
            .bind(comment.author.to_string())
            .bind(comment.created_at)
            .execute(&self.pool)
            .await
            .map_err(query_failed("Creating comment"))?;

        Ok(comment)
    }

    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        let query = r#"
            SELECT id, post_id, comment, author, created_at
            FROM comments
            WHERE post_id = ?
            ORDER BY seq
        "#;

        let rows = sqlx::query(query)
            .bind(post_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("Listing comments"))?;

        rows.iter().map(Self::row_to_comment).collect()
    }

    async fn delete_by_post(&self, post_id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM comments WHERE post_id = ?")
            .bind(post_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed("Deleting comments"))?;

        Ok(result.rows_affected())
    }
}
