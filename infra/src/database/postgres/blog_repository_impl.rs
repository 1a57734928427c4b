//! PostgreSQL implementation of the BlogRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use bs_core::domain::entities::blog::{BlogPost, Comment, NewBlogPost, NewComment, ViewRecord};
use bs_core::errors::DomainError;
use bs_core::repositories::BlogRepository;

use super::db_error;

const POST_COLUMNS: &str =
    "id, title, description, category, author_id, author_name, status, created_at, updated_at";

/// Post and interaction persistence on top of the blog tables
pub struct PostgresBlogRepository {
    pool: PgPool,
}

impl PostgresBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_post(row: &sqlx::postgres::PgRow) -> Result<BlogPost, DomainError> {
        Ok(BlogPost {
            id: row
                .try_get("id")
                .map_err(|e| db_error("Failed to read id", e))?,
            title: row
                .try_get("title")
                .map_err(|e| db_error("Failed to read title", e))?,
            description: row
                .try_get("description")
                .map_err(|e| db_error("Failed to read description", e))?,
            category: row
                .try_get("category")
                .map_err(|e| db_error("Failed to read category", e))?,
            author_id: row
                .try_get("author_id")
                .map_err(|e| db_error("Failed to read author_id", e))?,
            author_name: row
                .try_get("author_name")
                .map_err(|e| db_error("Failed to read author_name", e))?,
            status: row
                .try_get("status")
                .map_err(|e| db_error("Failed to read status", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to read created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("Failed to read updated_at", e))?,
        })
    }

    fn row_to_comment(row: &sqlx::postgres::PgRow) -> Result<Comment, DomainError> {
        Ok(Comment {
            id: row
                .try_get("id")
                .map_err(|e| db_error("Failed to read id", e))?,
            blog_id: row
                .try_get("blog_id")
                .map_err(|e| db_error("Failed to read blog_id", e))?,
            user_id: row
                .try_get("user_id")
                .map_err(|e| db_error("Failed to read user_id", e))?,
            comment_text: row
                .try_get("comment_text")
                .map_err(|e| db_error("Failed to read comment_text", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to read created_at", e))?,
        })
    }

    async fn scalar_count(&self, query: &str, bind: Option<i32>) -> Result<i64, DomainError> {
        let mut q = sqlx::query(query);
        if let Some(value) = bind {
            q = q.bind(value);
        }
        let row = q
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Count query failed", e))?;
        row.try_get("count")
            .map_err(|e| db_error("Failed to read count", e))
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn create_post(&self, new_post: NewBlogPost) -> Result<BlogPost, DomainError> {
        let query = format!(
            "INSERT INTO blog_posts (title, description, category, author_id, author_name) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            POST_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(&new_post.title)
            .bind(&new_post.description)
            .bind(&new_post.category)
            .bind(new_post.author_id)
            .bind(&new_post.author_name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create post", e))?;
        Self::row_to_post(&row)
    }

    async fn list_posts(&self) -> Result<Vec<BlogPost>, DomainError> {
        let query = format!(
            "SELECT {} FROM blog_posts ORDER BY created_at DESC",
            POST_COLUMNS
        );
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Post listing failed", e))?;
        rows.iter().map(Self::row_to_post).collect()
    }

    async fn find_post(&self, id: i32) -> Result<Option<BlogPost>, DomainError> {
        let query = format!("SELECT {} FROM blog_posts WHERE id = $1 LIMIT 1", POST_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Post lookup failed", e))?;
        row.as_ref().map(Self::row_to_post).transpose()
    }

    async fn posts_by_author(&self, author_id: i32) -> Result<Vec<BlogPost>, DomainError> {
        let query = format!(
            "SELECT {} FROM blog_posts WHERE author_id = $1 ORDER BY created_at DESC",
            POST_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Author post listing failed", e))?;
        rows.iter().map(Self::row_to_post).collect()
    }

    async fn delete_post(&self, id: i32, author_id: i32) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1 AND author_id = $2")
            .bind(id)
            .bind(author_id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete post", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn toggle_like(&self, blog_id: i32, user_id: i32) -> Result<bool, DomainError> {
        let inserted = sqlx::query(
            "INSERT INTO likes (blog_id, user_id) VALUES ($1, $2) \
             ON CONFLICT (blog_id, user_id) DO NOTHING",
        )
        .bind(blog_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to record like", e))?;

        if inserted.rows_affected() > 0 {
            return Ok(true);
        }
        sqlx::query("DELETE FROM likes WHERE blog_id = $1 AND user_id = $2")
            .bind(blog_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to remove like", e))?;
        Ok(false)
    }

    async fn add_comment(&self, new_comment: NewComment) -> Result<Comment, DomainError> {
        let row = sqlx::query(
            "INSERT INTO comments (blog_id, user_id, comment_text) VALUES ($1, $2, $3) \
             RETURNING id, blog_id, user_id, comment_text, created_at",
        )
        .bind(new_comment.blog_id)
        .bind(new_comment.user_id)
        .bind(&new_comment.comment_text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to add comment", e))?;
        Self::row_to_comment(&row)
    }

    async fn comments_for_post(&self, blog_id: i32) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, blog_id, user_id, comment_text, created_at FROM comments \
             WHERE blog_id = $1 ORDER BY created_at ASC",
        )
        .bind(blog_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Comment listing failed", e))?;
        rows.iter().map(Self::row_to_comment).collect()
    }

    async fn record_view(&self, view: ViewRecord) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "INSERT INTO views (blog_id, user_id, ip_address, session_id, user_agent) \
             VALUES ($1, $2, $3, $4, $5) ON CONFLICT (blog_id, session_id) DO NOTHING",
        )
        .bind(view.blog_id)
        .bind(view.user_id)
        .bind(&view.ip_address)
        .bind(&view.session_id)
        .bind(&view.user_agent)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to record view", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_likes(&self, blog_id: i32) -> Result<i64, DomainError> {
        self.scalar_count(
            "SELECT COUNT(*) AS count FROM likes WHERE blog_id = $1",
            Some(blog_id),
        )
        .await
    }

    async fn count_views(&self, blog_id: i32) -> Result<i64, DomainError> {
        self.scalar_count(
            "SELECT COUNT(*) AS count FROM views WHERE blog_id = $1",
            Some(blog_id),
        )
        .await
    }

    async fn count_comments(&self, blog_id: i32) -> Result<i64, DomainError> {
        self.scalar_count(
            "SELECT COUNT(*) AS count FROM comments WHERE blog_id = $1",
            Some(blog_id),
        )
        .await
    }

    async fn count_posts(&self) -> Result<i64, DomainError> {
        self.scalar_count("SELECT COUNT(*) AS count FROM blog_posts", None)
            .await
    }

    async fn count_all_likes(&self) -> Result<i64, DomainError> {
        self.scalar_count("SELECT COUNT(*) AS count FROM likes", None)
            .await
    }

    async fn count_all_comments(&self) -> Result<i64, DomainError> {
        self.scalar_count("SELECT COUNT(*) AS count FROM comments", None)
            .await
    }
}
