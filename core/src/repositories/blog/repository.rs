//! Blog repository trait covering posts, likes, comments and views.

use async_trait::async_trait;

use crate::domain::entities::blog::{BlogPost, Comment, NewBlogPost, NewComment, ViewRecord};
use crate::errors::DomainError;

/// Persistence contract for posts and their interactions
///
/// Every operation maps to one parameterized query; the aggregate
/// endpoints stitch the counts together in the service layer.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Insert a post and return the persisted row
    async fn create_post(&self, new_post: NewBlogPost) -> Result<BlogPost, DomainError>;

    /// All posts, newest first
    async fn list_posts(&self) -> Result<Vec<BlogPost>, DomainError>;

    /// Find a post by id
    async fn find_post(&self, id: i32) -> Result<Option<BlogPost>, DomainError>;

    /// Posts authored by a user, newest first
    async fn posts_by_author(&self, author_id: i32) -> Result<Vec<BlogPost>, DomainError>;

    /// Delete a post if it belongs to `author_id`; returns whether a row
    /// was removed
    async fn delete_post(&self, id: i32, author_id: i32) -> Result<bool, DomainError>;

    /// Toggle a like; returns true if the post is now liked by the user
    async fn toggle_like(&self, blog_id: i32, user_id: i32) -> Result<bool, DomainError>;

    /// Insert a comment and return the persisted row
    async fn add_comment(&self, new_comment: NewComment) -> Result<Comment, DomainError>;

    /// Comments on a post, oldest first
    async fn comments_for_post(&self, blog_id: i32) -> Result<Vec<Comment>, DomainError>;

    /// Record a view, deduplicated per (blog, session); returns whether a
    /// new view was counted
    async fn record_view(&self, view: ViewRecord) -> Result<bool, DomainError>;

    /// Likes on a post
    async fn count_likes(&self, blog_id: i32) -> Result<i64, DomainError>;

    /// Views of a post
    async fn count_views(&self, blog_id: i32) -> Result<i64, DomainError>;

    /// Comments on a post
    async fn count_comments(&self, blog_id: i32) -> Result<i64, DomainError>;

    /// Total posts on the platform
    async fn count_posts(&self) -> Result<i64, DomainError>;

    /// Total likes on the platform
    async fn count_all_likes(&self) -> Result<i64, DomainError>;

    /// Total comments on the platform
    async fn count_all_comments(&self) -> Result<i64, DomainError>;
}
