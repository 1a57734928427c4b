//! Blog post operations and aggregate statistics.

use std::sync::Arc;
use tracing::warn;

use crate::domain::entities::blog::{
    BlogPost, BlogStats, Comment, DashboardStats, NewBlogPost, NewComment, PostWithStats,
    ViewRecord,
};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BlogRepository, UserRepository};

/// Post CRUD, interactions, and the read-heavy aggregate views
///
/// The aggregates are best-effort: a failing count sub-query is logged
/// and substituted with zero instead of failing the parent request.
pub struct BlogService<B: BlogRepository, U: UserRepository> {
    blog_repository: Arc<B>,
    user_repository: Arc<U>,
}

impl<B: BlogRepository, U: UserRepository> BlogService<B, U> {
    pub fn new(blog_repository: Arc<B>, user_repository: Arc<U>) -> Self {
        Self {
            blog_repository,
            user_repository,
        }
    }

    /// Create a post on behalf of an existing, non-banned author
    pub async fn create_post(
        &self,
        title: &str,
        description: &str,
        category: &str,
        author_id: i32,
    ) -> DomainResult<BlogPost> {
        if title.trim().is_empty() || description.trim().is_empty() || category.trim().is_empty() {
            return Err(DomainError::validation(
                "Title, description and category are required",
            ));
        }

        let author = self
            .user_repository
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Author"))?;
        if author.banned {
            return Err(crate::errors::AuthError::AccountBanned.into());
        }

        self.blog_repository
            .create_post(NewBlogPost {
                title: title.trim().to_string(),
                description: description.to_string(),
                category: category.trim().to_string(),
                author_id: author.id,
                author_name: author.name,
            })
            .await
    }

    /// All posts, newest first, each decorated with its counters
    pub async fn list_posts(&self) -> DomainResult<Vec<PostWithStats>> {
        let posts = self.blog_repository.list_posts().await?;
        let mut decorated = Vec::with_capacity(posts.len());
        for post in posts {
            let stats = self.post_stats(post.id).await;
            decorated.push(PostWithStats { post, stats });
        }
        Ok(decorated)
    }

    /// One post with its counters
    pub async fn get_post(&self, id: i32) -> DomainResult<PostWithStats> {
        let post = self
            .blog_repository
            .find_post(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Blog post"))?;
        let stats = self.post_stats(post.id).await;
        Ok(PostWithStats { post, stats })
    }

    /// Delete a post owned by the requester
    pub async fn delete_post(&self, id: i32, requester_id: i32) -> DomainResult<()> {
        let deleted = self.blog_repository.delete_post(id, requester_id).await?;
        if !deleted {
            return Err(DomainError::not_found("Blog post"));
        }
        Ok(())
    }

    /// Toggle a like; returns whether the post is now liked
    pub async fn toggle_like(&self, blog_id: i32, user_id: i32) -> DomainResult<bool> {
        self.ensure_post_exists(blog_id).await?;
        self.blog_repository.toggle_like(blog_id, user_id).await
    }

    /// Add a comment to a post
    pub async fn add_comment(
        &self,
        blog_id: i32,
        user_id: i32,
        comment_text: &str,
    ) -> DomainResult<Comment> {
        if comment_text.trim().is_empty() {
            return Err(DomainError::validation("Comment text is required"));
        }
        self.ensure_post_exists(blog_id).await?;
        self.blog_repository
            .add_comment(NewComment {
                blog_id,
                user_id,
                comment_text: comment_text.trim().to_string(),
            })
            .await
    }

    /// Comments on a post, oldest first
    pub async fn comments(&self, blog_id: i32) -> DomainResult<Vec<Comment>> {
        self.ensure_post_exists(blog_id).await?;
        self.blog_repository.comments_for_post(blog_id).await
    }

    /// Record a view; duplicate sessions are absorbed silently
    pub async fn record_view(&self, view: ViewRecord) -> DomainResult<bool> {
        self.ensure_post_exists(view.blog_id).await?;
        self.blog_repository.record_view(view).await
    }

    /// Interaction counters for one post, degrading to zeros
    pub async fn post_stats(&self, blog_id: i32) -> BlogStats {
        BlogStats {
            likes: self.count_or_zero(self.blog_repository.count_likes(blog_id).await, "likes"),
            views: self.count_or_zero(self.blog_repository.count_views(blog_id).await, "views"),
            comments: self.count_or_zero(
                self.blog_repository.count_comments(blog_id).await,
                "comments",
            ),
        }
    }

    /// Aggregated dashboard for an author, degrading to an empty zeroed
    /// dashboard on repository failure
    pub async fn dashboard(&self, user_id: i32) -> DashboardStats {
        let posts = match self.blog_repository.posts_by_author(user_id).await {
            Ok(posts) => posts,
            Err(error) => {
                warn!(
                    user_id,
                    %error,
                    event = "dashboard_degraded",
                    "Dashboard query failed, serving zero-valued defaults"
                );
                return DashboardStats::default();
            }
        };

        let mut dashboard = DashboardStats {
            total_blogs: posts.len() as i64,
            ..DashboardStats::default()
        };
        for post in posts {
            let stats = self.post_stats(post.id).await;
            dashboard.total_views += stats.views;
            dashboard.total_likes += stats.likes;
            dashboard.total_comments += stats.comments;
            dashboard.blogs.push(PostWithStats { post, stats });
        }
        dashboard
    }

    fn count_or_zero(&self, result: DomainResult<i64>, counter: &str) -> i64 {
        match result {
            Ok(count) => count,
            Err(error) => {
                warn!(
                    counter,
                    %error,
                    event = "stats_degraded",
                    "Count sub-query failed, substituting zero"
                );
                0
            }
        }
    }

    async fn ensure_post_exists(&self, blog_id: i32) -> DomainResult<()> {
        self.blog_repository
            .find_post(blog_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Blog post"))
    }
}
