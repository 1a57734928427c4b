//! In-memory mock of [`BlogRepository`] for tests

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::blog::{BlogPost, Comment, NewBlogPost, NewComment, ViewRecord};
use crate::errors::DomainError;

use super::repository::BlogRepository;

#[derive(Default)]
struct Tables {
    posts: HashMap<i32, BlogPost>,
    comments: HashMap<i32, Comment>,
    likes: HashSet<(i32, i32)>,
    views: HashSet<(i32, String)>,
    next_post_id: i32,
    next_comment_id: i32,
}

/// Mock blog repository backed by in-memory tables
///
/// `fail_counts` switches every count query into an error so tests can
/// exercise the zero-default degradation of the stats aggregation.
pub struct MockBlogRepository {
    tables: Arc<RwLock<Tables>>,
    fail_counts: Arc<RwLock<bool>>,
}

impl MockBlogRepository {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables {
                next_post_id: 1,
                next_comment_id: 1,
                ..Tables::default()
            })),
            fail_counts: Arc::new(RwLock::new(false)),
        }
    }

    /// Make every count query fail until cleared
    pub async fn set_fail_counts(&self, fail: bool) {
        *self.fail_counts.write().await = fail;
    }

    async fn counts_available(&self) -> Result<(), DomainError> {
        if *self.fail_counts.read().await {
            return Err(DomainError::database("count query failed"));
        }
        Ok(())
    }
}

impl Default for MockBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogRepository for MockBlogRepository {
    async fn create_post(&self, new_post: NewBlogPost) -> Result<BlogPost, DomainError> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let post = BlogPost {
            id: tables.next_post_id,
            title: new_post.title,
            description: new_post.description,
            category: new_post.category,
            author_id: new_post.author_id,
            author_name: new_post.author_name,
            status: "published".to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.next_post_id += 1;
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn list_posts(&self) -> Result<Vec<BlogPost>, DomainError> {
        let tables = self.tables.read().await;
        let mut posts: Vec<BlogPost> = tables.posts.values().cloned().collect();
        posts.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(posts)
    }

    async fn find_post(&self, id: i32) -> Result<Option<BlogPost>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.posts.get(&id).cloned())
    }

    async fn posts_by_author(&self, author_id: i32) -> Result<Vec<BlogPost>, DomainError> {
        let tables = self.tables.read().await;
        let mut posts: Vec<BlogPost> = tables
            .posts
            .values()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(posts)
    }

    async fn delete_post(&self, id: i32, author_id: i32) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        let owned = tables
            .posts
            .get(&id)
            .map(|p| p.author_id == author_id)
            .unwrap_or(false);
        if owned {
            tables.posts.remove(&id);
            tables.comments.retain(|_, c| c.blog_id != id);
            tables.likes.retain(|(blog, _)| *blog != id);
            tables.views.retain(|(blog, _)| *blog != id);
        }
        Ok(owned)
    }

    async fn toggle_like(&self, blog_id: i32, user_id: i32) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        let key = (blog_id, user_id);
        if tables.likes.remove(&key) {
            Ok(false)
        } else {
            tables.likes.insert(key);
            Ok(true)
        }
    }

    async fn add_comment(&self, new_comment: NewComment) -> Result<Comment, DomainError> {
        let mut tables = self.tables.write().await;
        let comment = Comment {
            id: tables.next_comment_id,
            blog_id: new_comment.blog_id,
            user_id: new_comment.user_id,
            comment_text: new_comment.comment_text,
            created_at: Utc::now(),
        };
        tables.next_comment_id += 1;
        tables.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn comments_for_post(&self, blog_id: i32) -> Result<Vec<Comment>, DomainError> {
        let tables = self.tables.read().await;
        let mut comments: Vec<Comment> = tables
            .comments
            .values()
            .filter(|c| c.blog_id == blog_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(comments)
    }

    async fn record_view(&self, view: ViewRecord) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        Ok(tables.views.insert((view.blog_id, view.session_id)))
    }

    async fn count_likes(&self, blog_id: i32) -> Result<i64, DomainError> {
        self.counts_available().await?;
        let tables = self.tables.read().await;
        Ok(tables.likes.iter().filter(|(blog, _)| *blog == blog_id).count() as i64)
    }

    async fn count_views(&self, blog_id: i32) -> Result<i64, DomainError> {
        self.counts_available().await?;
        let tables = self.tables.read().await;
        Ok(tables.views.iter().filter(|(blog, _)| *blog == blog_id).count() as i64)
    }

    async fn count_comments(&self, blog_id: i32) -> Result<i64, DomainError> {
        self.counts_available().await?;
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .values()
            .filter(|c| c.blog_id == blog_id)
            .count() as i64)
    }

    async fn count_posts(&self) -> Result<i64, DomainError> {
        self.counts_available().await?;
        let tables = self.tables.read().await;
        Ok(tables.posts.len() as i64)
    }

    async fn count_all_likes(&self) -> Result<i64, DomainError> {
        self.counts_available().await?;
        let tables = self.tables.read().await;
        Ok(tables.likes.len() as i64)
    }

    async fn count_all_comments(&self) -> Result<i64, DomainError> {
        self.counts_available().await?;
        let tables = self.tables.read().await;
        Ok(tables.comments.len() as i64)
    }
}
