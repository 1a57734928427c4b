//! Blog post, comment and interaction entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub author_id: i32,
    /// Denormalized author name, captured at creation time
    pub author_name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a new post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub description: String,
    pub category: String,
    pub author_id: i32,
    pub author_name: String,
}

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub blog_id: i32,
    pub user_id: i32,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub blog_id: i32,
    pub user_id: i32,
    pub comment_text: String,
}

/// A view event, deduplicated per (blog, session)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRecord {
    pub blog_id: i32,
    pub user_id: Option<i32>,
    pub ip_address: Option<String>,
    pub session_id: String,
    pub user_agent: Option<String>,
}

/// Interaction counters for a single post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogStats {
    pub likes: i64,
    pub views: i64,
    pub comments: i64,
}

/// A post decorated with its interaction counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWithStats {
    #[serde(flatten)]
    pub post: BlogPost,
    #[serde(flatten)]
    pub stats: BlogStats,
}

/// Aggregated author dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_blogs: i64,
    pub total_views: i64,
    pub total_likes: i64,
    pub total_comments: i64,
    pub blogs: Vec<PostWithStats>,
}
