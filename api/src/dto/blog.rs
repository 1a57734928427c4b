//! Blog endpoint DTOs

use serde::{Deserialize, Serialize};

use bs_core::domain::entities::blog::{BlogPost, Comment, PostWithStats};

/// POST /api/blogs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub author_id: Option<i32>,
}

/// DELETE /api/blogs/{id}
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostRequest {
    pub user_id: Option<i32>,
}

/// POST /api/blogs/{id}/like
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub user_id: Option<i32>,
}

/// POST /api/blogs/{id}/comments
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub user_id: Option<i32>,
    pub comment_text: Option<String>,
}

/// POST /api/blogs/{id}/view
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRequest {
    pub user_id: Option<i32>,
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BlogsPayload {
    pub blogs: Vec<PostWithStats>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BlogPayload {
    pub blog: BlogPost,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BlogWithStatsPayload {
    pub blog: PostWithStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LikePayload {
    pub liked: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentPayload {
    pub comment: Comment,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentsPayload {
    pub comments: Vec<Comment>,
}
