//! Like, comment and view handlers

use actix_web::{web, HttpRequest, HttpResponse};

use bs_core::domain::entities::blog::ViewRecord;
use bs_core::repositories::{BlogRepository, UserRepository};
use bs_core::services::otp::Mailer;
use bs_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::blog::{
    CommentPayload, CommentRequest, CommentsPayload, LikePayload, LikeRequest, ViewRequest,
};
use crate::dto::non_empty;
use crate::handlers::{bad_request, domain_error_response};

/// POST /api/blogs/{id}/like: toggle a like
pub async fn toggle_like<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    path: web::Path<i32>,
    body: web::Json<LikeRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    let user_id = match body.into_inner().user_id {
        Some(user_id) => user_id,
        None => return bad_request("User id is required"),
    };

    match state
        .blog_service
        .toggle_like(path.into_inner(), user_id)
        .await
    {
        Ok(liked) => HttpResponse::Ok().json(ApiResponse::success(
            if liked { "Blog liked" } else { "Like removed" },
            LikePayload { liked },
        )),
        Err(error) => domain_error_response(&error),
    }
}

/// GET /api/blogs/{id}/comments: comments, oldest first
pub async fn list_comments<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    path: web::Path<i32>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    match state.blog_service.comments(path.into_inner()).await {
        Ok(comments) => HttpResponse::Ok().json(ApiResponse::success(
            "Comments fetched successfully",
            CommentsPayload { comments },
        )),
        Err(error) => domain_error_response(&error),
    }
}

/// POST /api/blogs/{id}/comments: add a comment
pub async fn add_comment<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    path: web::Path<i32>,
    body: web::Json<CommentRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    let request = body.into_inner();
    let (user_id, comment_text) = match (request.user_id, non_empty(request.comment_text)) {
        (Some(user_id), Some(comment_text)) => (user_id, comment_text),
        _ => return bad_request("User id and comment text are required"),
    };

    match state
        .blog_service
        .add_comment(path.into_inner(), user_id, &comment_text)
        .await
    {
        Ok(comment) => HttpResponse::Ok().json(ApiResponse::success(
            "Comment added successfully",
            CommentPayload { comment },
        )),
        Err(error) => domain_error_response(&error),
    }
}

/// POST /api/blogs/{id}/view: record a view, deduplicated per session
pub async fn record_view<U, B, M>(
    req: HttpRequest,
    state: web::Data<AppState<U, B, M>>,
    path: web::Path<i32>,
    body: web::Json<ViewRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    let request = body.into_inner();
    let session_id = match non_empty(request.session_id) {
        Some(session_id) => session_id,
        None => return bad_request("Session id is required"),
    };

    let view = ViewRecord {
        blog_id: path.into_inner(),
        user_id: request.user_id,
        ip_address: client_ip(&req),
        session_id,
        user_agent: user_agent(&req),
    };

    match state.blog_service.record_view(view).await {
        // duplicate sessions are absorbed: the answer is the same either way
        Ok(_) => HttpResponse::Ok().json(ApiResponse::ack("View recorded")),
        Err(error) => domain_error_response(&error),
    }
}

/// Client IP, preferring proxy headers over the peer address
fn client_ip(req: &HttpRequest) -> Option<String> {
    if let Some(forwarded) = req.headers().get("X-Forwarded-For") {
        if let Ok(value) = forwarded.to_str() {
            if let Some(first) = value.split(',').next() {
                return Some(first.trim().to_string());
            }
        }
    }
    req.connection_info()
        .peer_addr()
        .map(|addr| addr.to_string())
}

fn user_agent(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("User-Agent")
        .and_then(|ua| ua.to_str().ok())
        .map(|s| s.to_string())
}
