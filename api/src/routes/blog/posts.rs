//! Post CRUD handlers

use actix_web::{web, HttpResponse};

use bs_core::repositories::{BlogRepository, UserRepository};
use bs_core::services::otp::Mailer;
use bs_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::blog::{
    BlogPayload, BlogWithStatsPayload, BlogsPayload, CreatePostRequest, DeletePostRequest,
};
use crate::dto::non_empty;
use crate::handlers::{bad_request, domain_error_response};

/// GET /api/blogs: all posts with their counters
pub async fn list_posts<U, B, M>(state: web::Data<AppState<U, B, M>>) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    match state.blog_service.list_posts().await {
        Ok(blogs) => HttpResponse::Ok().json(ApiResponse::success(
            "Blogs fetched successfully",
            BlogsPayload { blogs },
        )),
        Err(error) => domain_error_response(&error),
    }
}

/// POST /api/blogs: create a post
pub async fn create_post<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    body: web::Json<CreatePostRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    let request = body.into_inner();
    let (title, description, category, author_id) = match (
        non_empty(request.title),
        non_empty(request.description),
        non_empty(request.category),
        request.author_id,
    ) {
        (Some(title), Some(description), Some(category), Some(author_id)) => {
            (title, description, category, author_id)
        }
        _ => return bad_request("Title, description, category and author are required"),
    };

    match state
        .blog_service
        .create_post(&title, &description, &category, author_id)
        .await
    {
        Ok(blog) => HttpResponse::Ok().json(ApiResponse::success(
            "Blog created successfully",
            BlogPayload { blog },
        )),
        Err(error) => domain_error_response(&error),
    }
}

/// GET /api/blogs/{id}: one post with its counters
pub async fn get_post<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    path: web::Path<i32>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    match state.blog_service.get_post(path.into_inner()).await {
        Ok(blog) => HttpResponse::Ok().json(ApiResponse::success(
            "Blog fetched successfully",
            BlogWithStatsPayload { blog },
        )),
        Err(error) => domain_error_response(&error),
    }
}

/// DELETE /api/blogs/{id}: delete an own post
pub async fn delete_post<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    path: web::Path<i32>,
    body: web::Json<DeletePostRequest>,
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
        .delete_post(path.into_inner(), user_id)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::ack("Blog deleted successfully")),
        Err(error) => domain_error_response(&error),
    }
}
