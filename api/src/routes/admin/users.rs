//! Admin user management handlers

use actix_web::{web, HttpResponse};

use bs_core::repositories::{BlogRepository, UserRepository};
use bs_core::services::otp::Mailer;
use bs_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::admin::{AdminActionRequest, AdminQuery, UsersPayload};
use crate::handlers::{bad_request, domain_error_response};

/// GET /api/admin/users?adminId=: all accounts
pub async fn list_users<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    query: web::Query<AdminQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    let admin_id = match query.admin_id {
        Some(admin_id) => admin_id,
        None => return bad_request("Admin id is required"),
    };

    match state.admin_service.list_users(admin_id).await {
        Ok(users) => HttpResponse::Ok().json(ApiResponse::success(
            "Users fetched successfully",
            UsersPayload { users },
        )),
        Err(error) => domain_error_response(&error),
    }
}

/// POST /api/admin/users/{id}/ban
pub async fn ban_user<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    path: web::Path<i32>,
    body: web::Json<AdminActionRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    set_banned(state, path.into_inner(), body.into_inner(), true).await
}

/// POST /api/admin/users/{id}/unban
pub async fn unban_user<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    path: web::Path<i32>,
    body: web::Json<AdminActionRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    set_banned(state, path.into_inner(), body.into_inner(), false).await
}

async fn set_banned<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    user_id: i32,
    request: AdminActionRequest,
    banned: bool,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    let admin_id = match request.admin_id {
        Some(admin_id) => admin_id,
        None => return bad_request("Admin id is required"),
    };

    match state
        .admin_service
        .set_banned(admin_id, user_id, banned)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::ack(if banned {
            "User banned successfully"
        } else {
            "User unbanned successfully"
        })),
        Err(error) => domain_error_response(&error),
    }
}

/// DELETE /api/admin/users/{id}: remove an account and its content
pub async fn delete_user<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    path: web::Path<i32>,
    body: web::Json<AdminActionRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    let admin_id = match body.into_inner().admin_id {
        Some(admin_id) => admin_id,
        None => return bad_request("Admin id is required"),
    };

    match state
        .admin_service
        .delete_account(admin_id, path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::ack("Account deleted successfully")),
        Err(error) => domain_error_response(&error),
    }
}
