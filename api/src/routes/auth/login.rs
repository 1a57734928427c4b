//! Handler for POST /api/login

use actix_web::{web, HttpResponse};

use bs_core::repositories::{BlogRepository, UserRepository};
use bs_core::services::otp::Mailer;
use bs_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::{LoginPayload, LoginRequest};
use crate::dto::non_empty;
use crate::handlers::{bad_request, domain_error_response_or};

/// Authenticate an email/password pair
pub async fn login<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    body: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    let request = body.into_inner();

    let (email, password) = match (non_empty(request.email), non_empty(request.password)) {
        (Some(email), Some(password)) => (email, password),
        _ => return bad_request("Email and password are required"),
    };

    match state.auth_service.login(&email, &password).await {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::success(
            "Login successful",
            LoginPayload { user },
        )),
        Err(error) => domain_error_response_or(&error, "Login failed. Please try again."),
    }
}
