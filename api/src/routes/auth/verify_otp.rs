//! Handler for POST /api/verify-otp

use actix_web::{web, HttpResponse};

use bs_core::repositories::{BlogRepository, UserRepository};
use bs_core::services::otp::{Mailer, VerifyOutcome};
use bs_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::{UserPayload, VerifyOtpRequest};
use crate::dto::non_empty;
use crate::handlers::{bad_request, domain_error_response_or};

/// Verify a submitted code and, in the signup flow, create the account
pub async fn verify_otp<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    body: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    let request = body.into_inner();

    let (email, otp) = match (non_empty(request.email), non_empty(request.otp)) {
        (Some(email), Some(otp)) => (email, otp),
        _ => return bad_request("Email and OTP are required"),
    };

    match state.otp_service.verify(&email, &otp).await {
        Ok(VerifyOutcome::Registered(user)) => HttpResponse::Ok().json(ApiResponse::success(
            "Account created successfully",
            UserPayload { user },
        )),
        Ok(VerifyOutcome::Confirmed) => {
            HttpResponse::Ok().json(ApiResponse::ack("Email verified successfully"))
        }
        Err(error) => {
            domain_error_response_or(&error, "Failed to create account. Please try again.")
        }
    }
}
