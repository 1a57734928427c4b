//! Handler for POST /api/send-otp

use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use bs_core::repositories::{BlogRepository, UserRepository};
use bs_core::services::otp::{Mailer, SignupDetails};
use bs_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::{EmailPayload, SendOtpRequest};
use crate::dto::non_empty;
use crate::handlers::{bad_request, domain_error_response};

/// Issue a verification code to an email address
///
/// With `fullName` and `password` in the body this starts the full
/// signup flow; with neither it only verifies ownership of the address.
/// The code travels by mail, never in the response.
pub async fn send_otp<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    body: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    let request = body.into_inner();

    // an absent email is a missing field, a present-but-malformed one a
    // format error; validate() skips None so the order matters here
    if request.validate().is_err() {
        return bad_request("Invalid email address format");
    }

    let email = match non_empty(request.email) {
        Some(email) => email,
        None => return bad_request("Email is required"),
    };

    let signup = match (non_empty(request.full_name), non_empty(request.password)) {
        (Some(full_name), Some(password)) => Some(SignupDetails {
            full_name,
            password,
        }),
        (None, None) => None,
        _ => return bad_request("Full name and password are required together"),
    };

    info!(%email, signup = signup.is_some(), "Processing send-otp request");

    match state.otp_service.issue(&email, signup).await {
        Ok(outcome) => HttpResponse::Ok().json(ApiResponse::success(
            "OTP sent successfully",
            EmailPayload {
                email: outcome.email,
            },
        )),
        Err(error) => domain_error_response(&error),
    }
}
