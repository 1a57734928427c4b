//! Domain error to HTTP response mapping.
//!
//! Every service error is recovered here into the JSON envelope plus a
//! status from {400, 401, 403, 404, 500}; nothing propagates further.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use tracing::error;

use bs_core::errors::{AuthError, DomainError};
use bs_shared::types::ApiResponse;

/// 400 with the given message
pub fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::error(message))
}

/// Map a domain error to its response
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    respond(error, None)
}

/// Map a domain error to its response, overriding the message of
/// internal failures with a route-specific one
///
/// The platform's 500 answers are intentionally generic ("Failed to
/// create account. Please try again.") while the underlying cause goes
/// to the log only.
pub fn domain_error_response_or(error: &DomainError, internal_message: &str) -> HttpResponse {
    respond(error, Some(internal_message))
}

fn respond(error: &DomainError, internal_message: Option<&str>) -> HttpResponse {
    let status = status_for(error);
    let message = if status.is_server_error() {
        error!(%error, "Request failed");
        internal_message
            .unwrap_or("Something went wrong. Please try again.")
            .to_string()
    } else {
        error.to_string()
    };
    HttpResponse::build(status).json(ApiResponse::<()>::error(message))
}

fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::Auth(auth) => match auth {
            AuthError::UserAlreadyExists
            | AuthError::OtpNotFound
            | AuthError::OtpExpired
            | AuthError::TooManyAttempts
            | AuthError::InvalidOtp => StatusCode::BAD_REQUEST,
            AuthError::EmailDeliveryFailed => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::AccountBanned | AuthError::InsufficientPermissions => {
                StatusCode::FORBIDDEN
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: DomainError) -> StatusCode {
        status_for(&error)
    }

    #[test]
    fn otp_failures_are_bad_requests() {
        for auth in [
            AuthError::UserAlreadyExists,
            AuthError::OtpNotFound,
            AuthError::OtpExpired,
            AuthError::TooManyAttempts,
            AuthError::InvalidOtp,
        ] {
            assert_eq!(status_of(auth.into()), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn login_failures_map_to_401_and_403() {
        assert_eq!(
            status_of(AuthError::InvalidCredentials.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AuthError::AccountBanned.into()),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(AuthError::InsufficientPermissions.into()),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn infrastructure_failures_are_500s() {
        assert_eq!(
            status_of(AuthError::EmailDeliveryFailed.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(DomainError::database("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_and_missing_resources() {
        assert_eq!(
            status_of(DomainError::validation("bad input")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DomainError::not_found("Blog post")),
            StatusCode::NOT_FOUND
        );
    }
}
