//! Domain-specific error types.
//!
//! Every error a service can produce is recovered at the request boundary
//! and turned into a JSON envelope plus an HTTP status; nothing here is
//! process-fatal.

use thiserror::Error;

/// Authentication and OTP flow errors
///
/// The display strings are the exact messages the API returns to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User with this email already exists")]
    UserAlreadyExists,

    #[error("Failed to send OTP. Please try again.")]
    EmailDeliveryFailed,

    #[error("OTP expired or not found. Please request a new OTP.")]
    OtpNotFound,

    #[error("OTP has expired. Please request a new OTP.")]
    OtpExpired,

    #[error("Too many failed attempts. Please request a new OTP.")]
    TooManyAttempts,

    #[error("Invalid OTP. Please try again.")]
    InvalidOtp,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("This account has been banned")]
    AccountBanned,

    #[error("Admin privileges required")]
    InsufficientPermissions,
}

impl AuthError {
    /// Stable machine-readable code for each variant
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::UserAlreadyExists => "USER_ALREADY_EXISTS",
            AuthError::EmailDeliveryFailed => "EMAIL_DELIVERY_FAILED",
            AuthError::OtpNotFound => "OTP_NOT_FOUND",
            AuthError::OtpExpired => "OTP_EXPIRED",
            AuthError::TooManyAttempts => "TOO_MANY_ATTEMPTS",
            AuthError::InvalidOtp => "INVALID_OTP",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::AccountBanned => "ACCOUNT_BANNED",
            AuthError::InsufficientPermissions => "INSUFFICIENT_PERMISSIONS",
        }
    }
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl DomainError {
    /// Convenience constructor for validation failures
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    /// Convenience constructor for missing resources
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Convenience constructor for persistence failures
    pub fn database(message: impl Into<String>) -> Self {
        DomainError::Database {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_messages_match_api_contract() {
        assert_eq!(
            AuthError::UserAlreadyExists.to_string(),
            "User with this email already exists"
        );
        assert_eq!(
            AuthError::OtpNotFound.to_string(),
            "OTP expired or not found. Please request a new OTP."
        );
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }

    #[test]
    fn auth_error_passes_through_domain_error() {
        let error: DomainError = AuthError::InvalidOtp.into();
        assert_eq!(error.to_string(), "Invalid OTP. Please try again.");
        assert!(matches!(error, DomainError::Auth(AuthError::InvalidOtp)));
    }

    #[test]
    fn codes_are_unique() {
        let all = [
            AuthError::UserAlreadyExists,
            AuthError::EmailDeliveryFailed,
            AuthError::OtpNotFound,
            AuthError::OtpExpired,
            AuthError::TooManyAttempts,
            AuthError::InvalidOtp,
            AuthError::InvalidCredentials,
            AuthError::AccountBanned,
            AuthError::InsufficientPermissions,
        ];
        let codes: std::collections::HashSet<_> = all.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), all.len());
    }
}
