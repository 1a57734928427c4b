//! Input and result types for the OTP service

use crate::domain::entities::user::PublicUser;

/// Signup details attached to a challenge in the full registration flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupDetails {
    pub full_name: String,
    pub password: String,
}

/// Result of issuing a code
///
/// Carries only the acknowledged email; the code itself never travels
/// back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueOutcome {
    pub email: String,
}

/// Result of a successful verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Full flow: the account was created
    Registered(PublicUser),
    /// Verify-only flow: the email is confirmed, nothing was persisted
    Confirmed,
}
