//! Auth endpoint DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use bs_core::domain::entities::user::{AuthenticatedUser, PublicUser};

/// POST /api/send-otp
///
/// `fullName` and `password` together opt into the full signup flow;
/// without them the endpoint only verifies ownership of the address.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpRequest {
    #[validate(email(message = "Invalid email address format"))]
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<String>,
}

/// POST /api/verify-otp
#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: Option<String>,
    pub otp: Option<String>,
}

/// POST /api/login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Payload of a successful send-otp call
#[derive(Debug, Serialize, Deserialize)]
pub struct EmailPayload {
    pub email: String,
}

/// Payload of a successful signup verification
#[derive(Debug, Serialize, Deserialize)]
pub struct UserPayload {
    pub user: PublicUser,
}

/// Payload of a successful login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginPayload {
    pub user: AuthenticatedUser,
}
