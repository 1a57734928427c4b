//! Trait for email delivery integration

use async_trait::async_trait;

/// Outbound mail contract consumed by the OTP service
///
/// `send_verification_code` must complete (or fail) before `issue`
/// returns; there is no fire-and-forget path.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a verification code to the recipient
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), String>;

    /// Whether the recipient address is deliverable at all
    fn is_valid_recipient(&self, email: &str) -> bool;
}
