//! OTP signup verification
//!
//! The one component of the platform with temporal state: pending
//! challenges and unconfirmed registrations live in an in-memory
//! [`store::OtpStore`] until they are verified, expire, or exhaust their
//! attempt budget. [`service::OtpService`] drives the flow and
//! [`sweeper::OtpSweeper`] reclaims abandoned entries in the background.

pub mod config;
pub mod service;
pub mod store;
pub mod sweeper;
pub mod traits;
pub mod types;

pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use store::{CodeCheck, OtpStore};
pub use sweeper::OtpSweeper;
pub use traits::Mailer;
pub use types::{IssueOutcome, SignupDetails, VerifyOutcome};

#[cfg(test)]
mod tests;
