//! Outbound email delivery

mod mock_mailer;
mod smtp_mailer;

pub use mock_mailer::MockMailer;
pub use smtp_mailer::SmtpMailer;

use thiserror::Error;

/// Errors building the SMTP transport at startup
#[derive(Debug, Error)]
pub enum MailerError {
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("Invalid sender mailbox: {0}")]
    Sender(String),
}
