//! SMTP delivery of verification codes.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use bs_core::services::otp::Mailer;
use bs_shared::config::SmtpConfig;
use bs_shared::utils::validation::is_valid_email;

use super::MailerError;

/// Mailer backed by an authenticated SMTP relay
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    /// Build the relay transport from configuration
    pub fn new(config: &SmtpConfig) -> Result<Self, MailerError> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .credentials(credentials)
            .build();
        let sender = config
            .sender()
            .parse()
            .map_err(|e| MailerError::Sender(format!("{}", e)))?;
        Ok(Self { transport, sender })
    }

    fn verification_body(code: &str) -> String {
        format!(
            r#"<div style="font-family: Arial, sans-serif; color: #333;">
  <h2 style="color: #4a90e2;">Blogsyte Email Verification</h2>
  <p>Dear User,</p>
  <p>Thank you for signing up on <strong>Blogsyte</strong>.</p>
  <p>Please use the following One-Time Password (OTP) to verify your email address:</p>
  <p style="font-size: 20px; font-weight: bold; color: #4a90e2;">{}</p>
  <p>This code is valid for <strong>5 minutes</strong>. Do not share it with anyone.</p>
  <p>If you did not request this, you can safely ignore this email.</p>
  <br/>
  <p>Best regards,</p>
  <p><strong>Blogsyte Team</strong></p>
</div>"#,
            code
        )
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), String> {
        let recipient: Mailbox = to
            .parse()
            .map_err(|e| format!("Invalid recipient address: {}", e))?;
        let message = Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject("Verify Your Email - Blogsyte OTP Code")
            .header(ContentType::TEXT_HTML)
            .body(Self::verification_body(code))
            .map_err(|e| format!("Failed to build message: {}", e))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("SMTP send failed: {}", e))?;
        info!(to, event = "otp_mail_sent", "Verification mail delivered to relay");
        Ok(())
    }

    fn is_valid_recipient(&self, email: &str) -> bool {
        is_valid_email(email)
    }
}
