//! SMTP relay configuration for OTP email delivery

use serde::{Deserialize, Serialize};

use super::{require_var, var_or, ConfigError};

/// Credentials and identity for the outbound mail relay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// SMTP relay hostname, e.g. `smtp.gmail.com`
    pub host: String,
    /// Relay account username
    pub username: String,
    /// Relay account password (app password for Gmail-style relays)
    pub password: String,
    /// Address the verification mail is sent from
    pub from_address: String,
    /// Display name used in the `From` header
    pub from_name: String,
}

impl SmtpConfig {
    /// Load from `SMTP_*` environment variables
    ///
    /// Host, username and password are required; the sender identity
    /// defaults to the platform mailbox.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: require_var("SMTP_HOST")?,
            username: require_var("SMTP_USERNAME")?,
            password: require_var("SMTP_PASSWORD")?,
            from_address: var_or("SMTP_FROM_ADDRESS", "blogsyte.hub@gmail.com"),
            from_name: var_or("SMTP_FROM_NAME", "Blogsyte Team"),
        })
    }

    /// RFC 5322 mailbox string for the `From` header
    pub fn sender(&self) -> String {
        format!("\"{}\" <{}>", self.from_name, self.from_address)
    }
}
