//! Configuration management.
//!
//! Every config struct is populated from process environment variables at
//! startup. Missing optional values fall back to development defaults;
//! missing required values (the database URL, SMTP credentials) surface as
//! a [`ConfigError`] so the binary can refuse to start.

mod database;
mod environment;
mod otp;
mod server;
mod smtp;

pub use database::DatabaseConfig;
pub use environment::Environment;
pub use otp::OtpConfig;
pub use server::ServerConfig;
pub use smtp::SmtpConfig;

use thiserror::Error;

/// Errors raised while reading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: String, value: String },
}

/// Read a required environment variable
pub(crate) fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name.to_string()))
}

/// Read an optional environment variable, falling back to a default
pub(crate) fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Read an optional environment variable and parse it
pub(crate) fn parse_var_or<T: std::str::FromStr>(
    name: &str,
    default: T,
) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.to_string(),
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}
