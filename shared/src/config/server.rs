//! HTTP server configuration

use serde::{Deserialize, Serialize};

use super::{parse_var_or, var_or, ConfigError};

/// Bind address settings for the HTTP server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host the server binds to
    pub host: String,
    /// Port the server binds to
    pub port: u16,
}

impl ServerConfig {
    /// Load from `SERVER_HOST` / `SERVER_PORT`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: var_or("SERVER_HOST", "127.0.0.1"),
            port: parse_var_or("SERVER_PORT", 5000)?,
        })
    }

    /// The `host:port` string handed to the server's bind call
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}
