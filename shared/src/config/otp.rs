//! OTP flow tuning

use serde::{Deserialize, Serialize};

use super::{parse_var_or, ConfigError};

/// Tunables for the OTP verification flow
///
/// Defaults match the platform behavior: codes live for five minutes,
/// three failed attempts exhaust a code, and the background sweep runs on
/// the same five-minute cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpConfig {
    /// Minutes before an issued code expires
    pub expiry_minutes: i64,
    /// Failed verification attempts allowed per code
    pub max_attempts: u32,
    /// Seconds between background sweep runs
    pub sweep_interval_seconds: u64,
}

impl OtpConfig {
    /// Load from `OTP_*` environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            expiry_minutes: parse_var_or("OTP_EXPIRY_MINUTES", 5)?,
            max_attempts: parse_var_or("OTP_MAX_ATTEMPTS", 3)?,
            sweep_interval_seconds: parse_var_or("OTP_SWEEP_INTERVAL_SECONDS", 300)?,
        })
    }
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: 5,
            max_attempts: 3,
            sweep_interval_seconds: 300,
        }
    }
}
