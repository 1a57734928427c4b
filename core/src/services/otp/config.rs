//! Configuration for the OTP service

use chrono::Duration;

use crate::domain::entities::otp_challenge::{DEFAULT_EXPIRY_MINUTES, MAX_ATTEMPTS};

/// Policy knobs for the OTP flow
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Minutes before an issued code expires
    pub expiry_minutes: i64,
    /// Failed verification attempts allowed per code
    pub max_attempts: u32,
}

impl OtpServiceConfig {
    /// Code lifetime as a chrono duration
    pub fn ttl(&self) -> Duration {
        Duration::minutes(self.expiry_minutes)
    }
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: DEFAULT_EXPIRY_MINUTES,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl From<bs_shared::config::OtpConfig> for OtpServiceConfig {
    fn from(config: bs_shared::config::OtpConfig) -> Self {
        Self {
            expiry_minutes: config.expiry_minutes,
            max_attempts: config.max_attempts,
        }
    }
}
