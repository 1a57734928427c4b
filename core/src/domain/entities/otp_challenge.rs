//! OTP challenge and pending registration entities for email signup
//! verification.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Failed verification attempts allowed per code
pub const MAX_ATTEMPTS: u32 = 3;

/// Minutes before an issued code expires
pub const DEFAULT_EXPIRY_MINUTES: i64 = 5;

/// A one-time code issued to an email address
///
/// At most one challenge exists per email at any time; issuing again
/// replaces the previous challenge wholesale (fresh code, attempts back
/// to zero).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpChallenge {
    /// The 6-digit verification code
    pub code: String,

    /// When the code was issued
    pub issued_at: DateTime<Utc>,

    /// Failed verification attempts so far
    pub attempts: u32,
}

impl OtpChallenge {
    /// Create a challenge with a fresh random code, stamped now
    pub fn new() -> Self {
        Self {
            code: Self::generate_code(),
            issued_at: Utc::now(),
            attempts: 0,
        }
    }

    /// Generate a 6-digit code
    ///
    /// Uniform draw over [100000, 999999]; the floor keeps every code at
    /// six digits with no leading-zero truncation.
    pub fn generate_code() -> String {
        let code: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
        code.to_string()
    }

    /// Age of the challenge at `now`
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        now - self.issued_at
    }

    /// Whether the challenge is past its lifetime at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age_at(now) > ttl
    }

    /// Whether the attempt budget is already spent
    pub fn attempts_exhausted(&self, max_attempts: u32) -> bool {
        self.attempts >= max_attempts
    }

    /// Exact string comparison against a submitted code
    pub fn matches(&self, submitted: &str) -> bool {
        self.code == submitted
    }
}

impl Default for OtpChallenge {
    fn default() -> Self {
        Self::new()
    }
}

/// Signup details held until the email address is verified
///
/// Exists if and only if the matching [`OtpChallenge`] was issued with
/// registration details; both records are removed together on success,
/// expiry or attempt exhaustion. The password stays raw here; it is only
/// hashed once verification succeeds and the account is materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRegistration {
    pub full_name: String,
    pub email: String,
    pub raw_password: String,
    pub created_at: DateTime<Utc>,
}

impl PendingRegistration {
    pub fn new(full_name: String, email: String, raw_password: String) -> Self {
        Self {
            full_name,
            email,
            raw_password,
            created_at: Utc::now(),
        }
    }
}
