//! The OTP verification flow.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::otp_challenge::{OtpChallenge, PendingRegistration};
use crate::domain::entities::user::NewUser;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::auth::password;

use super::config::OtpServiceConfig;
use super::store::{CodeCheck, OtpStore};
use super::traits::Mailer;
use super::types::{IssueOutcome, SignupDetails, VerifyOutcome};

/// Issues and verifies one-time codes for email signup
///
/// Owns the flow end to end: duplicate check, code generation, storage,
/// delivery, verification and the hand-off to account creation. The store
/// is shared with the background sweeper; the mailer and repository are
/// trait objects supplied by the infrastructure layer.
pub struct OtpService<U: UserRepository, M: Mailer> {
    user_repository: Arc<U>,
    mailer: Arc<M>,
    store: Arc<OtpStore>,
    config: OtpServiceConfig,
}

impl<U: UserRepository, M: Mailer> OtpService<U, M> {
    pub fn new(
        user_repository: Arc<U>,
        mailer: Arc<M>,
        store: Arc<OtpStore>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            mailer,
            store,
            config,
        }
    }

    /// Issue a fresh code to an email address
    ///
    /// With `signup` attached this is the full registration flow: the
    /// email must not belong to an existing account, and the signup
    /// details are parked next to the challenge until verification.
    /// Without `signup` the flow only confirms ownership of the address.
    ///
    /// The entry is stored before delivery and deliberately not rolled
    /// back if delivery fails: a redundant re-issue replaces it and
    /// restarts the window.
    pub async fn issue(
        &self,
        email: &str,
        signup: Option<SignupDetails>,
    ) -> DomainResult<IssueOutcome> {
        if !self.mailer.is_valid_recipient(email) {
            return Err(DomainError::validation("Invalid email address format"));
        }

        if signup.is_some() && self.user_repository.find_by_email(email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let challenge = OtpChallenge::new();
        let code = challenge.code.clone();
        let registration = signup.map(|details| {
            PendingRegistration::new(details.full_name, email.to_string(), details.password)
        });

        self.store.put(email, challenge, registration);
        info!(email, event = "otp_issued", "Stored verification challenge");

        if let Err(reason) = self.mailer.send_verification_code(email, &code).await {
            warn!(
                email,
                reason,
                event = "otp_delivery_failed",
                "Verification mail was not delivered"
            );
            return Err(AuthError::EmailDeliveryFailed.into());
        }

        Ok(IssueOutcome {
            email: email.to_string(),
        })
    }

    /// Verify a submitted code
    ///
    /// On a match with a registration attached, the raw password is
    /// hashed and the account persisted; the store entries are already
    /// gone by then, so a persistence failure cannot be retried against
    /// the same code; the user must request a new one.
    pub async fn verify(&self, email: &str, submitted_code: &str) -> DomainResult<VerifyOutcome> {
        let verdict = self.store.check_code(
            email,
            submitted_code,
            chrono::Utc::now(),
            self.config.ttl(),
            self.config.max_attempts,
        );

        match verdict {
            CodeCheck::Missing => Err(AuthError::OtpNotFound.into()),
            CodeCheck::Expired => {
                info!(email, event = "otp_expired", "Challenge outlived its window");
                Err(AuthError::OtpExpired.into())
            }
            CodeCheck::Exhausted => {
                warn!(
                    email,
                    event = "otp_attempts_exhausted",
                    "Attempt budget spent"
                );
                Err(AuthError::TooManyAttempts.into())
            }
            CodeCheck::Mismatch { attempts } => {
                info!(
                    email,
                    attempts,
                    event = "otp_mismatch",
                    "Wrong code submitted"
                );
                Err(AuthError::InvalidOtp.into())
            }
            CodeCheck::Match { registration: None } => {
                info!(email, event = "otp_confirmed", "Email ownership confirmed");
                Ok(VerifyOutcome::Confirmed)
            }
            CodeCheck::Match {
                registration: Some(registration),
            } => {
                let password_hash = password::hash(&registration.raw_password)?;
                let created = self
                    .user_repository
                    .create(NewUser {
                        name: registration.full_name,
                        email: registration.email,
                        password_hash,
                    })
                    .await?;
                info!(
                    email,
                    user_id = created.id,
                    event = "account_created",
                    "Signup verified and account persisted"
                );
                Ok(VerifyOutcome::Registered(created.public()))
            }
        }
    }
}
