//! Login service.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::user::AuthenticatedUser;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;

use super::password;

/// Password login against persisted accounts
pub struct AuthService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Authenticate an email/password pair
    ///
    /// Unknown email and wrong password collapse into the same
    /// `InvalidCredentials` answer so the endpoint does not leak which
    /// addresses are registered. Banned accounts are rejected after the
    /// credential check; the admin flag travels in the success payload.
    pub async fn login(&self, email: &str, plaintext: &str) -> DomainResult<AuthenticatedUser> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        if !password::verify(plaintext, &user.password_hash)? {
            info!(email, event = "login_rejected", "Wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        if user.banned {
            warn!(
                email,
                user_id = user.id,
                event = "login_banned",
                "Banned account attempted login"
            );
            return Err(AuthError::AccountBanned.into());
        }

        info!(email, user_id = user.id, event = "login_ok", "Login successful");
        Ok(user.authenticated())
    }
}
