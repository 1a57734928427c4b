//! Login scenarios against the mock repository

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};
use crate::repositories::MockUserRepository;
use crate::services::auth::AuthService;

async fn seed_user(repo: &MockUserRepository, email: &str, plaintext: &str, banned: bool) -> User {
    let user = User {
        id: 1,
        name: "Ada".to_string(),
        email: email.to_string(),
        password_hash: bcrypt::hash(plaintext, 4).unwrap(),
        banned,
        banned_at: banned.then(Utc::now),
        is_admin: false,
        created_at: Utc::now(),
    };
    repo.insert_raw(user.clone()).await;
    user
}

fn service(repo: Arc<MockUserRepository>) -> AuthService<MockUserRepository> {
    AuthService::new(repo)
}

#[tokio::test]
async fn login_round_trip_with_registered_password() {
    let repo = Arc::new(MockUserRepository::new());
    seed_user(&repo, "ada@x.com", "correct horse", false).await;

    let auth = service(Arc::clone(&repo));
    let user = auth.login("ada@x.com", "correct horse").await.unwrap();
    assert_eq!(user.email, "ada@x.com");
    assert!(!user.is_admin);
}

#[tokio::test]
async fn login_rejects_any_other_plaintext() {
    let repo = Arc::new(MockUserRepository::new());
    seed_user(&repo, "ada@x.com", "correct horse", false).await;

    let auth = service(Arc::clone(&repo));
    let error = auth.login("ada@x.com", "battery staple").await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn unknown_email_is_indistinguishable_from_wrong_password() {
    let repo = Arc::new(MockUserRepository::new());
    let auth = service(repo);
    let error = auth.login("nobody@x.com", "whatever").await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn banned_account_is_rejected_after_credential_check() {
    let repo = Arc::new(MockUserRepository::new());
    seed_user(&repo, "banned@x.com", "pw", true).await;

    let auth = service(Arc::clone(&repo));
    let error = auth.login("banned@x.com", "pw").await.unwrap_err();
    assert!(matches!(error, DomainError::Auth(AuthError::AccountBanned)));

    // the wrong password still reads as bad credentials, not as a ban
    let error = auth.login("banned@x.com", "nope").await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn admin_flag_travels_in_the_payload() {
    let repo = Arc::new(MockUserRepository::new());
    let mut user = seed_user(&repo, "root@x.com", "pw", false).await;
    user.is_admin = true;
    repo.insert_raw(user).await;

    let auth = service(Arc::clone(&repo));
    let authenticated = auth.login("root@x.com", "pw").await.unwrap();
    assert!(authenticated.is_admin);
}
