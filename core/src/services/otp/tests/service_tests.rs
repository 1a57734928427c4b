//! End-to-end scenarios for the OTP verification flow

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::otp_challenge::OtpChallenge;
use crate::errors::{AuthError, DomainError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::auth::password;
use crate::services::otp::{
    OtpService, OtpServiceConfig, OtpStore, SignupDetails, VerifyOutcome,
};

use super::mocks::CapturingMailer;

struct Fixture {
    repo: Arc<MockUserRepository>,
    mailer: Arc<CapturingMailer>,
    store: Arc<OtpStore>,
    service: OtpService<MockUserRepository, CapturingMailer>,
}

fn fixture() -> Fixture {
    let repo = Arc::new(MockUserRepository::new());
    let mailer = Arc::new(CapturingMailer::new());
    let store = Arc::new(OtpStore::new());
    let service = OtpService::new(
        Arc::clone(&repo),
        Arc::clone(&mailer),
        Arc::clone(&store),
        OtpServiceConfig::default(),
    );
    Fixture {
        repo,
        mailer,
        store,
        service,
    }
}

fn signup() -> SignupDetails {
    SignupDetails {
        full_name: "Ada Lovelace".to_string(),
        password: "analytical-engine".to_string(),
    }
}

#[tokio::test]
async fn issue_stores_challenge_and_delivers_code() {
    let f = fixture();
    let outcome = f.service.issue("a@x.com", Some(signup())).await.unwrap();
    assert_eq!(outcome.email, "a@x.com");

    let stored = f.store.challenge("a@x.com").unwrap();
    assert_eq!(f.mailer.last_code_for("a@x.com").await.unwrap(), stored.code);
    assert_eq!(f.store.registration_count(), 1);
}

#[tokio::test]
async fn issuing_twice_replaces_the_challenge() {
    let f = fixture();
    f.service.issue("a@x.com", Some(signup())).await.unwrap();

    // burn an attempt so the reset is observable
    let _ = f.service.verify("a@x.com", "000000").await;
    assert_eq!(f.store.challenge("a@x.com").unwrap().attempts, 1);

    f.service.issue("a@x.com", Some(signup())).await.unwrap();
    let stored = f.store.challenge("a@x.com").unwrap();
    assert_eq!(stored.attempts, 0);
    assert_eq!(f.store.challenge_count(), 1);
    assert_eq!(f.mailer.sent().await.len(), 2);
}

#[tokio::test]
async fn issue_rejects_already_registered_email_before_generating_a_code() {
    let f = fixture();
    f.repo
        .create(crate::domain::entities::user::NewUser {
            name: "Ada".to_string(),
            email: "b@x.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await
        .unwrap();

    let error = f.service.issue("b@x.com", Some(signup())).await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Auth(AuthError::UserAlreadyExists)
    ));
    assert!(f.mailer.sent().await.is_empty());
    assert!(!f.store.contains("b@x.com"));
}

#[tokio::test]
async fn verify_only_issue_skips_the_duplicate_check() {
    let f = fixture();
    f.repo
        .create(crate::domain::entities::user::NewUser {
            name: "Ada".to_string(),
            email: "b@x.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await
        .unwrap();

    f.service.issue("b@x.com", None).await.unwrap();
    assert_eq!(f.store.challenge_count(), 1);
    assert_eq!(f.store.registration_count(), 0);
}

#[tokio::test]
async fn issue_rejects_malformed_email() {
    let f = fixture();
    let error = f.service.issue("not-an-email", Some(signup())).await.unwrap_err();
    assert!(matches!(error, DomainError::Validation { .. }));
    assert!(!f.store.contains("not-an-email"));
}

#[tokio::test]
async fn delivery_failure_reports_error_but_keeps_the_entry() {
    let f = fixture();
    f.mailer.set_failing(true).await;

    let error = f.service.issue("a@x.com", Some(signup())).await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Auth(AuthError::EmailDeliveryFailed)
    ));
    // lenient by design: the window is consumed even though no mail went out
    assert!(f.store.contains("a@x.com"));
}

#[tokio::test]
async fn full_signup_scenario_two_wrong_codes_then_success() {
    let f = fixture();
    f.service.issue("a@x.com", Some(signup())).await.unwrap();
    let code = f.mailer.last_code_for("a@x.com").await.unwrap();

    for expected_attempts in 1..=2u32 {
        let error = f.service.verify("a@x.com", "000000").await.unwrap_err();
        assert!(matches!(error, DomainError::Auth(AuthError::InvalidOtp)));
        assert_eq!(
            f.store.challenge("a@x.com").unwrap().attempts,
            expected_attempts
        );
    }

    let outcome = f.service.verify("a@x.com", &code).await.unwrap();
    let user = match outcome {
        VerifyOutcome::Registered(user) => user,
        other => panic!("expected registration, got {:?}", other),
    };
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.email, "a@x.com");

    // entries cleared, account persisted with a working password
    assert!(!f.store.contains("a@x.com"));
    let persisted = f.repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert!(password::verify("analytical-engine", &persisted.password_hash).unwrap());
}

#[tokio::test]
async fn correct_code_succeeds_exactly_once() {
    let f = fixture();
    f.service.issue("a@x.com", Some(signup())).await.unwrap();
    let code = f.mailer.last_code_for("a@x.com").await.unwrap();

    f.service.verify("a@x.com", &code).await.unwrap();
    let replay = f.service.verify("a@x.com", &code).await.unwrap_err();
    assert!(matches!(replay, DomainError::Auth(AuthError::OtpNotFound)));
}

#[tokio::test]
async fn third_wrong_submission_is_too_many_attempts_and_fourth_finds_nothing() {
    let f = fixture();
    f.service.issue("a@x.com", Some(signup())).await.unwrap();
    let code = f.mailer.last_code_for("a@x.com").await.unwrap();

    for _ in 0..2 {
        let error = f.service.verify("a@x.com", "000000").await.unwrap_err();
        assert!(matches!(error, DomainError::Auth(AuthError::InvalidOtp)));
    }
    let third = f.service.verify("a@x.com", "000000").await.unwrap_err();
    assert!(matches!(
        third,
        DomainError::Auth(AuthError::TooManyAttempts)
    ));
    assert!(!f.store.contains("a@x.com"));

    let fourth = f.service.verify("a@x.com", &code).await.unwrap_err();
    assert!(matches!(fourth, DomainError::Auth(AuthError::OtpNotFound)));
}

#[tokio::test]
async fn expired_challenge_fails_even_with_matching_code_and_no_attempts() {
    let f = fixture();
    f.service.issue("a@x.com", Some(signup())).await.unwrap();
    let code = f.mailer.last_code_for("a@x.com").await.unwrap();

    // age the stored challenge past 300000 ms
    let mut stale = f.store.challenge("a@x.com").unwrap();
    stale.issued_at = Utc::now() - Duration::milliseconds(300_001);
    let registration = crate::domain::entities::otp_challenge::PendingRegistration::new(
        "Ada Lovelace".to_string(),
        "a@x.com".to_string(),
        "analytical-engine".to_string(),
    );
    f.store.put("a@x.com", stale, Some(registration));

    let error = f.service.verify("a@x.com", &code).await.unwrap_err();
    assert!(matches!(error, DomainError::Auth(AuthError::OtpExpired)));
    assert!(!f.store.contains("a@x.com"));
}

#[tokio::test]
async fn verify_unknown_email_reports_not_found() {
    let f = fixture();
    let error = f.service.verify("nobody@x.com", "123456").await.unwrap_err();
    assert!(matches!(error, DomainError::Auth(AuthError::OtpNotFound)));
}

#[tokio::test]
async fn duplicate_race_at_creation_surfaces_as_duplicate_user() {
    let f = fixture();
    f.service.issue("a@x.com", Some(signup())).await.unwrap();
    let code = f.mailer.last_code_for("a@x.com").await.unwrap();

    // the same email gets registered while the code is in flight
    f.repo
        .create(crate::domain::entities::user::NewUser {
            name: "Racer".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await
        .unwrap();

    let error = f.service.verify("a@x.com", &code).await.unwrap_err();
    assert!(matches!(
        error,
        DomainError::Auth(AuthError::UserAlreadyExists)
    ));
    // entries are gone; there is no re-verify without a fresh issue
    assert!(!f.store.contains("a@x.com"));
}

#[tokio::test]
async fn persistence_failure_surfaces_after_entries_are_consumed() {
    let f = fixture();
    f.service.issue("a@x.com", Some(signup())).await.unwrap();
    let code = f.mailer.last_code_for("a@x.com").await.unwrap();

    f.repo.fail_next_call().await;
    let error = f.service.verify("a@x.com", &code).await.unwrap_err();
    assert!(matches!(error, DomainError::Database { .. }));
    assert!(!f.store.contains("a@x.com"));
}

#[tokio::test]
async fn verify_only_flow_returns_bare_confirmation() {
    let f = fixture();
    f.service.issue("a@x.com", None).await.unwrap();
    let code = f.mailer.last_code_for("a@x.com").await.unwrap();

    let outcome = f.service.verify("a@x.com", &code).await.unwrap();
    assert_eq!(outcome, VerifyOutcome::Confirmed);
    assert_eq!(f.repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn reissue_after_exhaustion_reenters_pending_with_fresh_budget() {
    let f = fixture();
    f.service.issue("a@x.com", Some(signup())).await.unwrap();
    for _ in 0..3 {
        let _ = f.service.verify("a@x.com", "000000").await;
    }
    assert!(!f.store.contains("a@x.com"));

    f.service.issue("a@x.com", Some(signup())).await.unwrap();
    let code = f.mailer.last_code_for("a@x.com").await.unwrap();
    let outcome = f.service.verify("a@x.com", &code).await.unwrap();
    assert!(matches!(outcome, VerifyOutcome::Registered(_)));
}
