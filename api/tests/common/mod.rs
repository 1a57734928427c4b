//! Shared fixture: the full application over in-memory implementations

use actix_web::web;
use std::sync::Arc;

use bs_api::app::AppState;
use bs_core::repositories::{MockBlogRepository, MockUserRepository};
use bs_core::services::admin::AdminService;
use bs_core::services::auth::AuthService;
use bs_core::services::blog::BlogService;
use bs_core::services::otp::{OtpService, OtpServiceConfig, OtpStore};
use bs_infra::email::MockMailer;

pub type TestState = AppState<MockUserRepository, MockBlogRepository, MockMailer>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub mailer: Arc<MockMailer>,
    pub user_repository: Arc<MockUserRepository>,
    pub blog_repository: Arc<MockBlogRepository>,
    pub otp_store: Arc<OtpStore>,
}

pub fn test_context() -> TestContext {
    let user_repository = Arc::new(MockUserRepository::new());
    let blog_repository = Arc::new(MockBlogRepository::new());
    let mailer = Arc::new(MockMailer::new());
    let otp_store = Arc::new(OtpStore::new());
    let config = OtpServiceConfig::default();

    let state = web::Data::new(AppState {
        otp_service: Arc::new(OtpService::new(
            Arc::clone(&user_repository),
            Arc::clone(&mailer),
            Arc::clone(&otp_store),
            config,
        )),
        auth_service: Arc::new(AuthService::new(Arc::clone(&user_repository))),
        blog_service: Arc::new(BlogService::new(
            Arc::clone(&blog_repository),
            Arc::clone(&user_repository),
        )),
        admin_service: Arc::new(AdminService::new(
            Arc::clone(&user_repository),
            Arc::clone(&blog_repository),
        )),
    });

    TestContext {
        state,
        mailer,
        user_repository,
        blog_repository,
        otp_store,
    }
}

/// Seed a user directly, with a working (low-cost) password hash
pub async fn seed_user(
    repo: &MockUserRepository,
    id: i32,
    email: &str,
    password: &str,
    is_admin: bool,
    banned: bool,
) {
    repo.insert_raw(bs_core::domain::entities::user::User {
        id,
        name: format!("user-{}", id),
        email: email.to_string(),
        password_hash: bcrypt::hash(password, 4).unwrap(),
        banned,
        banned_at: banned.then(chrono::Utc::now),
        is_admin,
        created_at: chrono::Utc::now(),
    })
    .await;
}
