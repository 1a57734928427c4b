//! Application state and factory.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use bs_core::repositories::{BlogRepository, UserRepository};
use bs_core::services::admin::AdminService;
use bs_core::services::auth::AuthService;
use bs_core::services::blog::BlogService;
use bs_core::services::otp::{Mailer, OtpService};

use crate::middleware::cors::create_cors;
use crate::routes::{admin, auth, blog};

/// Shared services handed to every handler
///
/// Generic over the repository and mailer traits: the binary wires in
/// Postgres and SMTP, the integration tests wire in the in-memory mocks.
pub struct AppState<U, B, M>
where
    U: UserRepository,
    B: BlogRepository,
    M: Mailer,
{
    pub otp_service: Arc<OtpService<U, M>>,
    pub auth_service: Arc<AuthService<U>>,
    pub blog_service: Arc<BlogService<B, U>>,
    pub admin_service: Arc<AdminService<U, B>>,
}

/// Create and configure the application with all routes
pub fn create_app<U, B, M>(
    app_state: web::Data<AppState<U, B, M>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: Mailer + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(create_cors())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .route("/send-otp", web::post().to(auth::send_otp::<U, B, M>))
                .route("/verify-otp", web::post().to(auth::verify_otp::<U, B, M>))
                .route("/login", web::post().to(auth::login::<U, B, M>))
                .route("/blogs", web::get().to(blog::list_posts::<U, B, M>))
                .route("/blogs", web::post().to(blog::create_post::<U, B, M>))
                .route("/blogs/{id}", web::get().to(blog::get_post::<U, B, M>))
                .route("/blogs/{id}", web::delete().to(blog::delete_post::<U, B, M>))
                .route("/blogs/{id}/like", web::post().to(blog::toggle_like::<U, B, M>))
                .route(
                    "/blogs/{id}/comments",
                    web::get().to(blog::list_comments::<U, B, M>),
                )
                .route(
                    "/blogs/{id}/comments",
                    web::post().to(blog::add_comment::<U, B, M>),
                )
                .route("/blogs/{id}/view", web::post().to(blog::record_view::<U, B, M>))
                .route("/dashboard/{user_id}", web::get().to(blog::dashboard::<U, B, M>))
                .route("/admin/users", web::get().to(admin::list_users::<U, B, M>))
                .route(
                    "/admin/users/{id}/ban",
                    web::post().to(admin::ban_user::<U, B, M>),
                )
                .route(
                    "/admin/users/{id}/unban",
                    web::post().to(admin::unban_user::<U, B, M>),
                )
                .route(
                    "/admin/users/{id}",
                    web::delete().to(admin::delete_user::<U, B, M>),
                )
                .route("/admin/stats", web::get().to(admin::platform_stats::<U, B, M>)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "blogsyte-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "success": false,
        "message": "The requested resource was not found"
    }))
}
