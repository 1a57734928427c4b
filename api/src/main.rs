use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bs_api::app::{create_app, AppState};
use bs_core::services::admin::AdminService;
use bs_core::services::auth::AuthService;
use bs_core::services::blog::BlogService;
use bs_core::services::otp::{OtpService, OtpServiceConfig, OtpStore, OtpSweeper};
use bs_infra::database::{create_pool, schema, PostgresBlogRepository, PostgresUserRepository};
use bs_infra::email::SmtpMailer;
use bs_shared::config::{DatabaseConfig, Environment, OtpConfig, ServerConfig, SmtpConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let environment = Environment::from_env();
    info!(%environment, "Starting Blogsyte API server");

    // startup misconfiguration is the one thing allowed to kill the
    // process; everything later is recovered at the request boundary
    let server_config = ServerConfig::from_env().context("server configuration")?;
    let database_config = DatabaseConfig::from_env().context("database configuration")?;
    let smtp_config = SmtpConfig::from_env().context("smtp configuration")?;
    let otp_config = OtpConfig::from_env().context("otp configuration")?;

    let pool = create_pool(&database_config)
        .await
        .context("database connection")?;
    schema::initialize(&pool).await.context("schema bootstrap")?;

    let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));
    let blog_repository = Arc::new(PostgresBlogRepository::new(pool));
    let mailer = Arc::new(SmtpMailer::new(&smtp_config).context("smtp transport")?);

    let otp_store = Arc::new(OtpStore::new());
    let otp_service_config = OtpServiceConfig::from(otp_config.clone());

    let state = web::Data::new(AppState {
        otp_service: Arc::new(OtpService::new(
            Arc::clone(&user_repository),
            mailer,
            Arc::clone(&otp_store),
            otp_service_config.clone(),
        )),
        auth_service: Arc::new(AuthService::new(Arc::clone(&user_repository))),
        blog_service: Arc::new(BlogService::new(
            Arc::clone(&blog_repository),
            Arc::clone(&user_repository),
        )),
        admin_service: Arc::new(AdminService::new(user_repository, blog_repository)),
    });

    let sweeper = OtpSweeper::new(
        otp_store,
        otp_service_config,
        Duration::from_secs(otp_config.sweep_interval_seconds),
    )
    .start();

    let bind_address = server_config.bind_address();
    info!(%bind_address, "Server listening");

    let result = HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await;

    sweeper.abort();
    info!("Server stopped, sweeper cancelled");
    result.map_err(Into::into)
}
