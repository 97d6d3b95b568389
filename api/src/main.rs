use actix_web::{web, HttpServer};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use warden_api::app::create_app;
use warden_api::routes::AppState;
use warden_core::services::auth::{AuthConfig, AuthenticationService};
use warden_core::services::csrf::{CsrfCodec, CsrfCodecConfig};
use warden_core::services::token::{TokenCodec, TokenCodecConfig};
use warden_infra::cache::RedisRevocationStore;
use warden_infra::database::{create_pool, MySqlUnitOfWork, MySqlUserRepository};
use warden_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    if config.jwt.is_using_default_secrets() {
        warn!("jwt secrets are using insecure defaults; set WARDEN_JWT__ACCESS_SECRET and WARDEN_JWT__REFRESH_SECRET");
    }

    let pool = create_pool(&config.database).await?;
    let revocations = Arc::new(RedisRevocationStore::connect(&config.cache).await?);

    let token_codec = Arc::new(TokenCodec::new(TokenCodecConfig::from(&config.jwt))?);
    let csrf_codec = Arc::new(CsrfCodec::new(
        CsrfCodecConfig::from(&config.csrf),
        Arc::clone(&revocations),
    )?);

    let users = Arc::new(MySqlUserRepository::new(pool.clone()));
    let unit_of_work = Arc::new(MySqlUnitOfWork::new(pool));
    let auth_service = Arc::new(AuthenticationService::new(
        users,
        unit_of_work,
        Arc::clone(&revocations),
        Arc::clone(&token_codec),
        AuthConfig::default(),
    )?);

    let state = web::Data::new(AppState {
        auth_service,
        csrf_codec,
        token_codec,
        revocations,
        refresh_cookie_ttl: config.jwt.refresh_token_expiry,
        cors_allow_origins: config.server.cors_allow_origins.clone(),
    });

    let bind_address = config.server.bind_address();
    info!(%bind_address, "starting warden api server");

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
