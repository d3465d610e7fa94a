//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use gourmet_common::{AppConfig, AppError, JwtService};
use gourmet_core::SnowflakeGenerator;
use gourmet_db::{
    create_pool, PgCategoryRepository, PgPostRepository, PgProfileRepository,
    PgRestaurantRepository, PgUserRepository, PoolConfig,
};
use gourmet_service::ServiceContextBuilder;
use gourmet_storage::LocalMediaStore;
use tokio::net::TcpListener;
use tracing::info;

use crate::handlers::fallback;
use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes, media_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// # Errors
/// Returns `AppError::Config` when the middleware settings are invalid.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    // A post carries two files, each up to the per-file limit
    let body_limit = config.media.max_file_size_bytes().saturating_mul(2);

    let mut router = create_router();
    if let Some(media) = media_routes(&config.media.upload_dir, &config.media.media_url) {
        router = router.merge(media);
    }
    let router = router
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed);

    let router = apply_middleware_with_config(
        router.layer(DefaultBodyLimit::max(body_limit)),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    // Health checks bypass rate limiting
    let health = apply_middleware(
        health_routes().method_not_allowed_fallback(fallback::method_not_allowed),
    );

    Ok(router.merge(health).with_state(state))
}

/// Initialize all dependencies and create AppState
///
/// # Errors
/// Returns an error when the database or the upload directory is unavailable.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Open the upload directory
    let media_store = LocalMediaStore::open(&config.media.upload_dir, &config.media.media_url)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;
    info!(upload_dir = %config.media.upload_dir, "Media storage ready");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .profile_repo(Arc::new(PgProfileRepository::new(pool.clone())))
        .post_repo(Arc::new(PgPostRepository::new(pool.clone())))
        .restaurant_repo(Arc::new(PgRestaurantRepository::new(pool.clone())))
        .category_repo(Arc::new(PgCategoryRepository::new(pool.clone())))
        .media_store(Arc::new(media_store))
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .time_zone(config.locale.time_zone)
        .max_upload_bytes(config.media.max_file_size_bytes())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool))
}

/// Run the HTTP server
///
/// # Errors
/// Returns an error when the address cannot be bound or the server stops.
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
///
/// # Errors
/// Returns an error when startup fails or the server stops with an error.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state)?;

    // Run server
    run_server(app, &addr).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
