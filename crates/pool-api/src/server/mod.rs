//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use pool_common::{AppConfig, CatalogResolver, GooglePlacesResolver, IdentityGate};
use pool_core::{LocationResolver, UidGenerator};
use pool_db::{
    create_pool, ensure_schema, SqliteMemberRepository, SqliteMessageRepository,
    SqlitePoolRepository,
};
use pool_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Server bootstrap errors
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, ServerError> {
    // Create database pool
    info!("Connecting to SQLite...");
    let db_config = pool_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| ServerError::Database(e.to_string()))?;
    ensure_schema(&pool)
        .await
        .map_err(|e| ServerError::Database(e.to_string()))?;
    info!("SQLite connection established");

    // Create identity gate
    let identity_gate = Arc::new(IdentityGate::new(
        config.identity.allowed_domain.clone(),
        config.identity.assertion_secret.as_deref(),
    ));

    // Create place resolver: Google when an API key is present, otherwise
    // the fixed campus catalog
    let location_resolver: Arc<dyn LocationResolver> =
        match config.places.google_api_key.as_deref() {
            Some(key) => {
                info!("Place search backed by the Google Places API");
                Arc::new(GooglePlacesResolver::new(key))
            }
            None => {
                info!("Place search backed by the campus catalog");
                Arc::new(CatalogResolver)
            }
        };

    // Create Uid generator
    let uid_generator = Arc::new(UidGenerator::new());

    // Create repositories
    let pool_repo = Arc::new(SqlitePoolRepository::new(pool.clone()));
    let member_repo = Arc::new(SqliteMemberRepository::new(pool.clone()));
    let message_repo = Arc::new(SqliteMessageRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .db(pool)
        .pool_repo(pool_repo)
        .member_repo(member_repo)
        .message_repo(message_repo)
        .location_resolver(location_resolver)
        .identity_gate(identity_gate)
        .uid_generator(uid_generator)
        .build()
        .map_err(|e| ServerError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| ServerError::Config(format!("Invalid server address: {}", e)))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
