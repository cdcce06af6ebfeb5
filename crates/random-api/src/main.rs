//! Random node API server entry point.

use std::error::Error;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use random_api::config::ServerConfig;
use random_api::error::AppError;
use random_api::routes;
use random_api::state::AppState;
use random_org_client::ReqwestTransport;
use random_range::domain::endpoint::IntegerEndpoint;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Random node API server");

    // Read configuration from environment.
    let config = ServerConfig::from_env()?;

    // Build the outbound transport.
    let transport = ReqwestTransport::new(config.http_timeout).map_err(AppError::from)?;
    let endpoint = IntegerEndpoint::new(&config.random_org_base_url);
    tracing::info!(base_url = endpoint.base_url(), "Using integer service");

    // Build application state.
    let app_state = AppState::new(Arc::new(transport), endpoint);

    // Build router.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/random", routes::random::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr = config.bind_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AppError::from)?;

    axum::serve(listener, app).await.map_err(AppError::from)?;

    Ok(())
}
