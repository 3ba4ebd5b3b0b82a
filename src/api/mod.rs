//! HTTP API for gutenprep
//!
//! Routes:
//! - `GET  /`            the HTML front end
//! - `GET  /health`      liveness check
//! - `POST /api/clean`   fetch a `.txt` URL, clean it, return text, statistics and summary
//! - `POST /api/analyze` statistics for a posted text
//!
//! Every JSON response carries a `success` flag; failures carry an `error`
//! message instead of a payload.

mod handlers;
mod response;

pub use response::{Failure, Success};

use crate::config::ServerConfig;
use crate::{Preprocessor, Result};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builds the application router with the default body size limit
pub fn router(preprocessor: Arc<Preprocessor>) -> Router {
    router_with_body_limit(preprocessor, ServerConfig::default().max_body_bytes)
}

/// Builds the application router around a shared preprocessor
///
/// Bodies over `max_body_bytes` are answered with a 413 failure envelope, and
/// a known path hit with the wrong method gets a 405 envelope.
pub fn router_with_body_limit(preprocessor: Arc<Preprocessor>, max_body_bytes: usize) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::index).fallback(handlers::method_not_allowed),
        )
        .route(
            "/health",
            get(handlers::health).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/clean",
            post(handlers::clean).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/analyze",
            post(handlers::analyze).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(preprocessor)
}

/// Binds to the configured address and serves until Ctrl-C
pub async fn serve(config: &ServerConfig, preprocessor: Preprocessor) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);

    let app = router_with_body_limit(Arc::new(preprocessor), config.max_body_bytes);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received, finishing in-flight requests");
}
