// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{
    routing::any,
    Router,
};

use domain::MetricsPtr;
use handlers::{metrics_handler, root_handler};

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;

pub use config::*;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_metrics, // ---
    create_noop_metrics,
    create_prom_metrics,
    create_prom_metrics_with_registry,
};

/// Build the HTTP router with the metrics backend chosen by environment variables.
pub fn create_router() -> Result<Router> {
    // ---
    let config = AppConfig::from_env()?;
    create_router_with(&config)
}

/// Build the HTTP router from an explicit configuration.
pub fn create_router_with(config: &AppConfig) -> Result<Router> {
    // ---
    tracing_subscriber::fmt::try_init().ok(); // Ignores if already initialized

    let metrics = create_metrics(&config.metrics)?;
    Ok(create_router_with_metrics(metrics))
}

/// Build the HTTP router around an already constructed metrics backend.
///
/// Every path other than `/metrics` is served by the root handler and
/// counted under `handler="/"`, whatever the method.
pub fn create_router_with_metrics(metrics: MetricsPtr) -> Router {
    // ---
    let app_state = AppState::new(metrics);

    Router::new()
        .route("/", any(root_handler))
        .route("/metrics", any(metrics_handler))
        .fallback(root_handler)
        .with_state(app_state)
}
