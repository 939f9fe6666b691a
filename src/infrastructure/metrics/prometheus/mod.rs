mod counters;
mod prometheus_metrics;

pub use prometheus_metrics::PrometheusMetrics;
use crate::config::MetricsConfig;
use crate::domain::Registry;
use std::sync::Arc;

// Re-export utilities for internal use within this module
pub(crate) use counters::{increment_http_requests, register_http_requests};

/// Creates a new Prometheus metrics implementation backed by a fresh registry.
///
/// This implementation collects metrics in Prometheus format and can
/// expose them via HTTP endpoint for scraping.
///
/// Returns a fully initialized metrics instance ready for use.
pub fn create(config: &MetricsConfig) -> anyhow::Result<crate::domain::MetricsPtr> {
    create_with_registry(Arc::new(Registry::new()), config)
}

/// Creates a Prometheus metrics implementation on an existing registry.
///
/// # Errors
/// Fails if the service counters are already registered there, e.g. when the
/// process-wide default registry is handed to two routers.
pub fn create_with_registry(
    registry: Arc<Registry>,
    config: &MetricsConfig,
) -> anyhow::Result<crate::domain::MetricsPtr> {
    tracing::info!("Initializing Prometheus metrics");
    Ok(Arc::new(PrometheusMetrics::new(
        registry,
        config.emit_metadata,
    )?))
}
