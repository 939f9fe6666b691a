//! Prometheus metrics implementation.
//!
//! This module provides a concrete implementation of the `Metrics` trait on
//! top of the crate's own counter [`Registry`]. The registry is injected
//! rather than global, so each router (and each test) can own its counters
//! while production code may still pass in the process-wide default.

use crate::domain::{Counter, Metrics, Registry};
use std::sync::Arc;

/// Prometheus-based metrics implementation.
///
/// Holds the registry used for exposition together with the counter handle
/// registered at construction, so the request path never looks it up by name.
pub struct PrometheusMetrics {
    registry: Arc<Registry>,
    http_requests: Arc<Counter>,
    emit_metadata: bool,
}

impl PrometheusMetrics {
    /// Registers the service counters in `registry`.
    ///
    /// # Errors
    /// Fails if `registry` already holds a metric with the same name.
    pub fn new(registry: Arc<Registry>, emit_metadata: bool) -> anyhow::Result<Self> {
        tracing::info!("Creating Prometheus metrics");
        let http_requests = super::register_http_requests(&registry)?;

        Ok(PrometheusMetrics {
            registry,
            http_requests,
            emit_metadata,
        })
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> String {
        self.registry.render_text(self.emit_metadata)
    }

    fn record_http_request(&self, method: &str, handler: &str) {
        tracing::debug!(method, handler, "Recording HTTP request");
        super::increment_http_requests(&self.http_requests, method, handler);
    }
}
