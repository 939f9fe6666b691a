use crate::domain::{Counter, MetricDescriptor, Registry};
use std::sync::Arc;

pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";

/// Register the per-request counter, labeled by method and handler.
pub fn register_http_requests(registry: &Registry) -> anyhow::Result<Arc<Counter>> {
    let descriptor = MetricDescriptor::new(
        HTTP_REQUESTS_TOTAL,
        "Total number of HTTP requests",
        &["method", "handler"],
    );
    Ok(registry.register(descriptor)?)
}

/// Increment the request counter, logging instead of failing.
pub fn increment_http_requests(counter: &Counter, method: &str, handler: &str) {
    if let Err(err) = counter.inc(&[method, handler]) {
        tracing::warn!("Failed to record HTTP request: {err}");
    }
}
