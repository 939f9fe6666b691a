use std::sync::Arc;

/// Abstraction over the metrics backend used by the HTTP handlers.
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Render current metrics in Prometheus text format.
    fn render(&self) -> String;

    /// Record one handled HTTP request.
    ///
    /// Best-effort: implementations log failures instead of returning them,
    /// so recording can never change the response.
    fn record_http_request(&self, method: &str, handler: &str);
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;
