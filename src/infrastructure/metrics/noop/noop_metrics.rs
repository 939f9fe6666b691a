use crate::domain::Metrics;

/// Backend used when `AXUM_METRICS_TYPE=noop`: counts nothing, exposes nothing.
#[derive(Debug, Default)]
pub struct NoopMetrics;

impl Metrics for NoopMetrics {
    // ---
    fn render(&self) -> String {
        String::new()
    }

    fn record_http_request(&self, _method: &str, _handler: &str) {}
}
