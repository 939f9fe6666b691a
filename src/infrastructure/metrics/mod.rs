pub mod noop;
pub mod prometheus;

use crate::config::{MetricsBackend, MetricsConfig};
use crate::domain::MetricsPtr;

// Re-export the factory functions for easy access
pub use noop::create as create_noop_metrics;
pub use prometheus::create as create_prom_metrics;
pub use prometheus::create_with_registry as create_prom_metrics_with_registry;

/// Builds the metrics backend selected by configuration.
pub fn create_metrics(config: &MetricsConfig) -> anyhow::Result<MetricsPtr> {
    match config.backend {
        MetricsBackend::Prom => create_prom_metrics(config),
        MetricsBackend::Noop => create_noop_metrics(),
    }
}
