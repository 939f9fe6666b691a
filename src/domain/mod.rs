mod metrics;
pub mod registry;

// Publicly expose the Metrics abstraction
pub use metrics::{Metrics, MetricsPtr};

// Publicly expose the counter registry
pub use registry::{
    default_registry, Counter, CounterHandle, MetricBlock, MetricDescriptor, MetricsError,
    Registry,
};
