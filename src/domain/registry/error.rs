//! Error type for the metrics registry.
//!
//! Every variant is a programming-error-class failure: it points at a bug in
//! the instrumented code, never at an environmental condition. Callers are
//! expected to surface these at the call site rather than retry them.

use thiserror::Error;

/// Result alias used by the registry and counters.
pub type Result<T> = std::result::Result<T, MetricsError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// A metric with this name is already registered.
    #[error("duplicate metric name: {0}")]
    DuplicateName(String),

    /// Number of label values does not match the descriptor's label names.
    #[error("label cardinality mismatch: expected {expected} values, got {actual}")]
    LabelCardinalityMismatch { expected: usize, actual: usize },

    /// Counters only go up.
    #[error("negative delta {0} on counter")]
    NegativeDelta(i64),

    #[error("invalid metric name: {0:?}")]
    InvalidMetricName(String),

    #[error("invalid label name: {0:?}")]
    InvalidLabelName(String),

    #[error("duplicate label name: {0}")]
    DuplicateLabelName(String),
}
