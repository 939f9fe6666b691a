use super::error::{MetricsError, Result};
use std::collections::HashSet;

/// Static description of a metric: its name, help text and label names.
///
/// The label names fix the arity and order of every label tuple recorded
/// against the metric. Descriptors are validated when they are registered,
/// not when they are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDescriptor {
    name: String,
    help: String,
    label_names: Vec<String>,
}

impl MetricDescriptor {
    // ---

    pub fn new(name: impl Into<String>, help: impl Into<String>, label_names: &[&str]) -> Self {
        // ---
        MetricDescriptor {
            name: name.into(),
            help: help.into(),
            label_names: label_names.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn label_names(&self) -> &[String] {
        &self.label_names
    }

    /// Checks the metric name and label names against the exposition
    /// format's naming rules.
    ///
    /// # Errors
    /// - [`MetricsError::InvalidMetricName`] for an empty name or one outside
    ///   `[a-zA-Z_:][a-zA-Z0-9_:]*`
    /// - [`MetricsError::InvalidLabelName`] for a label outside
    ///   `[a-zA-Z_][a-zA-Z0-9_]*` or using the reserved `__` prefix
    /// - [`MetricsError::DuplicateLabelName`] if a label name repeats
    pub fn validate(&self) -> Result<()> {
        // ---
        if !is_valid_metric_name(&self.name) {
            return Err(MetricsError::InvalidMetricName(self.name.clone()));
        }

        let mut seen = HashSet::with_capacity(self.label_names.len());
        for label in &self.label_names {
            if !is_valid_label_name(label) {
                return Err(MetricsError::InvalidLabelName(label.clone()));
            }
            if !seen.insert(label.as_str()) {
                return Err(MetricsError::DuplicateLabelName(label.clone()));
            }
        }

        Ok(())
    }
}

fn is_valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

fn is_valid_label_name(name: &str) -> bool {
    if name.starts_with("__") {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
