//! Process-wide catalog of labeled counters with pull-based exposition.
//!
//! A [`Registry`] is normally built once at startup, populated with
//! [`Registry::register`], and then shared (behind an `Arc`) with every
//! request handler that increments counters and with the scrape handler that
//! calls [`Registry::gather`]. Registration is meant to happen before any
//! concurrent use; the internal lock only keeps late registration sound.

mod counter;
mod descriptor;
mod error;
mod exposition;

pub use counter::{Counter, CounterHandle};
pub use descriptor::MetricDescriptor;
pub use error::{MetricsError, Result};
pub use exposition::{render, MetricBlock};

use once_cell::sync::Lazy;
use std::collections::HashMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Catalog of registered counters, keyed by metric name.
#[derive(Debug, Default)]
pub struct Registry {
    inner: RwLock<Catalog>,
}

/// Counters in registration order, plus a name index.
#[derive(Debug, Default)]
struct Catalog {
    by_name: HashMap<String, usize>,
    ordered: Vec<Arc<Counter>>,
}

static DEFAULT_REGISTRY: Lazy<Arc<Registry>> = Lazy::new(|| Arc::new(Registry::new()));

/// The process-wide default registry.
///
/// Convenience for code that cannot thread a registry through; nothing in
/// this crate depends on it.
pub fn default_registry() -> Arc<Registry> {
    Arc::clone(&DEFAULT_REGISTRY)
}

impl Registry {
    // ---

    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a counter from `descriptor` and adds it to the catalog.
    ///
    /// # Errors
    /// - [`MetricsError::DuplicateName`] if the name is already taken; the
    ///   existing counter is untouched
    /// - any validation error from [`MetricDescriptor::validate`]
    pub fn register(&self, descriptor: MetricDescriptor) -> Result<Arc<Counter>> {
        // ---
        descriptor.validate()?;

        let mut catalog = self.inner.write();
        if catalog.by_name.contains_key(descriptor.name()) {
            return Err(MetricsError::DuplicateName(descriptor.name().to_string()));
        }

        tracing::debug!(
            name = descriptor.name(),
            labels = ?descriptor.label_names(),
            "Registering counter"
        );

        let name = descriptor.name().to_string();
        let counter = Arc::new(Counter::new(descriptor));
        let pos = catalog.ordered.len();
        catalog.ordered.push(Arc::clone(&counter));
        catalog.by_name.insert(name, pos);

        Ok(counter)
    }

    /// Looks up a registered counter by name.
    pub fn get(&self, name: &str) -> Option<Arc<Counter>> {
        // ---
        let catalog = self.inner.read();
        catalog
            .by_name
            .get(name)
            .map(|&pos| Arc::clone(&catalog.ordered[pos]))
    }

    pub fn len(&self) -> usize {
        self.inner.read().ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders every registered counter, in registration order.
    ///
    /// Each series value is read atomically, but series are read one after
    /// another, so the result is not a global point-in-time snapshot.
    pub fn gather(&self) -> Vec<MetricBlock> {
        // ---
        let counters: Vec<Arc<Counter>> = self.inner.read().ordered.clone();

        counters
            .iter()
            .map(|counter| {
                let descriptor = counter.descriptor();
                MetricBlock {
                    name: descriptor.name().to_string(),
                    help: descriptor.help().to_string(),
                    lines: render(descriptor, &counter.snapshot()),
                }
            })
            .collect()
    }

    /// Gathers and joins everything into one exposition body.
    pub fn render_text(&self, emit_metadata: bool) -> String {
        // ---
        let mut out = String::new();
        for block in self.gather() {
            block.write_to(&mut out, emit_metadata);
        }
        out
    }
}
