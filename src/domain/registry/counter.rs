//! Labeled, monotonically increasing counters.
//!
//! One [`Counter`] fans out into many independent series, one per label
//! tuple. Series are created lazily on first use and never removed. The
//! series table is guarded by a single `RwLock`; the values themselves are
//! atomics shared with [`CounterHandle`]s, so increments never take the lock.

use super::descriptor::MetricDescriptor;
use super::error::{MetricsError, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use parking_lot::RwLock;
use std::sync::Arc;

/// A counter partitioned by label tuple.
#[derive(Debug)]
pub struct Counter {
    descriptor: MetricDescriptor,
    series: RwLock<SeriesTable>,
}

/// Series in first-observed order, plus an index keyed by label values.
#[derive(Debug, Default)]
struct SeriesTable {
    index: HashMap<Vec<String>, usize>,
    entries: Vec<(Vec<String>, Arc<AtomicU64>)>,
}

impl SeriesTable {
    fn insert(&mut self, key: Vec<String>) -> Arc<AtomicU64> {
        // ---
        if let Some(&pos) = self.index.get(&key) {
            return Arc::clone(&self.entries[pos].1);
        }
        let value = Arc::new(AtomicU64::new(0));
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, Arc::clone(&value)));
        value
    }
}

/// Handle bound to one series of a [`Counter`].
///
/// Cheap to clone; holding one keeps incrementing the same series without
/// touching the counter's series table again.
#[derive(Debug, Clone)]
pub struct CounterHandle {
    value: Arc<AtomicU64>,
}

impl CounterHandle {
    // ---

    /// Increase the series by one.
    pub fn inc(&self) {
        self.saturating_add(1);
    }

    /// Increase the series by `delta`.
    ///
    /// # Errors
    /// Returns [`MetricsError::NegativeDelta`] when `delta < 0`; the stored
    /// value is left unchanged.
    pub fn add(&self, delta: i64) -> Result<()> {
        // ---
        let delta = u64::try_from(delta).map_err(|_| MetricsError::NegativeDelta(delta))?;
        self.saturating_add(delta);
        Ok(())
    }

    /// Current value of the series.
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Sticks at `u64::MAX` instead of wrapping.
    fn saturating_add(&self, delta: u64) {
        // The closure always returns Some, so the update cannot fail.
        let _ = self
            .value
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |v| {
                Some(v.saturating_add(delta))
            });
    }
}

impl Counter {
    // ---

    /// Builds a counter for an already validated descriptor.
    ///
    /// A counter without label names has exactly one series, the empty
    /// tuple, which exists from the start so it is exported as zero.
    pub(super) fn new(descriptor: MetricDescriptor) -> Self {
        // ---
        let mut table = SeriesTable::default();
        if descriptor.label_names().is_empty() {
            table.insert(Vec::new());
        }

        Counter {
            descriptor,
            series: RwLock::new(table),
        }
    }

    pub fn descriptor(&self) -> &MetricDescriptor {
        &self.descriptor
    }

    /// Returns a handle to the series identified by `label_values`, creating
    /// it with value zero if this tuple has not been seen before.
    ///
    /// Values are positional and must line up with the descriptor's label
    /// names. Concurrent first use of the same tuple yields handles to one
    /// shared series.
    ///
    /// # Errors
    /// Returns [`MetricsError::LabelCardinalityMismatch`] if the number of
    /// values differs from the number of label names. No series is created.
    pub fn with(&self, label_values: &[&str]) -> Result<CounterHandle> {
        // ---
        let key = self.key_for(label_values)?;

        {
            let table = self.series.read();
            if let Some(&pos) = table.index.get(&key) {
                return Ok(CounterHandle {
                    value: Arc::clone(&table.entries[pos].1),
                });
            }
        }

        // Another thread may have inserted between the two locks; insert()
        // re-checks under the write lock.
        let mut table = self.series.write();
        Ok(CounterHandle {
            value: table.insert(key),
        })
    }

    /// Shorthand for `with(label_values)?.inc()`.
    pub fn inc(&self, label_values: &[&str]) -> Result<()> {
        self.with(label_values)?.inc();
        Ok(())
    }

    /// Shorthand for `with(label_values)?.add(delta)`.
    ///
    /// A negative delta is rejected before the series is looked up, so it
    /// never creates a series either.
    pub fn add(&self, label_values: &[&str], delta: i64) -> Result<()> {
        // ---
        if delta < 0 {
            return Err(MetricsError::NegativeDelta(delta));
        }
        self.with(label_values)?.add(delta)
    }

    /// Reads the value of a series without creating it.
    ///
    /// Returns `Ok(None)` for a tuple that has never been observed.
    pub fn get(&self, label_values: &[&str]) -> Result<Option<u64>> {
        // ---
        let key = self.key_for(label_values)?;
        let table = self.series.read();

        Ok(table
            .index
            .get(&key)
            .map(|&pos| table.entries[pos].1.load(Ordering::Relaxed)))
    }

    /// Number of observed series.
    pub fn series_count(&self) -> usize {
        self.series.read().entries.len()
    }

    /// Copies out every observed series in first-observed order.
    ///
    /// Each value is read atomically; the snapshot as a whole is not a
    /// single point in time across series.
    pub fn snapshot(&self) -> Vec<(Vec<String>, u64)> {
        // ---
        let table = self.series.read();
        table
            .entries
            .iter()
            .map(|(labels, value)| (labels.clone(), value.load(Ordering::Relaxed)))
            .collect()
    }

    fn key_for(&self, label_values: &[&str]) -> Result<Vec<String>> {
        // ---
        let expected = self.descriptor.label_names().len();
        if label_values.len() != expected {
            return Err(MetricsError::LabelCardinalityMismatch {
                expected,
                actual: label_values.len(),
            });
        }
        Ok(label_values.iter().map(|v| v.to_string()).collect())
    }
}
