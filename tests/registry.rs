//! Behavioral tests for the counter registry, driven through the public API.

use axum_request_counter::domain::{MetricDescriptor, MetricsError, Registry};
use std::sync::Arc;

fn http_requests(registry: &Registry) -> Arc<axum_request_counter::domain::Counter> {
    registry
        .register(MetricDescriptor::new(
            "http_requests_total",
            "Total number of HTTP requests",
            &["method", "handler"],
        ))
        .expect("first registration succeeds")
}

#[test]
fn end_to_end_gather() -> anyhow::Result<()> {
    // ---
    let registry = Registry::new();
    let counter = http_requests(&registry);

    for _ in 0..3 {
        counter.with(&["GET", "/"])?.inc();
    }
    counter.with(&["POST", "/"])?.inc();

    let lines: Vec<String> = registry
        .gather()
        .into_iter()
        .flat_map(|block| block.lines)
        .collect();
    assert_eq!(
        lines,
        [
            "http_requests_total{method=\"GET\",handler=\"/\"} 3",
            "http_requests_total{method=\"POST\",handler=\"/\"} 1",
        ]
    );
    Ok(())
}

#[test]
fn no_lost_updates_across_threads() -> anyhow::Result<()> {
    // ---
    let registry = Arc::new(Registry::new());
    http_requests(&registry);

    let threads = 16;
    let per_thread = 2_500;

    std::thread::scope(|scope| {
        for t in 0..threads {
            let registry = Arc::clone(&registry);
            scope.spawn(move || {
                let counter = registry.get("http_requests_total").unwrap();
                // Alternate between re-resolving and reusing a handle.
                let handle = counter.with(&["GET", "/"]).unwrap();
                for i in 0..per_thread {
                    if (t + i) % 2 == 0 {
                        handle.inc();
                    } else {
                        counter.with(&["GET", "/"]).unwrap().add(1).unwrap();
                    }
                }
            });
        }
    });

    let counter = registry.get("http_requests_total").unwrap();
    assert_eq!(counter.series_count(), 1);
    assert_eq!(counter.get(&["GET", "/"])?, Some(threads * per_thread));
    Ok(())
}

#[test]
fn concurrent_first_use_creates_one_series_per_tuple() {
    // ---
    let registry = Registry::new();
    let counter = http_requests(&registry);
    let methods = ["GET", "POST", "PUT", "DELETE"];

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for method in methods {
                    counter.with(&[method, "/"]).unwrap().inc();
                }
            });
        }
    });

    assert_eq!(counter.series_count(), methods.len());
    for method in methods {
        assert_eq!(counter.get(&[method, "/"]).unwrap(), Some(8));
    }
}

#[test]
fn increments_do_not_leak_between_tuples() -> anyhow::Result<()> {
    // ---
    let registry = Registry::new();
    let counter = http_requests(&registry);
    counter.with(&["POST", "/"])?.add(5)?;

    let get = counter.with(&["GET", "/"])?;
    for _ in 0..100 {
        get.inc();
    }

    assert_eq!(counter.get(&["POST", "/"])?, Some(5));
    assert_eq!(counter.get(&["GET", "/"])?, Some(100));
    Ok(())
}

#[test]
fn failures_are_reported_to_the_caller() -> anyhow::Result<()> {
    // ---
    let registry = Registry::new();
    let counter = http_requests(&registry);
    let handle = counter.with(&["GET", "/"])?;
    handle.add(2)?;

    assert_eq!(handle.add(-1), Err(MetricsError::NegativeDelta(-1)));
    assert_eq!(handle.get(), 2);

    assert!(matches!(
        counter.with(&["GET"]),
        Err(MetricsError::LabelCardinalityMismatch {
            expected: 2,
            actual: 1
        })
    ));
    assert_eq!(counter.series_count(), 1);

    let dup = registry.register(MetricDescriptor::new("http_requests_total", "again", &[]));
    assert!(matches!(dup, Err(MetricsError::DuplicateName(_))));

    handle.inc();
    assert_eq!(
        registry.render_text(false),
        "http_requests_total{method=\"GET\",handler=\"/\"} 3\n"
    );
    Ok(())
}

#[test]
fn unobserved_labeled_counter_is_omitted_from_scrape() {
    // ---
    let registry = Registry::new();
    http_requests(&registry);

    assert_eq!(registry.render_text(true), "");
    assert_eq!(registry.render_text(false), "");
}

#[test]
fn counter_never_wraps_past_max() -> anyhow::Result<()> {
    // ---
    let registry = Registry::new();
    let counter = http_requests(&registry);
    let handle = counter.with(&["GET", "/"])?;

    handle.add(i64::MAX)?;
    handle.add(i64::MAX)?;
    let before = handle.get();
    handle.add(2)?;

    assert!(handle.get() >= before);
    assert_eq!(handle.get(), u64::MAX);
    Ok(())
}
