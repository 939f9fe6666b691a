use axum_request_counter::{create_router_with, MetricsBackend};
use std::sync::Arc;

mod common;

// NOTE: every server owns a fresh registry, so these tests run in
// parallel without seeing each other's counters.

#[tokio::test]
async fn metrics_endpoint_with_prometheus() {
    // ---
    let server = common::TestServer::with_backend(MetricsBackend::Prom).await;

    // First, hit the root route to generate metrics
    for _ in 0..3 {
        let res = server.client.get(server.url("/")).send().await.unwrap();
        assert!(res.status().is_success());
    }
    let res = server.client.post(server.url("/")).send().await.unwrap();
    assert!(res.status().is_success());

    let body = server.scrape().await;
    assert_eq!(
        body,
        "http_requests_total{method=\"GET\",handler=\"/\"} 3\n\
         http_requests_total{method=\"POST\",handler=\"/\"} 1\n"
    );
}

#[tokio::test]
async fn metrics_endpoint_with_noop() {
    // ---
    let server = common::TestServer::with_backend(MetricsBackend::Noop).await;

    let _ = server.client.get(server.url("/")).send().await.unwrap();

    // Should still return success even with noop metrics
    let body = server.scrape().await;
    assert!(body.is_empty(), "Noop metrics should render nothing: {body}");
}

#[tokio::test]
async fn scrapes_are_not_counted() {
    // ---
    let server = common::TestServer::new().await;

    assert_eq!(server.scrape().await, "");
    assert_eq!(server.scrape().await, "");
}

#[tokio::test]
async fn repeated_scrapes_are_identical() {
    // ---
    let server = common::TestServer::new().await;
    let _ = server.client.get(server.url("/")).send().await.unwrap();

    let first = server.scrape().await;
    let second = server.scrape().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn metadata_lines_when_enabled() {
    // ---
    let mut config = common::test_config(MetricsBackend::Prom);
    config.metrics.emit_metadata = true;
    let server = common::TestServer::serve(create_router_with(&config).unwrap()).await;

    let _ = server.client.get(server.url("/")).send().await.unwrap();

    let body = server.scrape().await;
    assert_eq!(
        body,
        "# HELP http_requests_total Total number of HTTP requests\n\
         # TYPE http_requests_total counter\n\
         http_requests_total{method=\"GET\",handler=\"/\"} 1\n"
    );
}

#[tokio::test]
async fn metrics_endpoint_survives_load() {
    // ---
    let server = Arc::new(common::TestServer::new().await);

    // Generate some load
    let futures = (0..20).map(|i| {
        let server = Arc::clone(&server);
        async move {
            let endpoint = match i % 2 {
                0 => "/",
                _ => "/metrics",
            };
            server.client.get(server.url(endpoint)).send().await
        }
    });

    let responses = futures::future::join_all(futures).await;

    // All requests should succeed
    for (i, response) in responses.into_iter().enumerate() {
        // ---
        let response = response.unwrap_or_else(|_| panic!("Request {i} should succeed"));
        assert!(
            response.status().is_success(),
            "Request {i} should return success"
        );
    }

    let body = server.scrape().await;
    assert_eq!(body, "http_requests_total{method=\"GET\",handler=\"/\"} 10\n");
}

#[tokio::test]
async fn metrics_content_type_is_correct() {
    // ---
    let server = common::TestServer::new().await;

    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let content_type = res
        .headers()
        .get("content-type")
        .expect("content-type header should be set")
        .to_str()
        .unwrap();
    assert!(
        content_type.starts_with("text/plain"),
        "Content type should be text/plain: {content_type}"
    );
}
