// Test helpers are intentionally partially used
#![allow(dead_code)]

use axum::Router;
use axum_request_counter::{create_router_with, AppConfig, MetricsBackend, MetricsConfig};
use reqwest::Client;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::sleep;

// ============================================================================
// Test Setup
// ============================================================================

/// Configuration for a test router; built explicitly so tests never depend
/// on the process environment.
pub fn test_config(backend: MetricsBackend) -> AppConfig {
    // ---
    AppConfig {
        metrics: MetricsConfig {
            backend,
            emit_metadata: false,
        },
        ..AppConfig::default()
    }
}

pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub client: Client,
}

impl TestServer {
    // ---
    pub async fn new() -> Self {
        Self::with_backend(MetricsBackend::Prom).await
    }

    pub async fn with_backend(backend: MetricsBackend) -> Self {
        // ---
        let app = create_router_with(&test_config(backend)).expect("Should be able to create router");
        Self::serve(app).await
    }

    pub async fn serve(app: Router) -> Self {
        // ---
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Spawn the server in the background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start
        sleep(Duration::from_millis(100)).await;

        let client = Client::new();

        Self { addr, client }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }

    /// Fetches `/metrics` and returns the body.
    pub async fn scrape(&self) -> String {
        // ---
        let res = self
            .client
            .get(self.url("/metrics"))
            .send()
            .await
            .expect("Failed to scrape metrics");
        assert!(res.status().is_success(), "Metrics endpoint should return success");
        res.text().await.expect("Failed to read metrics body")
    }
}
