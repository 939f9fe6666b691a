// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::Result;
use std::net::SocketAddr;
use std::str::FromStr;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional environment variable that must parse when present.
///
/// # Behavior
/// - Missing variable: the provided default is used
/// - Present but unparseable: fails fast with a clear error message
///
/// Used for settings where a typo should stop the deployment rather
/// than silently fall back to a default.
macro_rules! strict_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        match std::env::var($key) {
            Ok(v) => v.parse::<$ty>().map_err(|_| {
                anyhow::anyhow!(concat!("Invalid configuration: ", $key, "={}"), v)
            })?,
            Err(_) => $default,
        }
    };
}

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used. This macro is appropriate for non-critical
/// tuning parameters where fallback behavior is acceptable.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails due to an invalid
/// environment variable value.
///
/// This macro is intended for config unit tests only and enforces
/// consistent error messages across failure cases.
macro_rules! assert_invalid_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string()
                .contains(concat!("Invalid configuration: ", $key)),
            "unexpected error: {err}"
        );
    }};
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
/// All configuration is validated eagerly during initialization.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: server::ServerConfig,
    pub metrics: metrics::MetricsConfig,
}

impl AppConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any configuration value is present but invalid.
    /// This function is intended to be called exactly once at startup.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            server: server::ServerConfig::from_env()?,
            metrics: metrics::MetricsConfig::from_env()?,
        })
    }
}

// ============================================================
// Server configuration
// ============================================================

mod server {
    // ---
    use super::*;

    /// HTTP listener configuration.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Address the HTTP server binds to. Defaults to `0.0.0.0:8080`.
        pub bind_addr: SocketAddr,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            }
        }
    }

    impl ServerConfig {
        /// Builds a [`ServerConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error if `AXUM_BIND_ADDR` is set but is not a valid
        /// socket address.
        pub fn from_env() -> Result<Self> {
            // ---
            let bind_addr = strict_env_parse!(
                "AXUM_BIND_ADDR",
                SocketAddr,
                ServerConfig::default().bind_addr
            );

            Ok(Self { bind_addr })
        }
    }
}
pub use server::ServerConfig;

// ============================================================
// Metrics configuration
// ============================================================

mod metrics {
    // ---
    use super::*;

    /// Which [`crate::domain::Metrics`] implementation backs the service.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub enum MetricsBackend {
        /// Count requests and expose them on `/metrics`.
        #[default]
        Prom,
        /// Record nothing; `/metrics` serves an empty body.
        Noop,
    }

    impl FromStr for MetricsBackend {
        type Err = anyhow::Error;

        fn from_str(s: &str) -> Result<Self> {
            match s {
                "prom" => Ok(MetricsBackend::Prom),
                "noop" => Ok(MetricsBackend::Noop),
                other => Err(anyhow::anyhow!("unknown metrics backend: {other}")),
            }
        }
    }

    /// Metrics-related configuration derived from environment variables.
    #[derive(Debug, Clone, Default)]
    pub struct MetricsConfig {
        /// Backend selection. Defaults to `prom`.
        pub backend: MetricsBackend,

        /// Emit `# HELP` / `# TYPE` lines before each metric. Defaults to false.
        pub emit_metadata: bool,
    }

    impl MetricsConfig {
        /// Builds a [`MetricsConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error if `AXUM_METRICS_TYPE` names an unknown backend.
        pub fn from_env() -> Result<Self> {
            // ---
            let backend = strict_env_parse!(
                "AXUM_METRICS_TYPE",
                MetricsBackend,
                MetricsBackend::default()
            );
            let emit_metadata = optional_env_parse!("AXUM_METRICS_EMIT_METADATA", bool, false);

            Ok(Self {
                backend,
                emit_metadata,
            })
        }
    }
}
pub use metrics::{MetricsBackend, MetricsConfig};

// ============================================================
// Tests
// ============================================================
