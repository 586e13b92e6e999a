//! Configuration structure for the relay.
//!
//! Everything deserializes from TOML via serde; every section and field
//! has a default so a minimal file, or no file at all, works.

use serde::{Deserialize, Serialize};

/// Root configuration for the HTTP relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address, limits).
    pub listener: ListenerConfig,

    /// Upstream target and outbound client settings.
    pub upstream: UpstreamConfig,

    /// Route definitions. Requests matching no route are answered 404
    /// locally, without an upstream call.
    pub routes: Vec<RouteConfig>,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Inbound listener settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Address the relay listens on, e.g. "0.0.0.0:8080".
    pub bind_address: String,

    /// Maximum in-flight requests (backpressure).
    pub max_connections: usize,

    /// Whole-request deadline in seconds. Must exceed the upstream read
    /// timeout so slow upstreams map to 504, not an inbound 408.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_connections: 10_000,
            request_timeout_secs: 30,
        }
    }
}

/// Upstream target configuration.
///
/// Built into an immutable `UpstreamTarget` and a pooled client at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the upstream service (http only).
    pub base_url: String,

    /// Connection establishment timeout in milliseconds.
    pub connect_timeout_ms: u64,

    /// Response read timeout in milliseconds. Exceeding it yields 504.
    pub read_timeout_ms: u64,

    /// Maximum idle pooled connections kept per host.
    pub max_connections: usize,

    /// Idle pooled connection lifetime in seconds.
    pub idle_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9000".to_string(),
            connect_timeout_ms: 5_000,
            read_timeout_ms: 10_000,
            max_connections: 100,
            idle_timeout_secs: 60,
        }
    }
}

/// Route configuration entry.
///
/// Conditions are AND-combined; an entry with no conditions matches
/// everything.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Name used in logs and metric labels.
    pub name: String,

    /// Host header to match (exact match, case-insensitive).
    pub host: Option<String>,

    /// Path prefix to match (case-sensitive).
    pub path_prefix: Option<String>,

    /// HTTP methods to match. Empty means any method.
    #[serde(default)]
    pub methods: Vec<String>,

    /// Higher-priority entries are checked first.
    #[serde(default)]
    pub priority: u32,
}

/// Logging and metrics settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log level when RUST_LOG is unset (trace through error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Address the metrics endpoint listens on.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
