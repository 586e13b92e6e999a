//! Semantic configuration checks.
//!
//! Serde handles the syntactic layer; everything here is about values that
//! parse but cannot work at runtime. Errors are collected rather than
//! short-circuited so one startup failure reports every problem at once.

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::RelayConfig;

/// Standard HTTP methods accepted in route configuration.
const KNOWN_METHODS: &[&str] = &[
    "GET", "HEAD", "POST", "PUT", "DELETE", "OPTIONS", "PATCH", "TRACE", "CONNECT",
];

/// A single semantic validation failure.
#[derive(Debug)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "upstream.base_url").
    pub field: String,
    /// Human-readable description of what is wrong.
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a deserialized configuration.
///
/// Returns every failure found, not just the first.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("not a socket address: {:?}", config.listener.bind_address),
        ));
    }
    if config.listener.max_connections == 0 {
        errors.push(ValidationError::new(
            "listener.max_connections",
            "must be greater than zero",
        ));
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "listener.request_timeout_secs",
            "must be greater than zero",
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) => {
            if url.scheme() != "http" {
                errors.push(ValidationError::new(
                    "upstream.base_url",
                    format!("only http upstreams are supported, got {:?}", url.scheme()),
                ));
            }
            if url.host_str().is_none() {
                errors.push(ValidationError::new(
                    "upstream.base_url",
                    "missing host",
                ));
            }
        }
        Err(e) => {
            errors.push(ValidationError::new(
                "upstream.base_url",
                format!("not a URL: {}", e),
            ));
        }
    }
    if config.upstream.connect_timeout_ms == 0 {
        errors.push(ValidationError::new(
            "upstream.connect_timeout_ms",
            "must be greater than zero",
        ));
    }
    if config.upstream.read_timeout_ms == 0 {
        errors.push(ValidationError::new(
            "upstream.read_timeout_ms",
            "must be greater than zero",
        ));
    }
    if config.upstream.max_connections == 0 {
        errors.push(ValidationError::new(
            "upstream.max_connections",
            "must be greater than zero",
        ));
    }

    for (i, route) in config.routes.iter().enumerate() {
        let field = |suffix: &str| format!("routes[{}].{}", i, suffix);
        if route.name.is_empty() {
            errors.push(ValidationError::new(field("name"), "must not be empty"));
        }
        if let Some(prefix) = &route.path_prefix {
            if !prefix.starts_with('/') {
                errors.push(ValidationError::new(
                    field("path_prefix"),
                    format!("must start with '/', got {:?}", prefix),
                ));
            }
        }
        for method in &route.methods {
            if !KNOWN_METHODS.contains(&method.to_uppercase().as_str()) {
                errors.push(ValidationError::new(
                    field("methods"),
                    format!("not an HTTP method: {:?}", method),
                ));
            }
        }
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!(
                "not a socket address: {:?}",
                config.observability.metrics_address
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
