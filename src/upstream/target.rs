//! Upstream target and outbound client construction.

use std::time::Duration;

use axum::http::uri::{Authority, PathAndQuery, Scheme};
use axum::http::Uri;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use thiserror::Error;
use url::Url;

use crate::config::UpstreamConfig;
use crate::upstream::error::RelayError;
use crate::upstream::HttpClient;

/// Error building an upstream target from configuration.
///
/// Config validation catches these before startup; this covers direct
/// construction with an unvalidated config.
#[derive(Debug, Error)]
#[error("invalid upstream base_url {url:?}: {reason}")]
pub struct InvalidUpstream {
    pub url: String,
    pub reason: String,
}

impl InvalidUpstream {
    fn new(url: &str, reason: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

/// The single configured upstream, immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct UpstreamTarget {
    scheme: Scheme,
    authority: Authority,
    /// Base path prefix from the configured URL, without a trailing slash.
    base_path: String,
    /// Deadline for each outbound call.
    pub read_timeout: Duration,
}

impl UpstreamTarget {
    /// Build the target from validated configuration.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, InvalidUpstream> {
        let url = Url::parse(&config.base_url)
            .map_err(|e| InvalidUpstream::new(&config.base_url, e.to_string()))?;

        let host = url
            .host_str()
            .ok_or_else(|| InvalidUpstream::new(&config.base_url, "missing host"))?;
        let authority_text = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };
        let authority = authority_text
            .parse::<Authority>()
            .map_err(|e| InvalidUpstream::new(&config.base_url, e.to_string()))?;

        let scheme = Scheme::try_from(url.scheme())
            .map_err(|e| InvalidUpstream::new(&config.base_url, e.to_string()))?;

        Ok(Self {
            scheme,
            authority,
            base_path: url.path().trim_end_matches('/').to_string(),
            read_timeout: Duration::from_millis(config.read_timeout_ms),
        })
    }

    /// The authority requests are forwarded to.
    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Rewrite an inbound URI onto the upstream target.
    ///
    /// Keeps the original path and query, prefixed with the configured base
    /// path when one is set.
    pub fn rewrite_uri(&self, inbound: &Uri) -> Result<Uri, RelayError> {
        let path_and_query = inbound
            .path_and_query()
            .map(PathAndQuery::as_str)
            .unwrap_or("/");

        let mut parts = inbound.clone().into_parts();
        parts.scheme = Some(self.scheme.clone());
        parts.authority = Some(self.authority.clone());
        if self.base_path.is_empty() {
            if parts.path_and_query.is_none() {
                parts.path_and_query = Some(PathAndQuery::from_static("/"));
            }
        } else {
            let joined = format!("{}{}", self.base_path, path_and_query);
            parts.path_and_query = Some(
                PathAndQuery::try_from(joined.as_str())
                    .map_err(|e| RelayError::UpstreamProtocol(e.to_string()))?,
            );
        }

        Uri::from_parts(parts).map_err(|e| RelayError::UpstreamProtocol(e.to_string()))
    }
}

/// Build the pooled outbound client.
///
/// Constructed once at startup and injected into server state; the pool is
/// bounded and timed out per configuration.
pub fn build_client(config: &UpstreamConfig) -> HttpClient {
    let mut connector = HttpConnector::new();
    connector.set_connect_timeout(Some(Duration::from_millis(config.connect_timeout_ms)));
    connector.set_nodelay(true);

    Client::builder(TokioExecutor::new())
        .pool_max_idle_per_host(config.max_connections)
        .pool_idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .build(connector)
}
