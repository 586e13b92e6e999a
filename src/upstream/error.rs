//! Relay error taxonomy.
//!
//! Every failure is recovered locally and translated to a deterministic
//! status and JSON body; none propagate as process-fatal.

use std::time::Duration;

use axum::http::StatusCode;
use thiserror::Error;

/// Errors answered locally by the relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// No route table entry matched the request.
    #[error("no route matched {path}")]
    RouteNotFound {
        /// Path of the rejected request.
        path: String,
    },

    /// Connection to the upstream could not be established.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The upstream did not respond within the read timeout.
    #[error("upstream timed out after {0:?}")]
    UpstreamTimeout(Duration),

    /// The upstream produced a response the client could not parse, or
    /// the outbound request could not be constructed.
    #[error("upstream protocol error: {0}")]
    UpstreamProtocol(String),
}

impl RelayError {
    /// HTTP status the relay answers with.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            RelayError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            RelayError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            RelayError::UpstreamProtocol(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Stable machine-readable code for the JSON error body.
    pub fn code(&self) -> &'static str {
        match self {
            RelayError::RouteNotFound { .. } => "route_not_found",
            RelayError::UpstreamUnavailable(_) => "upstream_unavailable",
            RelayError::UpstreamTimeout(_) => "upstream_timeout",
            RelayError::UpstreamProtocol(_) => "upstream_protocol_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_code_mapping_is_deterministic() {
        let cases = [
            (
                RelayError::RouteNotFound { path: "/x".into() },
                StatusCode::NOT_FOUND,
                "route_not_found",
            ),
            (
                RelayError::UpstreamUnavailable("refused".into()),
                StatusCode::BAD_GATEWAY,
                "upstream_unavailable",
            ),
            (
                RelayError::UpstreamTimeout(Duration::from_millis(500)),
                StatusCode::GATEWAY_TIMEOUT,
                "upstream_timeout",
            ),
            (
                RelayError::UpstreamProtocol("bad header".into()),
                StatusCode::BAD_GATEWAY,
                "upstream_protocol_error",
            ),
        ];

        for (error, status, code) in cases {
            assert_eq!(error.status(), status);
            assert_eq!(error.code(), code);
        }
    }
}
