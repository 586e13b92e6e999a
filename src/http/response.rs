//! Response synthesis for locally answered requests.
//!
//! # Responsibilities
//! - Map relay errors to their deterministic status and JSON body
//!
//! # Design Decisions
//! - Bodies carry a stable machine-readable `error` code, nothing else
//! - Upstream responses are relayed elsewhere; only local answers are
//!   synthesized here

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::upstream::RelayError;

/// Build the JSON error response for a relay error.
pub fn error_response(error: &RelayError) -> Response {
    (error.status(), Json(json!({ "error": error.code() }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::time::Duration;

    #[tokio::test]
    async fn timeout_maps_to_504_with_code() {
        let response = error_response(&RelayError::UpstreamTimeout(Duration::from_millis(750)));
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "upstream_timeout");
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_code() {
        let response = error_response(&RelayError::RouteNotFound { path: "/x".into() });
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "route_not_found");
    }
}
