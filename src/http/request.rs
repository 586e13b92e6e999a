//! Request identity.
//!
//! # Responsibilities
//! - Ensure every request carries a unique request ID (UUID v4)
//! - Expose the ID to handlers via a request extension
//!
//! # Design Decisions
//! - The ID is added as early as possible so it reaches every log line
//! - A client-supplied x-request-id is kept, not replaced

use std::task::{Context, Poll};

use axum::http::{HeaderName, HeaderValue, Request};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Request ID stored in request extensions.
#[derive(Debug, Clone)]
pub struct RequestId(String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Convenience accessor for the request ID extension.
pub trait RequestIdExt {
    /// The request ID, or "unknown" before the layer has run.
    fn request_id(&self) -> &str;
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> &str {
        self.extensions()
            .get::<RequestId>()
            .map(RequestId::as_str)
            .unwrap_or("unknown")
    }
}

/// Layer ensuring a request ID header and extension on every request.
#[derive(Debug, Clone)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Service wrapper produced by [`RequestIdLayer`].
#[derive(Debug, Clone)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequestIdService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let id = req
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        if !req.headers().contains_key(X_REQUEST_ID) {
            if let Ok(value) = HeaderValue::from_str(&id) {
                req.headers_mut()
                    .insert(HeaderName::from_static(X_REQUEST_ID), value);
            }
        }
        req.extensions_mut().insert(RequestId(id));

        self.inner.call(req)
    }
}
