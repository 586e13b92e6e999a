//! Single-shot request forwarding.

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use hyper::body::Incoming;

use crate::http::headers::{forwardable_headers, strip_hop_by_hop};
use crate::upstream::error::RelayError;
use crate::upstream::target::UpstreamTarget;
use crate::upstream::HttpClient;

/// Forward a matched request to the upstream and relay its response.
///
/// Exactly one outbound call is made; there is no retry. The call is bounded
/// by the target's read timeout. Dropping the returned future (inbound side
/// gone) aborts the outbound call best-effort.
pub async fn forward(
    client: &HttpClient,
    target: &UpstreamTarget,
    request: Request<Body>,
) -> Result<Response, RelayError> {
    let (parts, body) = request.into_parts();
    let uri = target.rewrite_uri(&parts.uri)?;

    let mut builder = Request::builder().method(parts.method).uri(uri);
    if let Some(headers) = builder.headers_mut() {
        // Only the allow-listed subset travels upstream; the request ID is
        // part of it and was ensured by the request-ID layer.
        *headers = forwardable_headers(&parts.headers);
    }
    let outbound = builder
        .body(body)
        .map_err(|e| RelayError::UpstreamProtocol(e.to_string()))?;

    let call = client.request(outbound);
    let response: axum::http::Response<Incoming> =
        match tokio::time::timeout(target.read_timeout, call).await {
            Err(_) => return Err(RelayError::UpstreamTimeout(target.read_timeout)),
            Ok(Err(e)) if e.is_connect() => {
                return Err(RelayError::UpstreamUnavailable(e.to_string()))
            }
            Ok(Err(e)) => return Err(RelayError::UpstreamProtocol(e.to_string())),
            Ok(Ok(response)) => response,
        };

    // Status and headers relay verbatim, minus connection-level headers the
    // outbound hop owns.
    let (mut parts, body) = response.into_parts();
    strip_hop_by_hop(&mut parts.headers);
    Ok(Response::from_parts(parts, Body::new(body)))
}
