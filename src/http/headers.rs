//! Header forwarding policy.
//!
//! # Responsibilities
//! - Copy only the allow-listed request headers upstream
//! - Strip hop-by-hop headers from relayed responses
//!
//! # Design Decisions
//! - Fixed allow-list; Host and connection management never travel upstream
//! - Content framing (Content-Length / Transfer-Encoding) is left to the
//!   outbound client, which frames the forwarded body itself
//! - Multi-valued headers keep all values in order

use axum::http::header::HeaderName;
use axum::http::HeaderMap;

/// Request headers copied to the upstream.
const FORWARDED_REQUEST_HEADERS: &[&str] = &[
    "accept",
    "accept-encoding",
    "accept-language",
    "authorization",
    "content-type",
    "cookie",
    "user-agent",
    "x-request-id",
];

/// Hop-by-hop headers owned by each hop, never relayed.
const HOP_BY_HOP_HEADERS: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Build the upstream header map from the inbound one.
pub fn forwardable_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut filtered = HeaderMap::new();
    for name in FORWARDED_REQUEST_HEADERS {
        let name = HeaderName::from_static(name);
        for value in inbound.get_all(&name) {
            filtered.append(name.clone(), value.clone());
        }
    }
    filtered
}

/// Remove hop-by-hop headers from a relayed response.
pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in HOP_BY_HOP_HEADERS {
        headers.remove(*name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn copies_only_allow_listed_headers() {
        let mut inbound = HeaderMap::new();
        inbound.insert("accept", HeaderValue::from_static("application/json"));
        inbound.insert("authorization", HeaderValue::from_static("Bearer token"));
        inbound.insert("host", HeaderValue::from_static("relay.local"));
        inbound.insert("x-internal-secret", HeaderValue::from_static("boo"));

        let forwarded = forwardable_headers(&inbound);
        assert_eq!(forwarded.get("accept").unwrap(), "application/json");
        assert_eq!(forwarded.get("authorization").unwrap(), "Bearer token");
        assert!(forwarded.get("host").is_none());
        assert!(forwarded.get("x-internal-secret").is_none());
    }

    #[test]
    fn keeps_all_values_of_multi_valued_headers() {
        let mut inbound = HeaderMap::new();
        inbound.append("cookie", HeaderValue::from_static("a=1"));
        inbound.append("cookie", HeaderValue::from_static("b=2"));

        let forwarded = forwardable_headers(&inbound);
        let values: Vec<_> = forwarded.get_all("cookie").iter().collect();
        assert_eq!(values, vec!["a=1", "b=2"]);
    }

    #[test]
    fn strips_hop_by_hop_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("connection", HeaderValue::from_static("close"));
        headers.insert("transfer-encoding", HeaderValue::from_static("chunked"));
        headers.insert("content-type", HeaderValue::from_static("text/plain"));

        strip_hop_by_hop(&mut headers);
        assert!(headers.get("connection").is_none());
        assert!(headers.get("transfer-encoding").is_none());
        assert_eq!(headers.get("content-type").unwrap(), "text/plain");
    }
}
