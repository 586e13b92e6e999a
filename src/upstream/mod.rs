//! Upstream subsystem.
//!
//! # Data Flow
//! ```text
//! Matched request
//!     → target.rs (URI rewrite onto the configured authority)
//!     → forward.rs (single outbound call under the read timeout)
//!     → error.rs (failures translated to the local error taxonomy)
//! ```
//!
//! # Design Decisions
//! - One explicitly constructed pooled client for the process, injected
//!   into server state; no global singletons
//! - Every outbound call has a deadline; exceeding it is a 504, never a
//!   hang
//! - Exactly one outbound call per inbound request; no retries
//! - The connection pool is the only shared mutable resource and is
//!   internally synchronized

pub mod error;
pub mod forward;
pub mod target;

use axum::body::Body;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;

pub use error::RelayError;
pub use forward::forward;
pub use target::{build_client, InvalidUpstream, UpstreamTarget};

/// Pooled outbound HTTP client shared by all inbound requests.
pub type HttpClient = Client<HttpConnector, Body>;
