//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every subsystem emits:
//!     → logging.rs (structured events, keyed by request ID)
//!     → metrics.rs (request counter + latency histogram)
//!
//! Consumed by:
//!     → stdout log aggregation
//!     → Prometheus scraping the metrics listener
//! ```
//!
//! # Design Decisions
//! - Structured fields over free-text log messages
//! - The request ID appears on every per-request event
//! - Exactly one metrics sample per inbound request

pub mod logging;
pub mod metrics;
