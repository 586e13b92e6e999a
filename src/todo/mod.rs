//! Typed client for the upstream todo API.
//!
//! The relay forwards opaque traffic; this module speaks the upstream's
//! own API for tooling that needs structured access (the management CLI,
//! smoke tests).
//!
//! # Design Decisions
//! - One trait, two implementations: `HttpTodoClient` over the network and
//!   `StaticTodoClient` with fixed data for offline use
//! - Upstream 404 on a lookup is `None`; on a mutation it is an error
//! - The HTTP implementation shares the relay's upstream config (base URL,
//!   connect/read timeouts)

pub mod client;
pub mod static_client;
pub mod types;

pub use client::{HttpTodoClient, TodoService};
pub use static_client::StaticTodoClient;
pub use types::{Todo, TodoClientError, TodoDraft};
