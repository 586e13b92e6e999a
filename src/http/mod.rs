//! Inbound HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum wiring, middleware, dispatch)
//!     → request.rs (request ID)
//!     → headers.rs (forwarding policy)
//!     → [route table decides match]
//!     → [upstream client forwards]
//!     → response.rs (locally synthesized error answers)
//!     → back to the caller
//! ```

pub mod headers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestId, RequestIdExt, RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
