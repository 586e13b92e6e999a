//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (host, path, method)
//!     → router.rs (ordered table scan)
//!     → matcher.rs (per-route conditions)
//!     → matched Route, or None
//!
//! Table compilation (at startup):
//!     [[routes]] config entries
//!     → sort by priority
//!     → compile each entry's conditions
//!     → freeze as an immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Explicit table lookup, no framework-driven dispatch
//! - The table is built once at startup and never mutated
//! - Prefix matching only; no regex in the hot path
//! - First match wins, ordered by priority then config order
//! - No match is an explicit outcome handled by the caller, never a
//!   silent default

pub mod matcher;
pub mod router;

pub use matcher::RouteMatcher;
pub use router::{Route, RouteTable};
