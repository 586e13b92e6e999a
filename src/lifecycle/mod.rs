//! Process lifecycle.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     load config → validate → build relay state → bind listener
//!
//! Shutdown (shutdown.rs):
//!     trigger → stop accepting → drain in-flight requests → exit
//!
//! Signals (signals.rs):
//!     SIGTERM / SIGINT → shutdown trigger
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then core, then the listener
//! - Fail fast: any startup error is fatal, traffic only when ready
//! - Draining is delegated to Axum's graceful shutdown

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownWatcher};
