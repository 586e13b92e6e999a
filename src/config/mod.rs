//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! TOML file
//!     → loader.rs (read + deserialize)
//!     → validation.rs (semantic checks, all failures collected)
//!     → RelayConfig, validated and immutable
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - Every field defaults, so a minimal file or no file works
//! - Serde owns the syntactic layer; validation.rs owns the semantic one
//! - Any load or validation failure at startup is fatal

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::load_config;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::RelayConfig;
pub use schema::RouteConfig;
pub use schema::UpstreamConfig;
