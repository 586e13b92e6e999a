//! Route match conditions.
//!
//! # Responsibilities
//! - Evaluate host, path-prefix, and method conditions against a request
//! - Combine one route's conditions with AND semantics
//!
//! # Design Decisions
//! - The condition set is closed (it comes from route config), so
//!   conditions are an enum rather than trait objects
//! - Host comparison is case-insensitive (per HTTP spec); path prefixes
//!   are case-sensitive
//! - A route with no conditions matches every request
//! - No regex to guarantee O(n) matching

use axum::body::Body;
use axum::http::{Method, Request};

use crate::config::RouteConfig;

/// One match condition compiled from a route entry.
#[derive(Debug, Clone)]
enum Condition {
    /// Exact Host header value.
    Host(String),
    /// Case-sensitive path prefix.
    PathPrefix(String),
    /// Set of allowed methods.
    Methods(Vec<Method>),
}

impl Condition {
    fn holds(&self, req: &Request<Body>) -> bool {
        match self {
            Condition::Host(expected) => req
                .headers()
                .get("host")
                .and_then(|value| value.to_str().ok())
                .is_some_and(|host| host.eq_ignore_ascii_case(expected)),
            Condition::PathPrefix(prefix) => req.uri().path().starts_with(prefix),
            Condition::Methods(allowed) => allowed.contains(req.method()),
        }
    }
}

/// All conditions of one route entry, AND-combined.
#[derive(Debug, Clone)]
pub struct RouteMatcher {
    conditions: Vec<Condition>,
}

impl RouteMatcher {
    /// Compile the conditions of a route entry.
    ///
    /// Method names are uppercased before parsing; invalid names were
    /// already rejected by config validation and are skipped here.
    pub fn from_route(config: &RouteConfig) -> Self {
        let mut conditions = Vec::new();
        if let Some(host) = &config.host {
            conditions.push(Condition::Host(host.clone()));
        }
        if let Some(prefix) = &config.path_prefix {
            conditions.push(Condition::PathPrefix(prefix.clone()));
        }
        if !config.methods.is_empty() {
            let allowed = config
                .methods
                .iter()
                .filter_map(|name| name.to_uppercase().parse::<Method>().ok())
                .collect();
            conditions.push(Condition::Methods(allowed));
        }
        Self { conditions }
    }

    /// True when every condition holds. No conditions means wildcard.
    pub fn matches(&self, req: &Request<Body>) -> bool {
        self.conditions.iter().all(|condition| condition.holds(req))
    }
}
