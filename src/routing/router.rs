//! Route table lookup.
//!
//! # Responsibilities
//! - Compile config entries into matchers at startup
//! - Look up the matching route for a request
//! - Return the matched route or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) ordered scan (acceptable for typical route counts)
//! - Explicit None rather than silent default

use axum::body::Body;
use axum::http::Request;

use crate::config::RouteConfig;
use crate::routing::matcher::RouteMatcher;

/// A compiled route table entry.
#[derive(Debug)]
pub struct Route {
    /// Route identifier, used for logging and metrics labels.
    pub name: String,
    matcher: RouteMatcher,
}

/// Immutable table of compiled routes, highest priority first.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Compile routes from configuration.
    ///
    /// Entries are ordered by descending priority; ties keep config order.
    pub fn from_config(configs: Vec<RouteConfig>) -> Self {
        let mut configs = configs;
        configs.sort_by_key(|c| std::cmp::Reverse(c.priority));

        let routes = configs
            .into_iter()
            .map(|config| Route {
                matcher: RouteMatcher::from_route(&config),
                name: config.name,
            })
            .collect();

        Self { routes }
    }

    /// Find the first route matching the request, if any.
    pub fn match_request(&self, req: &Request<Body>) -> Option<&Route> {
        self.routes.iter().find(|route| route.matcher.matches(req))
    }

    /// Number of compiled routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True when no routes are configured.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(name: &str, prefix: &str, priority: u32) -> RouteConfig {
        RouteConfig {
            name: name.into(),
            host: None,
            path_prefix: Some(prefix.into()),
            methods: Vec::new(),
            priority,
        }
    }

    fn get(path: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("http://localhost{}", path))
            .body(Body::default())
            .unwrap()
    }

    #[test]
    fn first_match_wins_by_priority() {
        let table = RouteTable::from_config(vec![
            route("catch-all", "/", 0),
            route("api", "/api", 10),
        ]);

        assert_eq!(table.match_request(&get("/api/todos")).unwrap().name, "api");
        assert_eq!(table.match_request(&get("/other")).unwrap().name, "catch-all");
    }

    #[test]
    fn equal_priority_keeps_config_order() {
        let table = RouteTable::from_config(vec![
            route("first", "/api", 0),
            route("second", "/api", 0),
        ]);

        assert_eq!(table.match_request(&get("/api")).unwrap().name, "first");
    }

    #[test]
    fn no_match_is_none() {
        let table = RouteTable::from_config(vec![route("api", "/api", 0)]);
        assert!(table.match_request(&get("/static/app.js")).is_none());
    }

    #[test]
    fn empty_table_matches_nothing() {
        let table = RouteTable::from_config(Vec::new());
        assert!(table.is_empty());
        assert!(table.match_request(&get("/")).is_none());
    }

    #[test]
    fn method_constraint_is_enforced() {
        let mut config = route("writes", "/api", 0);
        config.methods = vec!["POST".into()];
        let table = RouteTable::from_config(vec![config]);

        let post = Request::builder()
            .method("POST")
            .uri("http://localhost/api/todos")
            .body(Body::default())
            .unwrap();
        assert!(table.match_request(&post).is_some());
        assert!(table.match_request(&get("/api/todos")).is_none());
    }
}
