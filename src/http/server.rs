//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with the relay handler
//! - Wire up middleware (tracing, limits, request ID, timeout)
//! - Dispatch requests through the route table
//! - Forward matched requests to the upstream
//! - Record one metrics sample per request

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::Response;
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::request::{RequestIdExt, RequestIdLayer};
use crate::http::response::error_response;
use crate::lifecycle::ShutdownWatcher;
use crate::observability::metrics;
use crate::routing::RouteTable;
use crate::upstream::{self, HttpClient, InvalidUpstream, RelayError, UpstreamTarget};

/// Application state injected into handlers.
///
/// Built once at startup; the client pool lives here, not in a global.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub target: Arc<UpstreamTarget>,
    pub client: HttpClient,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, InvalidUpstream> {
        let table = Arc::new(RouteTable::from_config(config.routes.clone()));
        if table.is_empty() {
            tracing::warn!("No routes configured; every request will be answered 404 locally");
        }
        let target = Arc::new(UpstreamTarget::from_config(&config.upstream)?);
        let client = upstream::build_client(&config.upstream);

        let state = AppState {
            table,
            target,
            client,
        };
        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(relay_handler))
            .route("/", any(relay_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(GlobalConcurrencyLimitLayer::new(
                config.listener.max_connections,
            ))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownWatcher,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.config.routes.len(),
            upstream = %self.config.upstream.base_url,
            "HTTP relay starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.triggered().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP relay stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Main relay handler.
/// Looks up the route and forwards the request to the upstream.
async fn relay_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let request_id = request.request_id().to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Relaying request"
    );

    let route_name = match state.table.match_request(&request) {
        Some(route) => route.name.clone(),
        None => {
            tracing::warn!(request_id = %request_id, path = %path, "No route matched");
            let error = RelayError::RouteNotFound { path };
            metrics::record_request(&method, error.status().as_u16(), "none", start);
            return error_response(&error);
        }
    };

    match upstream::forward(&state.client, &state.target, request).await {
        Ok(response) => {
            metrics::record_request(&method, response.status().as_u16(), &route_name, start);
            response
        }
        Err(error) => {
            tracing::error!(
                request_id = %request_id,
                route = %route_name,
                error = %error,
                "Upstream call failed"
            );
            metrics::record_request(&method, error.status().as_u16(), &route_name, start);
            error_response(&error)
        }
    }
}
