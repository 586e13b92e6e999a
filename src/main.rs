//! HTTP relay service.
//!
//! Accepts inbound HTTP requests, forwards routed requests to a single
//! configured upstream through a pooled client, and relays the upstream
//! response back to the caller. Unrouted requests and upstream failures are
//! answered locally with a deterministic status and JSON error body.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                 HTTP RELAY                    │
//!                      │                                               │
//!   Client Request     │  ┌─────────┐   ┌──────────┐   ┌──────────┐   │
//!   ───────────────────┼─▶│  http   │──▶│ routing  │──▶│ upstream │───┼──▶ Upstream
//!                      │  │ server  │   │  table   │   │  client  │   │    Server
//!   Client Response    │  └─────────┘   └──────────┘   └──────────┘   │
//!   ◀──────────────────┼───────┴─── response relay ────────┘          │
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐  │
//!                      │  │          Cross-Cutting Concerns          │  │
//!                      │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐ │  │
//!                      │  │  │ config │ │observability│ │lifecycle│ │  │
//!                      │  │  └────────┘ └─────────────┘ └─────────┘ │  │
//!                      │  └─────────────────────────────────────────┘  │
//!                      └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use http_relay::config::{self, RelayConfig};
use http_relay::http::HttpServer;
use http_relay::lifecycle::{signals, Shutdown};
use http_relay::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "http-relay", about = "HTTP relay service", long_about = None)]
struct Args {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Config load failure is the only fatal error path: exit before binding.
    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => RelayConfig::default(),
    };

    logging::init_tracing(&config.observability.log_level);

    tracing::info!("http-relay v0.1.0 starting");
    tracing::info!(
        upstream = %config.upstream.base_url,
        routes = config.routes.len(),
        in_flight_cap = config.listener.max_connections,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listener bound");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.watcher();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
