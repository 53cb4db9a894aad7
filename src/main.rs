//! CORS Forwarding Proxy
//!
//! A small HTTP proxy built with Tokio and Axum. It accepts
//! `GET /proxy?url=<target>`, fetches the target server-side, and relays
//! the upstream status, content type, and body back to the caller with
//! permissive cross-origin headers, so browser-based callers can reach
//! origins that would otherwise be blocked by same-origin policy.
//!
//! # Request Flow
//!
//! ```text
//! Client Request
//!     → http server (Axum setup, trace layer)
//!     → cors middleware (preflight short-circuit, CORS headers)
//!     → proxy handler (extract target URL)
//!     → upstream fetch (one outbound GET)
//!     → status / content-type / body relayed to client
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cors_proxy::config::{self, ProxyConfig};
use cors_proxy::http::HttpServer;
use cors_proxy::lifecycle::Shutdown;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cors-proxy", about = "HTTP forwarding proxy with permissive CORS")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cors_proxy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("cors-proxy v0.1.0 starting");

    // Load configuration (defaults when no file is given), then apply
    // environment overrides
    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => ProxyConfig::default(),
    };
    config::apply_env(&mut config)?;

    tracing::info!(
        host = %config.listener.host,
        port = config.listener.port,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Wire Ctrl+C to graceful shutdown
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_ctrl_c();

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
