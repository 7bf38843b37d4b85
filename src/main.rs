//! Poke Berry Stats API
//!
//! An HTTP service that aggregates growth-time statistics across the whole
//! PokeAPI berry catalog.
//!
//! # Request Flow
//!
//! ```text
//! GET /v1/allBerryStats
//!     → http (Axum router, timeout / request ID / trace / CORS layers)
//!     → berries (collection flow)
//!     → pokeapi (paginated listing, then one detail call per berry)
//!     → stats (min / max / mean / median / variance / frequency)
//!     → JSON response
//! ```

use clap::Parser;
use tokio::net::TcpListener;

use berry_stats::config;
use berry_stats::http::HttpServer;
use berry_stats::observability::logging;

/// Aggregate berry growth statistics behind an HTTP endpoint.
#[derive(Parser, Debug)]
#[command(name = "berry-stats", version, about)]
struct Args {
    /// Bind host, overriding configuration.
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overriding configuration.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration (file + environment), then CLI overrides
    let mut config = config::load_default()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Initialize tracing subscriber
    logging::init(&config);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "berry-stats starting");
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        pokeapi_base_url = %config.pokeapi.base_url,
        pokeapi_timeout_secs = config.pokeapi.timeout_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
