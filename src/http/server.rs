//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (timeout, request ID, tracing, CORS, panic recovery)
//! - Own the application state handed to handlers
//! - Bind server to listener and shut down gracefully

use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::berries::BerryService;
use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::http::response::handle_panic;
use crate::pokeapi::{PokeApiClient, PokeApiResult};

/// Application state injected into handlers.
///
/// Cloned per request; the only shared resource inside is the upstream
/// client's connection pool.
#[derive(Clone)]
pub struct AppState {
    pub berries: BerryService,
}

/// HTTP server for the berry statistics service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> PokeApiResult<Self> {
        // Initialize subsystems
        let client = PokeApiClient::new(&config.pokeapi)?;
        let state = AppState {
            berries: BerryService::new(client),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers are added innermost first; the panic recovery added last sits
    /// outermost so nothing escapes it.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health_check))
            .route("/v1/allBerryStats", get(handlers::get_berry_stats))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
            .layer(CorsLayer::permissive())
            .layer(CatchPanicLayer::custom(handle_panic))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        // Serve with graceful shutdown
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
