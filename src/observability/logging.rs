//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once, at startup
//! - Derive the default filter from configuration (debug flag, log level)
//! - Let RUST_LOG override everything when set

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Build the fallback filter for when RUST_LOG is not set.
fn default_filter(config: &AppConfig) -> String {
    let level = if config.server.debug {
        "debug"
    } else {
        config.observability.log_level.as_str()
    };
    format!("berry_stats={level},tower_http={level}")
}

/// Initialize the global tracing subscriber.
///
/// Call exactly once; a second call would panic, so tests that need a
/// subscriber install their own.
pub fn init(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(config))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
