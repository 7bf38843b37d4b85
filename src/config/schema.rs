//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so a missing file or partial file still yields a
//! runnable configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for the berry statistics service.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Inbound HTTP listener settings.
    pub server: ServerConfig,

    /// Upstream PokeAPI client settings.
    pub pokeapi: PokeApiConfig,

    /// Response cache settings (recognized, not consulted by the flow).
    pub cache: CacheConfig,

    /// Chart rendering settings (recognized, not consulted by the flow).
    pub graph: GraphConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Inbound HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host (e.g. "0.0.0.0").
    pub host: String,

    /// Bind port.
    pub port: u16,

    /// Total time budget for one inbound request, in seconds. Covers the
    /// whole upstream catalog walk, so it is deliberately generous.
    pub request_timeout_secs: u64,

    /// Debug mode; lowers the default log level to debug.
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            request_timeout_secs: 120,
            debug: false,
        }
    }
}

/// Upstream PokeAPI client configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PokeApiConfig {
    /// Base URL of the upstream API.
    pub base_url: String,

    /// Per-request timeout in seconds, shared by every upstream call.
    pub timeout_secs: u64,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Response cache configuration.
///
/// Accepted for compatibility with existing deployment environments; the
/// collection flow always fetches fresh data.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether response caching is enabled.
    pub enabled: bool,

    /// Time to live for cached entries, in seconds.
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            ttl_secs: 3600,
        }
    }
}

/// Chart rendering configuration.
///
/// Accepted for compatibility with existing deployment environments; nothing
/// in the service renders charts.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GraphConfig {
    /// Resolution for rendered charts, in dots per inch.
    pub dpi: u32,

    /// Image format for rendered charts.
    pub format: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            format: "png".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log level when RUST_LOG is not set
    /// (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
