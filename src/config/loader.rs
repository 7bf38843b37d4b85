//! Configuration loading from disk and the environment.
//!
//! Layering, lowest precedence first: built-in defaults, then an optional
//! `berry-stats.toml` in the working directory, then environment variables
//! using the deployment's historical names (API_HOST, POKEAPI_BASE_URL, ...).

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Conventional config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "berry-stats.toml";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env {
        var: String,
        value: String,
        reason: String,
    },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env { var, value, reason } => {
                write!(f, "Invalid value '{}' for {}: {}", value, var, reason)
            }
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file plus the environment.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut config: AppConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load configuration for startup: the conventional file when present,
/// defaults otherwise, environment overrides on top.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let path = Path::new(DEFAULT_CONFIG_PATH);
    if path.exists() {
        return load_config(path);
    }

    let mut config = AppConfig::default();
    apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay environment variables onto a configuration.
///
/// Lookup is injected so tests can run without touching process globals.
fn apply_env_overrides<F>(config: &mut AppConfig, get: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = get("API_HOST") {
        config.server.host = value;
    }
    if let Some(value) = get("API_PORT") {
        config.server.port = parse_env("API_PORT", &value)?;
    }
    if let Some(value) = get("DEBUG") {
        config.server.debug = parse_env_bool("DEBUG", &value)?;
    }
    if let Some(value) = get("POKEAPI_BASE_URL") {
        config.pokeapi.base_url = value;
    }
    if let Some(value) = get("POKEAPI_TIMEOUT") {
        config.pokeapi.timeout_secs = parse_env("POKEAPI_TIMEOUT", &value)?;
    }
    if let Some(value) = get("CACHE_ENABLED") {
        config.cache.enabled = parse_env_bool("CACHE_ENABLED", &value)?;
    }
    if let Some(value) = get("CACHE_TTL") {
        config.cache.ttl_secs = parse_env("CACHE_TTL", &value)?;
    }
    if let Some(value) = get("GRAPH_DPI") {
        config.graph.dpi = parse_env("GRAPH_DPI", &value)?;
    }
    if let Some(value) = get("GRAPH_FORMAT") {
        config.graph.format = value;
    }
    Ok(())
}

fn parse_env<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Env {
        var: var.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Strict boolean parsing. Unknown spellings are errors rather than truthy,
/// so "False" disables a flag instead of silently enabling it.
fn parse_env_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Env {
            var: var.to_string(),
            value: value.to_string(),
            reason: "expected one of 1/0, true/false, yes/no, on/off".to_string(),
        }),
    }
}
