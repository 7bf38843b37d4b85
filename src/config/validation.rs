//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, usable upstream URL)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use url::Url;

use crate::config::schema::AppConfig;

/// One semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. "pokeapi.base_url".
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check semantic constraints on an already-deserialized configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.pokeapi.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError {
            field: "pokeapi.base_url".to_string(),
            message: format!("unsupported scheme '{}', expected http or https", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError {
            field: "pokeapi.base_url".to_string(),
            message: format!("not a valid URL: {e}"),
        }),
    }

    if config.pokeapi.timeout_secs == 0 {
        errors.push(ValidationError {
            field: "pokeapi.timeout_secs".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "server.request_timeout_secs".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    if config.graph.dpi == 0 {
        errors.push(ValidationError {
            field: "graph.dpi".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
