//! Wire records and error definitions for the upstream PokeAPI.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export PokeApiConfig from config module to avoid duplication
pub use crate::config::schema::PokeApiConfig;

/// One entry of the paginated berry listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the paginated berry listing.
///
/// The upstream also reports `count` and `previous`; both are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePage {
    pub results: Vec<NamedResource>,
    /// Absolute URL of the next page, or null on the last page.
    #[serde(default)]
    pub next: Option<String>,
}

/// Berry detail record, reduced to the fields this service consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Berry {
    pub name: String,
    pub growth_time: i64,
}

/// Errors that can occur while talking to PokeAPI.
#[derive(Debug, Error)]
pub enum PokeApiError {
    /// Caller asked for a berry with an empty (after trimming) name.
    #[error("Berry name cannot be empty")]
    EmptyName,

    /// Connection, timeout, non-success status, or body decode failure.
    #[error("Error calling PokeAPI: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base URL is not a usable URL.
    #[error("Invalid PokeAPI base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    /// A listing page carried a next link that is not a valid URL.
    #[error("Invalid next page link '{link}': {source}")]
    InvalidNextLink {
        link: String,
        source: url::ParseError,
    },
}

/// Result type for PokeAPI operations.
pub type PokeApiResult<T> = Result<T, PokeApiError>;
