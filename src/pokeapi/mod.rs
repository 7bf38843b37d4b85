//! PokeAPI integration subsystem.
//!
//! # Data Flow
//! ```text
//! Configuration (base URL, timeout)
//!     → client.rs (shared reqwest client, pagination, detail lookups)
//!     → types.rs (wire records, error taxonomy)
//! ```
//!
//! # Constraints
//! - One HTTP client per process; every call shares its pool and timeout
//! - Listing order is preserved exactly as the upstream reports it
//! - A single failed call is terminal; nothing is retried

pub mod client;
pub mod types;

pub use client::PokeApiClient;
pub use types::{Berry, NamedResource, PokeApiConfig, PokeApiError, PokeApiResult, ResourcePage};
