//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! berry-stats.toml (optional)
//!     → loader.rs (parse & deserialize, defaults when absent)
//!     → environment overrides (historical variable names)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal or absent configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_default, ConfigError, DEFAULT_CONFIG_PATH};
pub use schema::AppConfig;
pub use schema::PokeApiConfig;
pub use schema::ServerConfig;
