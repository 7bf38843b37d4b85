//! Poke Berry Stats Service Library

pub mod berries;
pub mod config;
pub mod http;
pub mod observability;
pub mod pokeapi;
pub mod stats;

pub use berries::BerryService;
pub use config::schema::AppConfig;
pub use http::HttpServer;
