//! HTTP boundary subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack, state)
//!     → request.rs (request ID stamping)
//!     → handlers.rs (endpoints; collection flow for /v1/allBerryStats)
//!     → response.rs (error body mapping, panic recovery)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestUuid, X_REQUEST_ID};
pub use response::{ApiError, ErrorBody};
pub use server::{AppState, HttpServer};
