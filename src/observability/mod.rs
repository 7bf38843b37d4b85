//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//! ```
//!
//! # Design Decisions
//! - Structured events with named fields, not format strings
//! - RUST_LOG always wins; the config level is only the fallback
//! - Request visibility comes from tower-http's TraceLayer

pub mod logging;
