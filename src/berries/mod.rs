//! Berry statistics collection subsystem.

pub mod service;
pub mod types;

pub use service::BerryService;
pub use types::{BerryStatsResponse, GrowthTimeFrequency, ServiceError};
