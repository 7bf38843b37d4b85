//! Berry statistics response records and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pokeapi::PokeApiError;
use crate::stats::StatsError;

/// Occurrence count for one growth time across the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthTimeFrequency {
    pub growth_time: i64,
    pub frequency: u64,
}

/// Aggregated growth-time statistics for the full berry catalog.
///
/// `berries_names` keeps the upstream listing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BerryStatsResponse {
    pub berries_names: Vec<String>,
    pub min_growth_time: f64,
    pub median_growth_time: f64,
    pub max_growth_time: f64,
    pub variance_growth_time: f64,
    pub mean_growth_time: f64,
    pub frequency_growth_time: Vec<GrowthTimeFrequency>,
}

/// Failure of the berry statistics collection flow.
///
/// Every underlying failure collapses into this one kind with the original
/// message embedded, so callers see a single error surface.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    /// Create a service error carrying the given message verbatim.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<PokeApiError> for ServiceError {
    fn from(err: PokeApiError) -> Self {
        Self::new(format!("Error getting berry stats: {err}"))
    }
}

impl From<StatsError> for ServiceError {
    fn from(err: StatsError) -> Self {
        Self::new(format!("Error getting berry stats: {err}"))
    }
}
