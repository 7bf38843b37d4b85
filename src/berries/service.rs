//! Collection flow: listing, per-berry detail, aggregation, assembly.

use crate::berries::types::{BerryStatsResponse, GrowthTimeFrequency, ServiceError};
use crate::pokeapi::PokeApiClient;
use crate::stats;

/// Orchestrates one full pass over the berry catalog.
#[derive(Clone)]
pub struct BerryService {
    client: PokeApiClient,
}

impl BerryService {
    /// Create a new service around an existing client.
    pub fn new(client: PokeApiClient) -> Self {
        Self { client }
    }

    /// Fetch the whole catalog and aggregate growth-time statistics.
    ///
    /// Details are fetched one at a time in listing order; names come from
    /// the detail record. Any failure aborts the pass and surfaces as a
    /// single `ServiceError`; no partial aggregate is ever returned.
    pub async fn collect_all_berry_stats(&self) -> Result<BerryStatsResponse, ServiceError> {
        let references = self.client.list_berries().await?;
        tracing::debug!(count = references.len(), "Fetched berry listing");

        let mut berries_names = Vec::with_capacity(references.len());
        let mut growth_times = Vec::with_capacity(references.len());
        for reference in &references {
            let berry = self.client.get_berry(&reference.name).await?;
            berries_names.push(berry.name);
            growth_times.push(berry.growth_time);
        }

        let statistics = stats::calculate_statistics(&growth_times)?;

        Ok(BerryStatsResponse {
            berries_names,
            min_growth_time: statistics.min,
            median_growth_time: statistics.median,
            max_growth_time: statistics.max,
            variance_growth_time: statistics.variance,
            mean_growth_time: statistics.mean,
            frequency_growth_time: statistics
                .frequency
                .into_iter()
                .map(|bucket| GrowthTimeFrequency {
                    growth_time: bucket.value,
                    frequency: bucket.count,
                })
                .collect(),
        })
    }
}
