//! Core logic for computing descriptive statistics and frequency tables.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors from statistics computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    /// Statistics over an empty sample are undefined.
    #[error("Data list is empty")]
    EmptyInput,
}

/// Occurrence count for one distinct sample value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyBucket {
    pub value: i64,
    pub count: u64,
}

/// Descriptive statistics for one integer sample.
///
/// `variance` is the population variance (divisor N). `frequency` is sorted
/// ascending by value and its counts sum to the sample length.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub variance: f64,
    pub frequency: Vec<FrequencyBucket>,
}

/// Compute min, max, mean, median, population variance, and the frequency
/// table for a sample.
pub fn calculate_statistics(data: &[i64]) -> Result<Statistics, StatsError> {
    if data.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let n = data.len() as f64;
    let min = data.iter().copied().min().ok_or(StatsError::EmptyInput)? as f64;
    let max = data.iter().copied().max().ok_or(StatsError::EmptyInput)? as f64;
    let mean = data.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = data
        .iter()
        .map(|&v| {
            let deviation = v as f64 - mean;
            deviation * deviation
        })
        .sum::<f64>()
        / n;

    Ok(Statistics {
        min,
        max,
        mean,
        median: median(data),
        variance,
        frequency: frequency_table(data),
    })
}

/// Count occurrences of each distinct value, emitted in ascending value order.
pub fn frequency_table(data: &[i64]) -> Vec<FrequencyBucket> {
    let mut counts: BTreeMap<i64, u64> = BTreeMap::new();
    for &value in data {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(value, count)| FrequencyBucket { value, count })
        .collect()
}

/// Median of a non-empty sample: the middle value, or the average of the two
/// middle values when the length is even.
fn median(data: &[i64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}
