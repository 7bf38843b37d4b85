//! Descriptive statistics over integer samples.

pub mod describe;

pub use describe::{
    calculate_statistics, frequency_table, FrequencyBucket, Statistics, StatsError,
};
