//! Aggregation of downlink records into per-RNTI series and metrics.
//!
//! This module transforms parsed trace lines into:
//! - Gated per-RNTI sample series
//! - Scan statistics
//! - Per-RNTI mean/deviation summaries

pub mod gate;
pub mod metrics;
pub mod series;

// Re-export main types and functions
pub use gate::{GateConfig, TimeGate};
pub use metrics::{mean, population_std, summarize_all, summarize_entity};
pub use series::{
    aggregate, aggregate_with, Aggregation, EntitySeries, Sample, ScanStats, SeriesBuilder,
    SeriesMap,
};
