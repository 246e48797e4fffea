//! Output JSON schema definitions for summary data.
//!
//! This module defines the structure of the JSON summary we write to disk.
//! Schema is versioned to allow future evolution.

use super::record::Rnti;
use serde::{Deserialize, Serialize};

/// Top-level summary structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace file the summary was built from
    pub source: String,

    /// Lines in the trace file
    pub total_lines: usize,

    /// Samples that passed the downsampling gate
    pub retained_samples: usize,

    /// Per-RNTI statistics, ascending by RNTI
    pub entities: Vec<EntitySummary>,

    /// Timestamp when summary was generated
    pub generated_at: String,
}

/// Statistics of one RNTI's retained samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub rnti: Rnti,

    /// Number of retained samples
    pub length: usize,

    pub mcs_avg: f64,
    pub mcs_std: f64,
    pub sinr_avg: f64,
    pub sinr_std: f64,
}
