//! Trace parsing and schema definitions.
//!
//! This module handles:
//! - Reading trace files line by line
//! - Parsing downlink records
//! - Defining the JSON summary schema

pub mod record;
pub mod rx_trace;
pub mod schema;

// Re-export main types
pub use record::{is_downlink, parse_line, DlRecord, Rnti};
pub use rx_trace::{count_lines, TraceReader};
pub use schema::{EntitySummary, SummaryReport};
