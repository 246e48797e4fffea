//! Single-line parsing of downlink trace records.
//!
//! A downlink line looks like:
//!
//! ```text
//! DL 0.102500 12 3 5 0 13 1 7 0 1545 22 0 18.3421 0 0.000
//! ```
//!
//! Only four fields are extracted: time, RNTI, MCS and SINR.

use crate::utils::config::{
    DOWNLINK_MARKER, MCS_FIELD, MIN_FIELD_COUNT, RNTI_FIELD, SINR_FIELD, TIME_FIELD,
};
use crate::utils::error::RecordError;
use std::str::FromStr;

/// Radio Network Temporary Identifier
pub type Rnti = i64;

/// The fields of one downlink record that the aggregator consumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DlRecord {
    /// Simulation time in seconds
    pub time: f64,

    /// Terminal the packet was received by
    pub rnti: Rnti,

    /// Modulation and coding scheme index
    pub mcs: i64,

    /// SINR in dB
    pub sinr: f64,
}

/// Check whether a raw line is tagged as a downlink record
///
/// **Public** - cheap pre-filter used by the scan statistics
pub fn is_downlink(line: &str) -> bool {
    line.starts_with(DOWNLINK_MARKER)
}

/// Parse one trace line into a downlink record
///
/// **Public** - main entry point for line parsing
///
/// # Errors
/// * `RecordError::NotDownlink` - line does not start with `DL`
/// * `RecordError::TooFewFields` - fewer than 14 whitespace-separated tokens
/// * `RecordError::InvalidField` - time, RNTI, MCS or SINR is not numeric
pub fn parse_line(line: &str) -> Result<DlRecord, RecordError> {
    if !is_downlink(line) {
        return Err(RecordError::NotDownlink);
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < MIN_FIELD_COUNT {
        return Err(RecordError::TooFewFields(parts.len()));
    }

    Ok(DlRecord {
        time: parse_field(&parts, TIME_FIELD, "time")?,
        rnti: parse_field(&parts, RNTI_FIELD, "rnti")?,
        mcs: parse_field(&parts, MCS_FIELD, "mcs")?,
        sinr: parse_field(&parts, SINR_FIELD, "sinr")?,
    })
}

/// Parse a positional token
///
/// **Private** - internal helper for parse_line
fn parse_field<T: FromStr>(
    parts: &[&str],
    index: usize,
    field: &'static str,
) -> Result<T, RecordError> {
    let raw = parts[index];
    raw.parse::<T>().map_err(|_| RecordError::InvalidField {
        field,
        value: raw.to_string(),
    })
}
