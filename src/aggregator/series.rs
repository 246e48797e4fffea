//! Per-RNTI accumulation of gated downlink samples.
//!
//! One pass over the trace builds a map from RNTI to the samples that made it
//! through the global time gate. The map is ordered so that every consumer
//! sees terminals in ascending RNTI order.

use super::gate::{GateConfig, TimeGate};
use crate::parser::record::{parse_line, DlRecord, Rnti};
use crate::parser::rx_trace::{count_lines, TraceReader};
use crate::utils::config::PROGRESS_INTERVAL;
use crate::utils::error::{ParseError, RecordError};
use log::{debug, info, trace};
use std::collections::BTreeMap;
use std::path::Path;

/// One retained measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub mcs: i64,
    pub sinr: f64,
}

/// Retained samples of one RNTI, in retention order
///
/// MCS and SINR are stored as pairs, so both sequences always have the
/// same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntitySeries {
    samples: Vec<Sample>,
}

impl EntitySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn mcs_values(&self) -> Vec<i64> {
        self.samples.iter().map(|s| s.mcs).collect()
    }

    pub fn sinr_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.sinr).collect()
    }
}

impl FromIterator<Sample> for EntitySeries {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

/// Map from RNTI to its retained samples
pub type SeriesMap = BTreeMap<Rnti, EntitySeries>;

/// Counters collected during a scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Every line in the file
    pub total_lines: usize,

    /// Lines tagged `DL`
    pub downlink_lines: usize,

    /// `DL` lines skipped for too few fields or non-numeric values
    pub malformed_lines: usize,

    /// Well-formed records dropped by the gate
    pub gated_out: usize,

    /// Records appended to a series
    pub retained: usize,
}

impl ScanStats {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Lines: {} | Downlink: {} | Malformed: {} | Gated out: {} | Retained: {}",
            self.total_lines,
            self.downlink_lines,
            self.malformed_lines,
            self.gated_out,
            self.retained
        )
    }
}

/// Result of aggregating one trace file
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Retained samples per RNTI; only RNTIs with at least one sample appear
    pub series: SeriesMap,

    /// Lines in the trace file
    pub total_lines: usize,

    pub stats: ScanStats,
}

/// In-memory accumulator that applies the gate record by record
///
/// **Public** - usable without a file, e.g. on records from another source
#[derive(Debug, Default)]
pub struct SeriesBuilder {
    gate: TimeGate,
    series: SeriesMap,
    stats: ScanStats,
}

impl SeriesBuilder {
    pub fn new(config: GateConfig) -> Self {
        Self {
            gate: TimeGate::new(config),
            series: SeriesMap::new(),
            stats: ScanStats::default(),
        }
    }

    /// Feed one raw trace line
    pub fn push_line(&mut self, line: &str) {
        self.stats.total_lines += 1;

        match parse_line(line) {
            Ok(record) => {
                self.stats.downlink_lines += 1;
                self.push_record(record);
            }
            Err(RecordError::NotDownlink) => {}
            Err(e) => {
                self.stats.downlink_lines += 1;
                self.stats.malformed_lines += 1;
                trace!("Skipping line {}: {}", self.stats.total_lines, e);
            }
        }
    }

    /// Feed one parsed record through the gate
    ///
    /// Returns true if the record was retained.
    pub fn push_record(&mut self, record: DlRecord) -> bool {
        if !self.gate.admit(record.time) {
            self.stats.gated_out += 1;
            return false;
        }

        self.series.entry(record.rnti).or_default().push(Sample {
            time: record.time,
            mcs: record.mcs,
            sinr: record.sinr,
        });
        self.stats.retained += 1;
        true
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    pub fn finish(self, total_lines: usize) -> Aggregation {
        Aggregation {
            series: self.series,
            total_lines,
            stats: self.stats,
        }
    }
}

/// Aggregate a trace file with the default gate and no progress output
///
/// **Public** - main entry point for aggregation
///
/// # Errors
/// * `ParseError::OpenFailed` - trace file missing or unreadable
/// * `ParseError::ReadFailed` - I/O error mid-scan
pub fn aggregate(path: impl AsRef<Path>) -> Result<Aggregation, ParseError> {
    aggregate_with(path, GateConfig::default(), |_| {})
}

/// Aggregate a trace file
///
/// **Public** - full-control entry point used by the process command
///
/// # Arguments
/// * `path` - Trace file
/// * `config` - Gate parameters
/// * `on_progress` - Called every 1000 lines with the completed percentage
///
/// # Algorithm
/// 1. Count lines (pre-scan, progress only)
/// 2. Parse each line, skipping non-`DL` and malformed lines
/// 3. Pass well-formed records through the global time gate
/// 4. Append retained samples to their RNTI's series
pub fn aggregate_with<F>(
    path: impl AsRef<Path>,
    config: GateConfig,
    mut on_progress: F,
) -> Result<Aggregation, ParseError>
where
    F: FnMut(f64),
{
    let path = path.as_ref();

    let total_lines = count_lines(path)?;
    debug!("Trace has {} lines", total_lines);

    let mut reader = TraceReader::open(path)?;
    let mut builder = SeriesBuilder::new(config);

    while let Some(line) = reader.next_line()? {
        builder.push_line(&line);

        let processed = builder.stats().total_lines;
        if processed % PROGRESS_INTERVAL == 0 && total_lines > 0 {
            on_progress(processed as f64 * 100.0 / total_lines as f64);
        }
    }

    let aggregation = builder.finish(total_lines);
    info!("Scan complete: {}", aggregation.stats.summary());
    info!("Found {} RNTIs", aggregation.series.len());

    Ok(aggregation)
}
