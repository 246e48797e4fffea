//! Text summary report writer.
//!
//! Writes `summary.txt` with one block per RNTI in ascending order and
//! mirrors a one-line status per RNTI to a caller-supplied stream.

use super::{ensure_dir, validate_path};
use crate::aggregator::{summarize_all, SeriesMap};
use crate::parser::schema::EntitySummary;
use crate::utils::config::SUMMARY_FILE_NAME;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Location of the text summary inside an output directory
pub fn summary_path(output_dir: impl AsRef<Path>) -> PathBuf {
    output_dir.as_ref().join(SUMMARY_FILE_NAME)
}

/// Write the text summary report
///
/// **Public** - main entry point for summary output
///
/// # Arguments
/// * `series` - Per-RNTI samples from the aggregator
/// * `output_dir` - Target directory, created if absent
/// * `status` - Receives one status line per RNTI (stdout in the CLI)
///
/// # Returns
/// The per-RNTI summary records, ascending by RNTI
pub fn write_summary<W: Write>(
    series: &SeriesMap,
    output_dir: impl AsRef<Path>,
    status: &mut W,
) -> Result<Vec<EntitySummary>, OutputError> {
    let output_dir = output_dir.as_ref();
    ensure_dir(output_dir)?;

    let path = summary_path(output_dir);
    validate_path(&path)?;

    info!("Writing summary to: {}", path.display());

    let summaries = summarize_all(series);

    let mut writer = BufWriter::new(File::create(&path)?);
    for entry in &summaries {
        writeln!(writer, "{}", entry.text_block())?;
        writeln!(status, "{}", entry.status_line())?;
    }
    writer.flush()?;

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{EntitySeries, Sample};

    fn entity(values: &[(i64, f64)]) -> EntitySeries {
        values
            .iter()
            .map(|&(mcs, sinr)| Sample { time: 0.1, mcs, sinr })
            .collect()
    }

    #[test]
    fn test_write_summary_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let mut series = SeriesMap::new();
        series.insert(7, entity(&[(5, 10.0), (7, 12.0)]));
        series.insert(1, entity(&[(4, 1.0)]));

        let mut status = Vec::new();
        let summaries = write_summary(&series, dir.path(), &mut status).unwrap();
        assert_eq!(summaries.len(), 2);

        let text = std::fs::read_to_string(summary_path(dir.path())).unwrap();
        assert_eq!(
            text,
            "RNTI 1:\n  MCS - Length: 1, Avg: 4.00, Std: 0.00\n  SINR - Avg: 1.00, Std: 0.00\n\n\
             RNTI 7:\n  MCS - Length: 2, Avg: 6.00, Std: 1.00\n  SINR - Avg: 11.00, Std: 1.00\n\n"
        );

        let status = String::from_utf8(status).unwrap();
        assert_eq!(status.lines().count(), 2);
        assert!(status.starts_with("RNTI 1 Length: 1,"));
    }

    #[test]
    fn test_write_summary_empty_series() {
        let dir = tempfile::tempdir().unwrap();
        let mut status = Vec::new();

        let summaries = write_summary(&SeriesMap::new(), dir.path(), &mut status).unwrap();

        assert!(summaries.is_empty());
        assert!(status.is_empty());
        assert_eq!(std::fs::read_to_string(summary_path(dir.path())).unwrap(), "");
    }
}
