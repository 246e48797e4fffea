//! Per-RNTI CSV output.
//!
//! Each RNTI gets two single-column files, `mcs<rnti>.csv` and
//! `sinr<rnti>.csv`, holding one row per retained sample.

use super::ensure_dir;
use crate::aggregator::SeriesMap;
use crate::parser::record::Rnti;
use crate::utils::error::OutputError;
use csv::{Terminator, WriterBuilder};
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

pub fn mcs_file_name(rnti: Rnti) -> String {
    format!("mcs{}.csv", rnti)
}

pub fn sinr_file_name(rnti: Rnti) -> String {
    format!("sinr{}.csv", rnti)
}

/// Write MCS and SINR columns for every RNTI
///
/// **Public** - main entry point for CSV output
///
/// # Arguments
/// * `series` - Per-RNTI samples from the aggregator
/// * `output_dir` - Target directory, created if absent
///
/// # Returns
/// Paths of the files written, MCS then SINR per RNTI, ascending by RNTI
///
/// # Errors
/// * `OutputError::InvalidPath` - directory cannot be created
/// * `OutputError::WriteFailed` / `OutputError::CsvFailed` - write error
pub fn write_per_entity_csv(
    series: &SeriesMap,
    output_dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, OutputError> {
    let output_dir = output_dir.as_ref();
    ensure_dir(output_dir)?;

    info!(
        "Writing CSV series for {} RNTIs to: {}",
        series.len(),
        output_dir.display()
    );

    let mut written = Vec::with_capacity(series.len() * 2);
    for (rnti, entity) in series {
        let mcs_path = output_dir.join(mcs_file_name(*rnti));
        write_column(&mcs_path, "MCS", entity.samples().iter().map(|s| s.mcs))?;
        written.push(mcs_path);

        let sinr_path = output_dir.join(sinr_file_name(*rnti));
        write_column(&sinr_path, "SINR", entity.samples().iter().map(|s| s.sinr))?;
        written.push(sinr_path);

        debug!("RNTI {}: {} rows", rnti, entity.len());
    }

    Ok(written)
}

/// Write a header and one value per row
///
/// **Private** - internal helper for write_per_entity_csv
fn write_column<T, I>(path: &Path, header: &str, values: I) -> Result<(), OutputError>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    writer.write_record([header])?;
    for value in values {
        writer.serialize((value,))?;
    }

    writer.flush()?;
    Ok(())
}
