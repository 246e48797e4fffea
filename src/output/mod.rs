//! Output writers for per-RNTI series and summaries.
//!
//! This module handles writing data to disk in various formats:
//! - Per-RNTI MCS/SINR CSV columns
//! - Text summary report
//! - JSON summary

pub mod csv;
pub mod json;
pub mod summary;

// Re-export main functions
pub use self::csv::{mcs_file_name, sinr_file_name, write_per_entity_csv};
pub use json::{read_summary_json, to_report, write_summary_json};
pub use summary::{summary_path, write_summary};

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create an output directory (and its parents) if it does not exist
pub fn ensure_dir(dir: &Path) -> Result<(), OutputError> {
    if dir.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Directory is empty".to_string()));
    }

    if dir.exists() && !dir.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }

    if !dir.exists() {
        debug!("Creating output directory: {}", dir.display());
        std::fs::create_dir_all(dir).map_err(|e| {
            OutputError::InvalidPath(format!("Cannot create directory {}: {}", dir.display(), e))
        })?;
    }

    Ok(())
}
