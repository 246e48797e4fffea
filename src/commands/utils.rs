use crate::output::read_summary_json;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a JSON summary file
pub fn validate_summary_file(file_path: PathBuf) -> Result<()> {
    println!("Validating summary: {}", file_path.display());

    let report = read_summary_json(&file_path)?;

    println!("✓ Valid summary JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Total Lines: {}", report.total_lines);
    println!("  Retained Samples: {}", report.retained_samples);
    println!("  RNTIs: {}", report.entities.len());

    if report.version != SCHEMA_VERSION {
        println!(
            "  Note: written with schema v{}, current is v{}",
            report.version, SCHEMA_VERSION
        );
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("RxTrace v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Per-RNTI MCS/SINR series and statistics from downlink packet traces.");
}
