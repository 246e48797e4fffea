//! Process command implementation.
//!
//! The process command:
//! 1. Scans the trace and builds gated per-RNTI series
//! 2. Writes per-RNTI MCS/SINR CSV files
//! 3. Writes the text summary
//! 4. Writes the JSON summary (if requested)

use super::models::ProcessArgs;
use crate::aggregator::{aggregate_with, Aggregation};
use crate::output::{
    summary_path, to_report, write_per_entity_csv, write_summary, write_summary_json,
};
use crate::utils::config::PROGRESS_INTERVAL;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Execute the process command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The aggregation that was written, for callers that want to inspect it
///
/// # Errors
/// * Trace file missing or unreadable
/// * Output directory or file write errors
pub fn execute_process(args: ProcessArgs) -> Result<Aggregation> {
    let start_time = Instant::now();

    info!("Processing trace: {}", args.input.display());
    debug!(
        "Gate: start {}s, interval {}s",
        args.gate.start_time, args.gate.interval
    );

    // Step 1: Scan trace
    info!("Step 1/4: Scanning trace...");
    let show_progress = args.show_progress;
    let aggregation = aggregate_with(&args.input, args.gate, |percent| {
        if show_progress {
            print!("Processing... {:.2}% completed.\r", percent);
            let _ = std::io::stdout().flush();
        }
    })
    .with_context(|| format!("Failed to aggregate trace {}", args.input.display()))?;

    if show_progress && aggregation.total_lines >= PROGRESS_INTERVAL {
        println!();
    }

    // Step 2: Per-RNTI CSV files
    info!("Step 2/4: Writing per-RNTI CSV files...");
    let written = write_per_entity_csv(&aggregation.series, &args.output_dir)
        .context("Failed to write per-RNTI CSV files")?;
    debug!("Wrote {} CSV files", written.len());

    // Step 3: Text summary
    info!("Step 3/4: Writing summary...");
    let stdout = std::io::stdout();
    let summaries = write_summary(&aggregation.series, &args.output_dir, &mut stdout.lock())
        .context("Failed to write summary")?;

    // Step 4: JSON summary (if requested)
    if let Some(json_path) = &args.json {
        info!("Step 4/4: Writing JSON summary...");
        let report = to_report(
            &args.input.display().to_string(),
            aggregation.total_lines,
            summaries,
        );
        write_summary_json(&report, json_path).context("Failed to write JSON summary")?;
        info!("✓ JSON summary written to: {}", json_path.display());
    } else {
        info!("Step 4/4: Skipping JSON summary (not requested)");
    }

    println!("Summary generated in {}", summary_path(&args.output_dir).display());

    let elapsed = start_time.elapsed();
    info!("Processing completed in {:.2}s", elapsed.as_secs_f64());

    Ok(aggregation)
}

/// Validate process arguments
///
/// **Public** - can be called before execute_process for early validation
pub fn validate_args(args: &ProcessArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input trace path cannot be empty");
    }

    if args.output_dir.as_os_str().is_empty() {
        anyhow::bail!("Output directory cannot be empty");
    }

    if let Some(json) = &args.json {
        if json.as_os_str().is_empty() {
            anyhow::bail!("JSON summary path cannot be empty");
        }
    }

    if !args.gate.start_time.is_finite() || args.gate.start_time < 0.0 {
        anyhow::bail!("Gate start time must be a non-negative number of seconds");
    }

    if !args.gate.interval.is_finite() || args.gate.interval <= 0.0 {
        anyhow::bail!("Gate interval must be a positive number of seconds");
    }

    Ok(())
}

/// Process a trace with default settings (convenience function)
///
/// **Public** - simplified API for common use case
///
/// # Returns
/// Path of the generated summary.txt
pub fn quick_process(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Result<PathBuf> {
    let args = ProcessArgs {
        input: input.into(),
        output_dir: output_dir.into(),
        show_progress: false,
        ..Default::default()
    };
    validate_args(&args)?;

    let output_dir = args.output_dir.clone();
    execute_process(args)?;

    Ok(summary_path(output_dir))
}
