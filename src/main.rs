//! RxTrace CLI
//!
//! Extracts per-RNTI MCS and SINR series from a downlink packet trace,
//! downsamples them to a fixed cadence and writes CSV files plus a summary.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use rxtrace::aggregator::GateConfig;
use rxtrace::commands::{
    display_version, execute_process, validate_args, validate_summary_file, ProcessArgs,
};
use rxtrace::utils::config::{
    DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR, GATE_INTERVAL, GATE_START_TIME,
};

/// RxTrace - MCS/SINR series from downlink packet traces
#[derive(Parser, Debug)]
#[command(name = "rxtrace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Process a trace into per-RNTI CSV files and a summary
    Process {
        /// Trace file to read
        #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
        input: PathBuf,

        /// Output directory (created if absent)
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// Also write a JSON summary to this path
        #[arg(long)]
        json: Option<PathBuf>,

        /// Ignore samples before this time (seconds)
        #[arg(long, default_value_t = GATE_START_TIME)]
        start: f64,

        /// Minimum spacing between retained samples (seconds)
        #[arg(long, default_value_t = GATE_INTERVAL)]
        interval: f64,

        /// Do not print the progress percentage
        #[arg(long)]
        no_progress: bool,
    },

    /// Validate a JSON summary file
    Validate {
        /// Path to summary JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Process {
            input,
            output_dir,
            json,
            start,
            interval,
            no_progress,
        } => {
            let args = ProcessArgs {
                input,
                output_dir,
                json,
                gate: GateConfig {
                    start_time: start,
                    interval,
                },
                show_progress: !no_progress,
            };

            validate_args(&args)?;
            execute_process(args)?;
        }

        Commands::Validate { file } => {
            validate_summary_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
