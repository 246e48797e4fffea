use crate::aggregator::GateConfig;
use crate::utils::config::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;

/// Arguments for the process command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ProcessArgs {
    /// Trace file to read
    pub input: PathBuf,

    /// Directory for per-RNTI CSV files and summary.txt
    pub output_dir: PathBuf,

    /// Optional JSON summary path
    pub json: Option<PathBuf>,

    /// Downsampling gate parameters
    pub gate: GateConfig,

    /// Print the in-place progress percentage
    pub show_progress: bool,
}

impl Default for ProcessArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            json: None,
            gate: GateConfig::default(),
            show_progress: true,
        }
    }
}
