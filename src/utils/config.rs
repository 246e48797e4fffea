//! Configuration and constants for the CLI.

/// Current JSON summary schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Input file the simulator writes its receive-side packet trace to
pub const DEFAULT_INPUT_FILE: &str = "RxPacketTrace.txt";

/// Directory that receives the per-RNTI CSV files and the summary
pub const DEFAULT_OUTPUT_DIR: &str = "output_logs";

/// Name of the text summary inside the output directory
pub const SUMMARY_FILE_NAME: &str = "summary.txt";

// Trace line layout
// DL/UL time frame subF slot 1stSym symbol# cellId rnti ccId tbSize mcs rv SINR(dB) ...
pub const DOWNLINK_MARKER: &str = "DL";
pub const MIN_FIELD_COUNT: usize = 14;
pub const TIME_FIELD: usize = 1;
pub const RNTI_FIELD: usize = 8;
pub const MCS_FIELD: usize = 11;
pub const SINR_FIELD: usize = 13;

// Downsampling gate (seconds)
pub const GATE_START_TIME: f64 = 0.1;
pub const GATE_INTERVAL: f64 = 0.0025;

/// Lines between two progress callbacks
pub const PROGRESS_INTERVAL: usize = 1000;
