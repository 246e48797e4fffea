//! RxTrace
//!
//! Per-RNTI MCS and SINR time series from downlink packet traces
//! (`RxPacketTrace.txt`) written by mmWave/LTE network simulations.
//!
//! This crate provides the core implementation for the
//! `rxtrace` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! rxtrace process --input RxPacketTrace.txt --output-dir output_logs
//! ```
//!
//! As a library:
//!
//! ```no_run
//! use rxtrace::aggregator::aggregate;
//!
//! let aggregation = aggregate("RxPacketTrace.txt")?;
//! for (rnti, series) in &aggregation.series {
//!     println!("RNTI {}: {} samples", rnti, series.len());
//! }
//! # Ok::<(), rxtrace::utils::ParseError>(())
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
