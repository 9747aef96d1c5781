// entropy01-core/src/lib.rs
//! # entropy01 Core Library
//!
//! `entropy01-core` estimates how random a stream of "0"/"1" lines looks,
//! column by column. It wraps the `no_std` math of `entropy01-stats` with
//! everything that needs `std`: option validation, reading lines from a
//! [`BufRead`], and building the final [`Report`].
//!
//! ## Modules
//!
//! * `config`: [`AnalysisConfig`] and the numeric option parser.
//! * `reader`: bounded line reading into a column tally.
//! * `report`: the text/JSON report and its degenerate-data warnings.
//! * `errors`: [`Entropy01Error`], the crate's error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use entropy01_core::{analyze, AnalysisConfig};
//!
//! let input = "0101\n0101\n0101\n0101\n";
//! let report = analyze(input.as_bytes(), &AnalysisConfig::default()).unwrap();
//!
//! assert_eq!(report.lines_counted, 4);
//! assert_eq!(report.distribution.unwrap().entropy_bits, 0);
//! ```
//!
//! License: MIT OR Apache-2.0

use log::info;
use std::io::BufRead;

pub mod config;
pub mod errors;
pub mod reader;
pub mod report;

pub use config::{parse_c_integer, AnalysisConfig, BUFFER_CAPACITY};
pub use errors::{Entropy01Error, Result};
pub use reader::{accumulate_reader, trim_line_terminator};
pub use report::{BinRow, DataWarning, Distribution, Report};

/// Re-exports the statistics layer for callers that drive it directly.
pub use entropy01_stats::{Bin, ChiTable, FrozenTally, StatsError, ONE_DEGREE};

/// Runs a complete analysis: reads `reader` to the end, then bins the tally
/// against the built-in one-degree chi-square table.
pub fn analyze<R: BufRead>(reader: R, config: &AnalysisConfig) -> Result<Report> {
    info!("Starting analysis (maxlen={}, ignsize={}).", config.maxlen, config.ignsize);
    let tally = accumulate_reader(reader, config)?;
    let report = Report::build(&tally, &ONE_DEGREE, config)?;
    info!("Analysis completed.");
    Ok(report)
}
