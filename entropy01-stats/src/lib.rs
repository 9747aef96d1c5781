// entropy01-stats/src/lib.rs
//! Column tallies and one-degree chi-square binning for lines of "0"/"1" symbols.
//!
//! The crate is `no_std` (with `alloc`) so it can be embedded anywhere; all
//! I/O, configuration and reporting lives in `entropy01-core`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod tally;
pub mod table;
pub mod chi_square;
pub mod estimate;

pub use chi_square::{chi_square, chi_square_bin};
pub use estimate::{estimate, Estimate};
pub use table::{Bin, ChiLevel, ChiTable, ONE_DEGREE};
pub use tally::{accumulate, ColumnTally, FrozenTally, ZERO_SYMBOL};

use core::fmt;

/// Errors raised by the statistics layer.
///
/// Only internal invariant violations end up here; ordinary "too little data"
/// situations are reported by the caller, not treated as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// A column reached the chi-square computation with no samples at all.
    ZeroSamples,
    /// A column claims more "1" symbols than there are lines.
    CountExceedsLines { column: usize, ones: u64, lines: u64 },
    /// The analysis window is wider than the tally it is applied to.
    WindowExceedsTally { minlen: usize, columns: usize },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::ZeroSamples => write!(f, "chi-square computed over a zero sample count"),
            StatsError::CountExceedsLines { column, ones, lines } => write!(
                f,
                "column {} holds {} ones but only {} lines were counted",
                column, ones, lines
            ),
            StatsError::WindowExceedsTally { minlen, columns } => write!(
                f,
                "analysis window of {} columns exceeds the {} tallied columns",
                minlen, columns
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}
