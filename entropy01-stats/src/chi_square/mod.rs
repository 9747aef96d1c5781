// entropy01-stats/src/chi_square/mod.rs
//! The one-degree chi-square statistic against an even 50/50 split.

use crate::table::{Bin, ChiTable};
use crate::StatsError;

/// Chi-square of `ones` and `zeros` against an expected even split.
///
/// Fails with [`StatsError::ZeroSamples`] when there is nothing to compare,
/// since the expected count would be zero.
pub fn chi_square(ones: u64, zeros: u64) -> Result<f64, StatsError> {
    let total = ones as f64 + zeros as f64;
    let expected = total / 2.0;
    if expected == 0.0 {
        return Err(StatsError::ZeroSamples);
    }

    let d1 = ones as f64 - expected;
    let d0 = zeros as f64 - expected;
    Ok((d1 * d1 + d0 * d0) / expected)
}

/// Computes the statistic for one column and classifies it in `table`.
pub fn chi_square_bin(ones: u64, zeros: u64, table: &ChiTable) -> Result<Bin, StatsError> {
    chi_square(ones, zeros).map(|statistic| table.classify(statistic))
}
