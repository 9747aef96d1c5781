// entropy01-stats/src/estimate/mod.rs
//! Aggregates per-column bins into a level tally and an entropy estimate.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;
use libm::trunc;

use crate::chi_square::chi_square_bin;
use crate::table::{Bin, ChiTable};
use crate::StatsError;

/// Result of binning every column of a frozen tally.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Columns per ordinary bin, indexed like [`ChiTable::bounds`].
    pub level_tally: Vec<u64>,
    /// Columns more extreme than the table's sentinel.
    pub excess: u64,
    /// Estimated number of random-looking bits out of `minlen`.
    pub entropy: f64,
    pub minlen: usize,
}

impl Estimate {
    /// Whole bits of entropy, truncated toward zero.
    pub fn entropy_bits(&self) -> u64 {
        trunc(self.entropy) as u64
    }

    pub fn entropy_percent(&self) -> f64 {
        self.percent_of_window(self.entropy)
    }

    /// `count` columns as a percentage of the analysis window.
    pub fn percent_of(&self, count: u64) -> f64 {
        self.percent_of_window(count as f64)
    }

    /// Every column binned, excess included. Always equals `minlen`.
    pub fn total_columns(&self) -> u64 {
        self.level_tally.iter().sum::<u64>() + self.excess
    }

    fn percent_of_window(&self, value: f64) -> f64 {
        100.0 * value / self.minlen as f64
    }
}

/// Bins columns `[0, minlen)` of `bit_sum` and derives the entropy estimate.
///
/// `bit_sum[i]` is the number of "1" symbols seen in column `i` over
/// `linecount` lines. Errors only on internal inconsistencies: a window wider
/// than `bit_sum`, a column with no samples, or more ones than lines.
pub fn estimate(
    bit_sum: &[u64],
    linecount: u64,
    minlen: usize,
    table: &ChiTable,
) -> Result<Estimate, StatsError> {
    if bit_sum.len() < minlen {
        return Err(StatsError::WindowExceedsTally { minlen, columns: bit_sum.len() });
    }

    let mut level_tally = vec![0u64; table.bin_count()];
    let mut excess = 0u64;

    for (column, &ones) in bit_sum[..minlen].iter().enumerate() {
        let zeros = linecount
            .checked_sub(ones)
            .ok_or(StatsError::CountExceedsLines { column, ones, lines: linecount })?;

        match chi_square_bin(ones, zeros, table)? {
            Bin::Level(index) => level_tally[index] += 1,
            Bin::Excess => excess += 1,
        }
    }

    let entropy: f64 = level_tally
        .iter()
        .enumerate()
        .map(|(index, &count)| table.weight(index) * count as f64)
        .sum();

    Ok(Estimate { level_tally, excess, entropy, minlen })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ONE_DEGREE;
    use crate::tally::accumulate;
    extern crate alloc;
    use alloc::vec::Vec;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_patterned_lines_carry_no_entropy() {
        let tally = accumulate(["0101"; 4], 8192, 0);
        let result = estimate(tally.bit_sum(), tally.linecount(), tally.minlen(), &ONE_DEGREE).unwrap();

        assert_eq!(result.level_tally[9], 4);
        assert_eq!(result.total_columns(), 4);
        assert!((result.entropy - 0.1).abs() < EPSILON);
        assert_eq!(result.entropy_bits(), 0);
        assert!((result.entropy_percent() - 2.5).abs() < EPSILON);
    }

    #[test]
    fn test_balanced_columns_look_random() {
        // Every column of this block is exactly half ones.
        let lines: Vec<[u8; 8]> = (0..1000)
            .map(|n| if n % 2 == 0 { *b"01100110" } else { *b"10011001" })
            .collect();
        let tally = accumulate(&lines, 8192, 0);
        let result = estimate(tally.bit_sum(), tally.linecount(), tally.minlen(), &ONE_DEGREE).unwrap();

        assert_eq!(result.level_tally[0], 8);
        assert_eq!(result.excess, 0);
        assert!((result.entropy - 7.92).abs() < EPSILON);
        assert_eq!(result.entropy_bits(), 7);
        assert!((result.percent_of(8) - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_constant_columns_are_excess() {
        let tally = accumulate(["1111"; 50], 8192, 0);
        let result = estimate(tally.bit_sum(), tally.linecount(), tally.minlen(), &ONE_DEGREE).unwrap();

        assert_eq!(result.excess, 4);
        assert!(result.level_tally.iter().all(|&c| c == 0));
        assert_eq!(result.entropy, 0.0);
    }

    #[test]
    fn test_zero_lines_trip_the_guard() {
        let bit_sum = [0u64; 4];
        assert_eq!(estimate(&bit_sum, 0, 4, &ONE_DEGREE), Err(StatsError::ZeroSamples));
        // An empty window never reaches the computation.
        assert!(estimate(&bit_sum, 0, 0, &ONE_DEGREE).is_ok());
    }

    #[test]
    fn test_window_wider_than_tally_is_rejected() {
        assert_eq!(
            estimate(&[2, 2], 4, 8, &ONE_DEGREE),
            Err(StatsError::WindowExceedsTally { minlen: 8, columns: 2 })
        );
        // Extra columns past the window are ignored.
        let result = estimate(&[2, 2, 4], 4, 2, &ONE_DEGREE).unwrap();
        assert_eq!(result.total_columns(), 2);
    }

    #[test]
    fn test_inconsistent_counts_are_rejected() {
        let bit_sum = [3u64, 1];
        assert_eq!(
            estimate(&bit_sum, 2, 2, &ONE_DEGREE),
            Err(StatsError::CountExceedsLines { column: 0, ones: 3, lines: 2 })
        );
    }

    #[test]
    fn test_estimate_is_repeatable() {
        let tally = accumulate(["0110", "1100", "0011", "1010", "0111"], 8192, 0);
        let first = estimate(tally.bit_sum(), tally.linecount(), tally.minlen(), &ONE_DEGREE);
        let second = estimate(tally.bit_sum(), tally.linecount(), tally.minlen(), &ONE_DEGREE);
        assert_eq!(first, second);
    }
}
