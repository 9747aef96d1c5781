// entropy01-stats/src/tally/mod.rs
//! Per-column accumulation of "1"-class symbols.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

/// The only byte counted as a "0". Every other byte, whitespace included,
/// belongs to the "1" class.
pub const ZERO_SYMBOL: u8 = b'0';

/// Running tally over a stream of lines.
///
/// Columns are capped at `maxlen`; anything past that window is never looked at.
#[derive(Debug, Clone)]
pub struct ColumnTally {
    maxlen: usize,
    ignsize: usize,
    minlen: usize,
    linecount: u64,
    skipcount: u64,
    bit_sum: Vec<u64>,
}

impl ColumnTally {
    pub fn new(maxlen: usize, ignsize: usize) -> Self {
        Self {
            maxlen,
            ignsize,
            minlen: maxlen,
            linecount: 0,
            skipcount: 0,
            bit_sum: vec![0; maxlen],
        }
    }

    /// Folds one line (already stripped of its terminator) into the tally.
    pub fn push_line(&mut self, line: &[u8]) {
        let line = &line[..line.len().min(self.maxlen)];

        if line.len() <= self.ignsize {
            self.skipcount += 1;
            return;
        }

        // A shorter line narrows the window for every line, this one included.
        // Columns already counted past the new minlen are left as they are.
        if line.len() < self.minlen {
            self.minlen = line.len();
        }

        for (count, &byte) in self.bit_sum.iter_mut().zip(line).take(self.minlen) {
            if byte != ZERO_SYMBOL {
                *count += 1;
            }
        }

        self.linecount += 1;
    }

    pub fn minlen(&self) -> usize {
        self.minlen
    }

    pub fn linecount(&self) -> u64 {
        self.linecount
    }

    pub fn skipcount(&self) -> u64 {
        self.skipcount
    }

    /// Freezes the tally, discarding columns beyond the final `minlen`.
    pub fn finish(mut self) -> FrozenTally {
        self.bit_sum.truncate(self.minlen);
        FrozenTally {
            maxlen: self.maxlen,
            minlen: self.minlen,
            linecount: self.linecount,
            skipcount: self.skipcount,
            bit_sum: self.bit_sum,
        }
    }
}

/// The read-only result of accumulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenTally {
    maxlen: usize,
    minlen: usize,
    linecount: u64,
    skipcount: u64,
    bit_sum: Vec<u64>,
}

impl FrozenTally {
    pub fn maxlen(&self) -> usize {
        self.maxlen
    }

    /// Length of the shortest processed line, or `maxlen` if none was processed.
    pub fn minlen(&self) -> usize {
        self.minlen
    }

    pub fn linecount(&self) -> u64 {
        self.linecount
    }

    pub fn skipcount(&self) -> u64 {
        self.skipcount
    }

    /// "1" counts for columns `[0, minlen)`.
    pub fn bit_sum(&self) -> &[u64] {
        &self.bit_sum
    }

    /// Number of octets that took part in the analysis.
    pub fn octets_processed(&self) -> u64 {
        self.minlen as u64 * self.linecount
    }
}

/// Runs a whole sequence of lines through a fresh [`ColumnTally`].
pub fn accumulate<I, L>(lines: I, maxlen: usize, ignsize: usize) -> FrozenTally
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    let mut tally = ColumnTally::new(maxlen, ignsize);
    for line in lines {
        tally.push_line(line.as_ref());
    }
    tally.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate alloc;
    use alloc::vec;

    #[test]
    fn test_uniform_lines() {
        let tally = accumulate(["0101", "0101", "0101", "0101"], 8192, 0);
        assert_eq!(tally.minlen(), 4);
        assert_eq!(tally.linecount(), 4);
        assert_eq!(tally.skipcount(), 0);
        assert_eq!(tally.bit_sum(), &[0, 4, 0, 4]);
        assert_eq!(tally.octets_processed(), 16);
    }

    #[test]
    fn test_ignsize_skips_short_lines() {
        let lines = ["011", "0101010101", "1111111111", "0000000000"];
        let tally = accumulate(lines, 8192, 5);
        assert_eq!(tally.skipcount(), 1);
        assert_eq!(tally.minlen(), 10);
        assert_eq!(tally.linecount(), 3);
        assert_eq!(tally.bit_sum(), &[1, 2, 1, 2, 1, 2, 1, 2, 1, 2]);
    }

    #[test]
    fn test_empty_line_skipped_by_default() {
        let tally = accumulate(["", "01"], 8192, 0);
        assert_eq!(tally.skipcount(), 1);
        assert_eq!(tally.linecount(), 1);
        assert_eq!(tally.minlen(), 2);
    }

    #[test]
    fn test_anything_but_zero_is_one() {
        let tally = accumulate(["0a 1"], 16, 0);
        assert_eq!(tally.bit_sum(), &[0, 1, 1, 1]);
    }

    #[test]
    fn test_shrinking_minlen_does_not_roll_back() {
        let mut tally = ColumnTally::new(16, 0);
        tally.push_line(b"111111");
        tally.push_line(b"11");
        tally.push_line(b"111111");
        assert_eq!(tally.minlen(), 2);

        let frozen = tally.finish();
        // Only the first two columns survive, each counted by all three lines.
        assert_eq!(frozen.bit_sum(), &[3, 3]);
        assert_eq!(frozen.linecount(), 3);
    }

    #[test]
    fn test_lines_truncated_to_maxlen() {
        let tally = accumulate(["1111111111", "11111111"], 4, 0);
        assert_eq!(tally.minlen(), 4);
        assert_eq!(tally.maxlen(), 4);
        assert_eq!(tally.bit_sum(), &[2, 2, 2, 2]);
    }

    #[test]
    fn test_no_input() {
        let lines: vec::Vec<&[u8]> = vec![];
        let tally = accumulate(lines, 32, 0);
        assert_eq!(tally.linecount(), 0);
        assert_eq!(tally.minlen(), 32);
        assert_eq!(tally.bit_sum(), &[0u64; 32][..]);
        assert_eq!(tally.octets_processed(), 0);
    }
}
