//! The human-readable and JSON report of an analysis run.
//!
//! A [`Report`] is built once from a frozen tally and is read-only afterwards.
//! Its text rendering keeps the fixed layout of the classic `entropy_01`
//! output so that existing comparisons keep working.

use log::{debug, info};
use serde::Serialize;
use std::io::Write;

use entropy01_stats::{estimate, ChiTable, Estimate, FrozenTally};

use crate::config::AnalysisConfig;
use crate::errors::Result;

/// Non-fatal notes about how little data was available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataWarning {
    /// No line was longer than `ignsize` octets.
    NoLines,
    /// Exactly one line was longer than `ignsize` octets.
    SingleLine,
}

/// One ordinary chi-square bin of the distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinRow {
    /// Lower probability bound, as a percentage.
    pub low_percent: f64,
    /// Upper probability bound, as a percentage.
    pub high_percent: f64,
    /// Columns that fell into this bin.
    pub count: u64,
    /// `count` as a percentage of the analysed columns.
    pub percent: f64,
}

/// The binned chi-square distribution and its entropy estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub bins: Vec<BinRow>,
    pub excess_count: u64,
    pub excess_percent: f64,
    /// Raw, untruncated entropy estimate in bits.
    pub entropy: f64,
    pub entropy_bits: u64,
    pub entropy_percent: f64,
}

impl Distribution {
    fn from_estimate(estimate: &Estimate, table: &ChiTable) -> Self {
        let bins = estimate
            .level_tally
            .iter()
            .enumerate()
            .map(|(index, &count)| {
                let (low, high) = table.bounds(index);
                BinRow {
                    low_percent: 100.0 * low,
                    high_percent: 100.0 * high,
                    count,
                    percent: estimate.percent_of(count),
                }
            })
            .collect();

        Self {
            bins,
            excess_count: estimate.excess,
            excess_percent: estimate.percent_of(estimate.excess),
            entropy: estimate.entropy,
            entropy_bits: estimate.entropy_bits(),
            entropy_percent: estimate.entropy_percent(),
        }
    }
}

/// Everything an analysis run reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub config: AnalysisConfig,
    pub warning: Option<DataWarning>,
    pub lines_counted: u64,
    pub lines_ignored: u64,
    pub shortest_line: usize,
    pub octets_processed: u64,
    /// Absent when no line was counted: there is nothing to bin.
    pub distribution: Option<Distribution>,
}

impl Report {
    /// Bins the frozen tally against `table` and assembles the report.
    pub fn build(tally: &FrozenTally, table: &ChiTable, config: &AnalysisConfig) -> Result<Self> {
        let warning = match tally.linecount() {
            0 => Some(DataWarning::NoLines),
            1 => Some(DataWarning::SingleLine),
            _ => None,
        };
        if let Some(w) = warning {
            info!("Degenerate input ({:?}); the estimate is not meaningful", w);
        }

        // With no counted lines every column would have zero samples; skip
        // binning instead of tripping the guard.
        let distribution = if tally.linecount() == 0 {
            None
        } else {
            let estimate = estimate(tally.bit_sum(), tally.linecount(), tally.minlen(), table)?;
            debug!(
                "Binned {} columns: entropy {:.4} bits, {} excess",
                estimate.total_columns(),
                estimate.entropy,
                estimate.excess
            );
            Some(Distribution::from_estimate(&estimate, table))
        };

        Ok(Self {
            config: *config,
            warning,
            lines_counted: tally.linecount(),
            lines_ignored: tally.skipcount(),
            shortest_line: tally.minlen(),
            octets_processed: tally.octets_processed(),
            distribution,
        })
    }

    /// Writes the classic plain-text report.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        let ignsize = self.config.ignsize;
        match self.warning {
            Some(DataWarning::NoLines) => writeln!(out, "no lines longer than {} octets", ignsize)?,
            Some(DataWarning::SingleLine) => writeln!(out, "only 1 line longer than {} octets", ignsize)?,
            None => {}
        }

        writeln!(out, "\nchi^2 distribution")?;
        writeln!(out, "lines counted: {}", self.lines_counted)?;
        writeln!(out, "lines ignored: {}", self.lines_ignored)?;
        writeln!(out, "shortest processed line: {} octets", self.shortest_line)?;
        writeln!(out, "octets processed: {} octets\n", self.octets_processed)?;

        if let Some(dist) = &self.distribution {
            for row in &dist.bins {
                writeln!(
                    out,
                    "chi^2 [{:.2}-{:.2}]%:\t{}\t{:6.2}%",
                    row.low_percent, row.high_percent, row.count, row.percent
                )?;
            }
            writeln!(out, "chi^2 [excess]:\t\t{}\t{:6.2}%", dist.excess_count, dist.excess_percent)?;
            writeln!(out, "\nentropy bit est: {} bits\t{:6.2}%\n", dist.entropy_bits, dist.entropy_percent)?;
        }

        Ok(())
    }

    /// Renders the report as a `String` in the plain-text layout.
    pub fn to_text(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_text(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
