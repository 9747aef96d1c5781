//! errors.rs - Error types for the entropy01-core library.
//!
//! Configuration mistakes, I/O failures and internal invariant violations are
//! kept apart so the CLI can map each to its own exit status.

use entropy01_stats::StatsError;
use thiserror::Error;

/// All errors produced by `entropy01-core`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Entropy01Error {
    #[error("-m value: {value} must be > 0 and <= {capacity}")]
    InvalidMaxLen { value: i64, capacity: usize },

    #[error("-i value: {0} must be > 0")]
    InvalidIgnSize(i64),

    #[error("internal error: {0}")]
    Stats(#[from] StatsError),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Entropy01Error {
    /// True for mistakes in the supplied options rather than in the data or program.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidMaxLen { .. } | Self::InvalidIgnSize(_))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Entropy01Error>;
