//! Analysis configuration for `entropy01-core`.
//!
//! Holds the two tunables of an analysis run, the column window (`maxlen`) and
//! the short-line threshold (`ignsize`), and validates them the way the
//! command line expects.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{Entropy01Error, Result};

/// Largest column window that may be requested, and the default one.
pub const BUFFER_CAPACITY: usize = 8192;

/// Validated settings for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Octets scanned per line; longer lines are truncated.
    pub maxlen: usize,
    /// Lines of at most this many octets are ignored.
    pub ignsize: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            maxlen: BUFFER_CAPACITY,
            ignsize: 0,
        }
    }
}

impl AnalysisConfig {
    /// Builds a config from optional raw option values.
    ///
    /// `maxlen` must lie in `(0, BUFFER_CAPACITY]`. `ignsize` defaults to 0 when
    /// omitted, but an explicitly supplied value must be strictly positive.
    pub fn from_options(maxlen: Option<i64>, ignsize: Option<i64>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = maxlen {
            config.maxlen = usize::try_from(value)
                .ok()
                .filter(|&m| m > 0 && m <= BUFFER_CAPACITY)
                .ok_or(Entropy01Error::InvalidMaxLen {
                    value,
                    capacity: BUFFER_CAPACITY,
                })?;
        }

        if let Some(value) = ignsize {
            config.ignsize = usize::try_from(value)
                .ok()
                .filter(|&i| i > 0)
                .ok_or(Entropy01Error::InvalidIgnSize(value))?;
        }

        debug!("Analysis config: maxlen={}, ignsize={}", config.maxlen, config.ignsize);
        Ok(config)
    }
}

/// Parses an integer option using the number syntax of C's `strtol(s, NULL, 0)`:
/// optional sign, then `0x`/`0X` hexadecimal, leading-`0` octal or decimal.
///
/// Unlike `strtol`, the whole string must be a number: trailing garbage
/// (`"12abc"`), digits outside the radix (`"09"`) and out-of-range values
/// are rejected instead of being cut short or saturated.
pub fn parse_c_integer(input: &str) -> std::result::Result<i64, String> {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, body) = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        (16, hex)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        (10, digits)
    };

    if body.is_empty() || body.starts_with(['+', '-']) {
        return Err(format!("'{}' is not a number", input));
    }

    let magnitude = i64::from_str_radix(body, radix)
        .map_err(|e| format!("'{}' is not a number: {}", input, e))?;
    Ok(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::from_options(None, None).unwrap();
        assert_eq!(config, AnalysisConfig { maxlen: 8192, ignsize: 0 });
    }

    #[test]
    fn test_maxlen_range() {
        assert_eq!(AnalysisConfig::from_options(Some(1), None).unwrap().maxlen, 1);
        assert_eq!(AnalysisConfig::from_options(Some(8192), None).unwrap().maxlen, 8192);
        for bad in [0, -5, 8193] {
            let err = AnalysisConfig::from_options(Some(bad), None).unwrap_err();
            assert!(matches!(err, Entropy01Error::InvalidMaxLen { value, .. } if value == bad));
            assert!(err.is_config_error());
        }
    }

    #[test]
    fn test_explicit_zero_ignsize_is_rejected() {
        let err = AnalysisConfig::from_options(None, Some(0)).unwrap_err();
        assert!(matches!(err, Entropy01Error::InvalidIgnSize(0)));
        assert_eq!(err.to_string(), "-i value: 0 must be > 0");
        assert!(AnalysisConfig::from_options(None, Some(-1)).is_err());
        assert_eq!(AnalysisConfig::from_options(None, Some(5)).unwrap().ignsize, 5);
    }

    #[test]
    fn test_parse_c_integer() {
        assert_eq!(parse_c_integer("42"), Ok(42));
        assert_eq!(parse_c_integer("0x20"), Ok(32));
        assert_eq!(parse_c_integer("0X1f"), Ok(31));
        assert_eq!(parse_c_integer("010"), Ok(8));
        assert_eq!(parse_c_integer("0"), Ok(0));
        assert_eq!(parse_c_integer("-7"), Ok(-7));
        assert_eq!(parse_c_integer("+7"), Ok(7));
        assert!(parse_c_integer("").is_err());
        assert!(parse_c_integer("0x").is_err());
        assert!(parse_c_integer("12abc").is_err());
        assert!(parse_c_integer("--3").is_err());
        assert!(parse_c_integer("09").is_err());
        assert!(parse_c_integer("99999999999999999999").is_err());
    }
}
