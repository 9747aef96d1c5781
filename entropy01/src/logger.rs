// entropy01/src/logger.rs
//! Logging setup for the entropy01 binary.
//!
//! Log records always go to stderr so they never mix with the report on stdout.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger` once.
///
/// `RUST_LOG` is honoured unless `level` forces a filter. Repeated calls are
/// harmless, which lets tests call this freely.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);
    let _ = builder.try_init();
}

/// Picks the forced level for the `--quiet` / `--debug` flags.
pub fn level_for_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
