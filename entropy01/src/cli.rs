// entropy01/src/cli.rs
//! This file defines the command-line interface (CLI) for the entropy01 application.

use clap::Parser;
use std::path::PathBuf;

use entropy01_core::parse_c_integer;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "entropy01",
    version = env!("CARGO_PKG_VERSION"),
    about = "Determine the entropy from lines of \"0\" and \"1\" characters",
    long_about = "Reads lines of \"0\" and \"1\" characters (anything that is not a \"0\" counts as a \"1\"), \
tallies each column, and runs a one-degree chi-square test per column against an even split. \
The binned results give an estimate of how many bits per line look random.",
    args_override_self = true,
)]
pub struct Cli {
    /// Do not scan more than this many octets per line.
    #[arg(
        short = 'm',
        long = "maxlen",
        value_name = "MAXLEN",
        value_parser = parse_c_integer,
        allow_negative_numbers = true,
        help = "Do not scan more than MAXLEN octets per line (default: 8192)."
    )]
    pub maxlen: Option<i64>,

    /// Ignore lines with this many octets or fewer.
    #[arg(
        short = 'i',
        long = "ignsize",
        value_name = "IGNSIZE",
        value_parser = parse_c_integer,
        allow_negative_numbers = true,
        help = "Ignore lines of IGNSIZE octets or fewer (default: 0, an explicit value must be > 0)."
    )]
    pub ignsize: Option<i64>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long = "input-file", short = 'f', value_name = "FILE", help = "Read lines from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Print the report as JSON instead of the plain-text layout.
    #[arg(long = "json", help = "Print the report as JSON.")]
    pub json: bool,

    /// Disable informational messages
    #[arg(long, short = 'q', conflicts_with = "debug", help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}
