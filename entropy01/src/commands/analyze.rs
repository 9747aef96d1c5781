//! The analyze command: read lines, build the report, print it.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use entropy01_core::{analyze, AnalysisConfig, Report};

use crate::cli::Cli;

/// Options for one analysis run, already validated.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub config: AnalysisConfig,
    pub input_file: Option<PathBuf>,
    pub json: bool,
}

impl AnalyzeOptions {
    /// Validates the raw command-line values.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = AnalysisConfig::from_options(cli.maxlen, cli.ignsize)?;
        Ok(Self {
            config,
            input_file: cli.input_file.clone(),
            json: cli.json,
        })
    }
}

fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = fs::File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Writes `report` in the requested format.
pub fn write_report<W: Write>(report: &Report, json: bool, out: &mut W) -> Result<()> {
    if json {
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        report.write_text(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Runs a full analysis and prints the report to stdout.
pub fn run_analyze(opts: &AnalyzeOptions) -> Result<()> {
    info!("Starting entropy01 analysis.");
    let reader = open_input(opts.input_file.as_ref())?;

    let report = analyze(reader, &opts.config).context("Analysis failed")?;
    debug!(
        "Report ready: {} lines counted, {} ignored",
        report.lines_counted, report.lines_ignored
    );

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_report(&report, opts.json, &mut writer).context("Failed to write report")?;

    info!("entropy01 analysis completed.");
    Ok(())
}
