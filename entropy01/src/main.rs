// entropy01/src/main.rs
//! entropy01 entry point.
//!
//! Parses flags, sets up logging and maps failures to exit statuses.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use is_terminal::IsTerminal;
use log::debug;
use std::io;
use std::process::ExitCode;

use entropy01::cli::Cli;
use entropy01::commands::analyze::{run_analyze, AnalyzeOptions};
use entropy01::exit_codes::{self, exit_code_for};
use entropy01::logger;
use entropy01::ui::output_format::{print_error_message, print_usage};
use entropy01_core::Entropy01Error;

fn main() -> ExitCode {
    let program = std::env::args().next().unwrap_or_else(|| "entropy01".to_string());

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(exit_codes::USAGE),
            };
        }
    };

    logger::init_logger(logger::level_for_flags(cli.quiet, cli.debug));

    let result = AnalyzeOptions::from_cli(&cli).and_then(|opts| run_analyze(&opts));
    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(err) => {
            report_failure(&program, &err);
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn report_failure(program: &str, err: &anyhow::Error) {
    let color = io::stderr().is_terminal();
    let mut stderr = io::stderr().lock();

    match err.downcast_ref::<Entropy01Error>() {
        Some(config_err) if config_err.is_config_error() => {
            let _ = print_error_message(&mut stderr, program, &config_err.to_string(), color);
            let usage = Cli::command().render_usage().to_string();
            let _ = print_usage(&mut stderr, &usage, color);
        }
        _ => {
            debug!("Run failed: {:?}", err);
            let _ = print_error_message(&mut stderr, program, &format!("{:#}", err), color);
        }
    }
}
