// entropy01/src/lib.rs
//! # entropy01 CLI Application
//!
//! This crate provides the command-line front end for `entropy01-core`:
//! flag parsing, logging setup, report printing and exit statuses.

pub mod cli;
pub mod commands;
pub mod exit_codes;
pub mod logger;
pub mod ui;

pub use commands::analyze::run_analyze;
