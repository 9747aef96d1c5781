// entropy01/src/commands/mod.rs
pub mod analyze;
