// entropy01/src/ui/output_format.rs
//! Formatting of diagnostic messages written to stderr.
//!
//! Messages are prefixed with the program name, as in `entropy01: ...`, and
//! coloured only when the destination is a terminal.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes `"<program>: <message>"`, with the program name in bold red when coloured.
pub fn print_error_message<W: Write>(
    writer: &mut W,
    program: &str,
    message: &str,
    supports_color: bool,
) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}: {}", program.red().bold(), message)
    } else {
        writeln!(writer, "{}: {}", program, message)
    }
}

/// Writes the short usage block shown after configuration errors.
pub fn print_usage<W: Write>(writer: &mut W, usage: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "\n{}", usage.yellow())
    } else {
        writeln!(writer, "\n{}", usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_error_message() {
        let mut out = Vec::new();
        print_error_message(&mut out, "entropy01", "-i value: 0 must be > 0", false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "entropy01: -i value: 0 must be > 0\n");
    }

    #[test]
    fn test_coloured_error_message_keeps_text() {
        let mut out = Vec::new();
        print_error_message(&mut out, "entropy01", "boom", true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("entropy01"));
        assert!(text.ends_with(": boom\n"));
    }

    #[test]
    fn test_usage_block() {
        let mut out = Vec::new();
        print_usage(&mut out, "Usage: entropy01 [OPTIONS]", false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nUsage: entropy01 [OPTIONS]\n");
    }
}
