//! Line reading for the accumulation phase.
//!
//! Input is consumed eagerly to end-of-stream; nothing is reported until the
//! tally is frozen.

use log::{debug, trace};
use std::io::{self, BufRead};

use entropy01_stats::{ColumnTally, FrozenTally};

use crate::config::AnalysisConfig;
use crate::errors::Result;

/// Drops one trailing `\n` and then one trailing `\r`.
pub fn trim_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Reads one line into `buf`, keeping at most `cap` octets of it.
///
/// The rest of an over-long line is consumed and dropped, so memory stays
/// bounded by the column window. Returns `false` at end of stream.
pub fn read_capped_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>, cap: usize) -> io::Result<bool> {
    buf.clear();
    let mut read_any = false;

    loop {
        let available = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(read_any);
        }
        read_any = true;

        let (used, done) = match find_newline(available) {
            Some(pos) => (pos + 1, true),
            None => (available.len(), false),
        };
        let room = cap.saturating_sub(buf.len());
        buf.extend_from_slice(&available[..used.min(room)]);
        reader.consume(used);

        if done {
            return Ok(true);
        }
    }
}

fn find_newline(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|&b| b == b'\n')
}

/// Reads every line from `reader` into a column tally and freezes it.
pub fn accumulate_reader<R: BufRead>(mut reader: R, config: &AnalysisConfig) -> Result<FrozenTally> {
    let mut tally = ColumnTally::new(config.maxlen, config.ignsize);
    // Room for the window plus a CRLF terminator.
    let cap = config.maxlen + 2;
    let mut buf = Vec::with_capacity(cap);
    let mut lines_read: u64 = 0;

    while read_capped_line(&mut reader, &mut buf, cap)? {
        lines_read += 1;

        let line = trim_line_terminator(&buf);
        trace!("Line {}: {} octets", lines_read, line.len());
        tally.push_line(line);
    }

    debug!(
        "Read {} lines: {} counted, {} ignored, shortest {} octets",
        lines_read,
        tally.linecount(),
        tally.skipcount(),
        tally.minlen()
    );
    Ok(tally.finish())
}
