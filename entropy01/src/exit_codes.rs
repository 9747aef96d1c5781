// entropy01/src/exit_codes.rs
//! Process exit statuses.

use entropy01_core::Entropy01Error;

pub const SUCCESS: u8 = 0;
pub const INVALID_MAXLEN: u8 = 1;
pub const IO_FAILURE: u8 = 2;
pub const INVALID_IGNSIZE: u8 = 3;
pub const USAGE: u8 = 4;
pub const INTERNAL: u8 = 18;

/// Maps a failed run to its exit status.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<Entropy01Error>() {
        Some(Entropy01Error::InvalidMaxLen { .. }) => INVALID_MAXLEN,
        Some(Entropy01Error::InvalidIgnSize(_)) => INVALID_IGNSIZE,
        Some(Entropy01Error::Io(_)) => IO_FAILURE,
        Some(Entropy01Error::Stats(_)) => INTERNAL,
        _ if err.downcast_ref::<std::io::Error>().is_some() => IO_FAILURE,
        _ => INTERNAL,
    }
}
