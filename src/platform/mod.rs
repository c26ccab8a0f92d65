//! Host-side glue: a console over stdin/stdout and terminal mode handling.

#[cfg(unix)]
mod raw;
#[cfg(unix)]
pub mod signal;
mod stdio;

#[cfg(unix)]
pub use raw::RawMode;
pub use stdio::StdIo;

use std::fmt;

use crate::core::config::{LineEnding, ShellConfig};

#[derive(Debug)]
pub enum PlatformError {
    NotATerminal,
    Termios(std::io::Error),
    SignalError(String),
}

impl From<std::io::Error> for PlatformError {
    fn from(e: std::io::Error) -> Self {
        PlatformError::Termios(e)
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::NotATerminal => write!(f, "stdin is not a terminal"),
            PlatformError::Termios(e) => write!(f, "Terminal error: {}", e),
            PlatformError::SignalError(msg) => write!(f, "Signal error: {}", msg),
        }
    }
}

impl std::error::Error for PlatformError {}

/// Whether raw mode keeps `ICRNL`, turning the CR sent by Enter into LF.
///
/// Only input is affected; the shell writes its own CR on output.
pub fn keeps_cr_mapping(config: &ShellConfig) -> bool {
    config.line_ending == LineEnding::Lf
}
