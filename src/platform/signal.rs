use std::thread;

use libc::{c_int, termios, STDIN_FILENO};
use log::{debug, warn};
use signal_hook::consts::{SIGHUP, SIGQUIT, SIGTERM};
use signal_hook::iterator::Signals;

use super::raw::set_attributes;
use super::PlatformError;

/// Restores `saved` on stdin and exits when the process is asked to
/// terminate, so a killed shell does not leave the terminal raw.
pub fn restore_terminal_on_exit(saved: termios) -> Result<(), PlatformError> {
    let mut signals = Signals::new([SIGTERM, SIGHUP, SIGQUIT])
        .map_err(|e| PlatformError::SignalError(e.to_string()))?;

    thread::Builder::new()
        .name("linesh-signals".to_string())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                debug!("caught signal {}, restoring terminal", signal);
                restore(STDIN_FILENO, &saved);
                std::process::exit(128 + signal);
            }
        })
        .map_err(|e| PlatformError::SignalError(e.to_string()))?;
    Ok(())
}

fn restore(fd: c_int, saved: &termios) -> bool {
    match set_attributes(fd, saved) {
        Ok(()) => true,
        Err(e) => {
            warn!("failed to restore terminal: {}", e);
            false
        }
    }
}

/// Outside raw mode Ctrl-C arrives as SIGINT; point the user at `exit`
/// instead of dying mid-line.
pub fn hint_on_interrupt() -> Result<(), PlatformError> {
    ctrlc::set_handler(move || {
        println!("\r\nUse 'exit' to exit the shell");
    })
    .map_err(|e| PlatformError::SignalError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_reports_bad_descriptor() {
        let saved: termios = unsafe { std::mem::zeroed() };
        assert!(!restore(-1, &saved));
    }
}
