use std::io;
use std::mem::MaybeUninit;

use libc::{c_int, termios, ICRNL, STDIN_FILENO, TCSANOW};
use log::{debug, warn};

use super::PlatformError;

/// Keeps the terminal on stdin in raw mode until dropped.
///
/// Raw mode hands every key press to the shell unprocessed and stops the
/// terminal from echoing, so the shell's own echo is the only one.
pub struct RawMode {
    saved: termios,
}

impl RawMode {
    /// Switches stdin to raw mode. With `map_cr` set, CR is still delivered
    /// as LF, for keyboards that only send CR on Enter.
    pub fn enter(map_cr: bool) -> Result<Self, PlatformError> {
        if unsafe { libc::isatty(STDIN_FILENO) } != 1 {
            return Err(PlatformError::NotATerminal);
        }

        let saved = get_attributes(STDIN_FILENO)?;
        let mut raw = saved;
        unsafe { libc::cfmakeraw(&mut raw) };
        if map_cr {
            raw.c_iflag |= ICRNL;
        }
        set_attributes(STDIN_FILENO, &raw)?;
        debug!("terminal switched to raw mode");

        Ok(RawMode { saved })
    }

    /// The settings that will be restored on drop.
    pub fn saved(&self) -> termios {
        self.saved
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = set_attributes(STDIN_FILENO, &self.saved) {
            warn!("failed to restore terminal: {}", e);
        } else {
            debug!("terminal restored");
        }
    }
}

fn get_attributes(fd: c_int) -> io::Result<termios> {
    let mut attributes = MaybeUninit::<termios>::uninit();
    if unsafe { libc::tcgetattr(fd, attributes.as_mut_ptr()) } != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(unsafe { attributes.assume_init() })
}

pub(super) fn set_attributes(fd: c_int, attributes: &termios) -> io::Result<()> {
    if unsafe { libc::tcsetattr(fd, TCSANOW, attributes) } != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}
