use std::io::{self, Read, Stdin, Stdout, Write};

use log::warn;

use crate::io::CharIo;

/// Console over the process's stdin and stdout.
///
/// End of file and read errors both end the input. Output is flushed after
/// every write so echo shows up immediately on a raw terminal.
pub struct StdIo {
    stdin: Stdin,
    stdout: Stdout,
}

impl Default for StdIo {
    fn default() -> Self {
        Self::new()
    }
}

impl StdIo {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl CharIo for StdIo {
    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        loop {
            match self.stdin.lock().read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => return Some(byte[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!("read failed: {}", e);
                    return None;
                }
            }
        }
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_bytes(&[byte]);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let mut out = self.stdout.lock();
        if let Err(e) = out.write_all(bytes).and_then(|()| out.flush()) {
            warn!("write failed: {}", e);
        }
    }
}
