//! The byte-level boundary between the shell engine and whatever console it
//! is attached to.

#[cfg(feature = "std")]
mod script;

#[cfg(feature = "std")]
pub use script::ScriptedIo;

/// Blocking single-byte console access.
///
/// Implementations are supplied by the platform (a UART, a terminal, a test
/// script). The engine never sees an error from this trait: a failed or
/// closed input stream is reported as `None` and stops the shell, and
/// writes are best effort.
pub trait CharIo {
    /// Blocks until one byte is available. `None` means end of stream.
    fn read_byte(&mut self) -> Option<u8>;

    fn write_byte(&mut self, byte: u8);

    fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }
}

impl<T: CharIo + ?Sized> CharIo for &mut T {
    fn read_byte(&mut self) -> Option<u8> {
        (**self).read_byte()
    }

    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte)
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes)
    }
}
