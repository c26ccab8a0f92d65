/// Fixed-capacity command line with a cursor at the end of the typed text.
///
/// Bytes `[0, len)` are what the user typed; everything after is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBuffer<const N: usize> {
    bytes: [u8; N],
    cursor: usize,
}

/// Where a pushed byte ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Push {
    Appended,
    /// The buffer was full and the last slot was overwritten.
    Overwrote,
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineBuffer<N> {
    pub const CAPACITY: usize = N;

    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_full(&self) -> bool {
        self.cursor >= N
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.cursor]
    }

    /// Appends `byte`, or replaces the last byte when the line is full so the
    /// newest input always stays visible.
    pub fn push(&mut self, byte: u8) -> Push {
        if N == 0 {
            return Push::Overwrote;
        }
        let outcome = if self.is_full() {
            self.cursor = N - 1;
            Push::Overwrote
        } else {
            Push::Appended
        };
        self.bytes[self.cursor] = byte;
        self.cursor += 1;
        outcome
    }

    /// Removes the last byte. Returns `false` on an empty line.
    pub fn pop(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.bytes[self.cursor] = 0;
        true
    }

    /// Replaces the whole line, truncating `text` to capacity.
    pub fn replace(&mut self, text: &[u8]) {
        let len = text.len().min(N);
        self.bytes = [0; N];
        self.bytes[..len].copy_from_slice(&text[..len]);
        self.cursor = len;
    }

    pub fn clear(&mut self) {
        self.bytes = [0; N];
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop() {
        let mut line = LineBuffer::<4>::new();
        assert_eq!(line.push(b'a'), Push::Appended);
        assert_eq!(line.push(b'b'), Push::Appended);
        assert_eq!(line.as_bytes(), b"ab");
        assert!(line.pop());
        assert_eq!(line.as_bytes(), b"a");
        assert!(line.pop());
        assert!(!line.pop());
        assert_eq!(line.len(), 0);
    }

    #[test]
    fn test_full_line_keeps_newest_byte() {
        let mut line = LineBuffer::<4>::new();
        for byte in *b"abcd" {
            assert_eq!(line.push(byte), Push::Appended);
        }
        assert!(line.is_full());
        assert_eq!(line.push(b'e'), Push::Overwrote);
        assert_eq!(line.push(b'f'), Push::Overwrote);
        assert_eq!(line.as_bytes(), b"abcf");
        assert_eq!(line.len(), 4);
    }

    #[test]
    fn test_replace_truncates() {
        let mut line = LineBuffer::<4>::new();
        line.push(b'x');
        line.replace(b"abcdef");
        assert_eq!(line.as_bytes(), b"abcd");
        line.replace(b"z");
        assert_eq!(line.as_bytes(), b"z");
        line.clear();
        assert!(line.is_empty());
    }
}
