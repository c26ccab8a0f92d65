//! Control bytes understood by the line editor.

pub const END_OF_TRANSMISSION: u8 = 4;
pub const BACKSPACE: u8 = 8;
pub const TAB: u8 = b'\t';
pub const LINE_FEED: u8 = b'\n';
pub const CARRIAGE_RETURN: u8 = b'\r';
pub const DELETE: u8 = 127;

/// What a single input byte means to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// EOT, or the input stream ended.
    EndOfTransmission,
    LineFeed,
    CarriageReturn,
    /// Backspace or delete.
    Erase,
    Tab,
    Char(u8),
}

impl Key {
    pub fn classify(input: Option<u8>) -> Self {
        match input {
            None | Some(END_OF_TRANSMISSION) => Key::EndOfTransmission,
            Some(LINE_FEED) => Key::LineFeed,
            Some(CARRIAGE_RETURN) => Key::CarriageReturn,
            Some(BACKSPACE) | Some(DELETE) => Key::Erase,
            Some(TAB) => Key::Tab,
            Some(byte) => Key::Char(byte),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_control_bytes() {
        assert_eq!(Key::classify(Some(4)), Key::EndOfTransmission);
        assert_eq!(Key::classify(None), Key::EndOfTransmission);
        assert_eq!(Key::classify(Some(10)), Key::LineFeed);
        assert_eq!(Key::classify(Some(13)), Key::CarriageReturn);
        assert_eq!(Key::classify(Some(8)), Key::Erase);
        assert_eq!(Key::classify(Some(127)), Key::Erase);
        assert_eq!(Key::classify(Some(9)), Key::Tab);
    }

    #[test]
    fn test_other_bytes_are_chars() {
        assert_eq!(Key::classify(Some(b'a')), Key::Char(b'a'));
        assert_eq!(Key::classify(Some(0)), Key::Char(0));
        assert_eq!(Key::classify(Some(3)), Key::Char(3));
        assert_eq!(Key::classify(Some(0xff)), Key::Char(0xff));
    }
}
