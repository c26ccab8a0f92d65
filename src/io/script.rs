use std::collections::VecDeque;

use super::CharIo;
use crate::core::keys::{BACKSPACE, DELETE};

/// In-memory console driven by a scripted input stream.
///
/// Everything the shell writes is kept twice: verbatim in [`output`], and
/// rendered onto a simulated screen where backspace and delete
/// remove the last rendered byte, the way a terminal would show it.
///
/// [`output`]: ScriptedIo::output
#[derive(Debug, Clone, Default)]
pub struct ScriptedIo {
    input: VecDeque<u8>,
    output: Vec<u8>,
    screen: Vec<u8>,
}

impl ScriptedIo {
    pub fn new(input: impl AsRef<[u8]>) -> Self {
        Self {
            input: input.as_ref().iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn push_input(&mut self, bytes: impl AsRef<[u8]>) {
        self.input.extend(bytes.as_ref().iter().copied());
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    pub fn screen(&self) -> &[u8] {
        &self.screen
    }

    pub fn screen_str(&self) -> String {
        String::from_utf8_lossy(&self.screen).into_owned()
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
        self.screen.clear();
    }
}

impl CharIo for ScriptedIo {
    fn read_byte(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    fn write_byte(&mut self, byte: u8) {
        if byte == BACKSPACE || byte == DELETE {
            self.screen.pop();
        } else {
            self.screen.push(byte);
        }
        self.output.push(byte);
    }
}
