use log::{debug, trace};

use crate::core::commands::{self, Command, Dispatch};
use crate::core::completion::TabCompletion;
use crate::core::config::{LineEnding, ShellConfig};
use crate::core::keys::{Key, BACKSPACE};
use crate::core::line::{LineBuffer, Push};
use crate::core::tokenizer::Tokens;
use crate::io::CharIo;

/// Bytes a command line can hold.
pub const CMDLINE_CAPACITY: usize = 16;
/// Arguments kept per line, not counting the command name.
pub const MAX_ARGS: usize = 4;
pub const PROMPT: &str = "> ";

const NO_SUCH_COMMAND: &str = "No such command";
/// Move left, blank the cell, move left again.
const ERASE: &[u8] = b"\x08 \x08";

/// A line-editing shell bound to one console and one command table.
///
/// The shell owns its console and borrows the command table for its whole
/// life. It is driven either by [`run`](Shell::run), which blocks on the
/// console until stopped, or by handing it bytes one at a time with
/// [`feed`](Shell::feed).
pub struct Shell<'a, IO> {
    pub(crate) io: IO,
    pub(crate) commands: &'a [Command<IO>],
    pub(crate) config: ShellConfig,
    /// The line being typed.
    pub(crate) line: LineBuffer<CMDLINE_CAPACITY>,
    /// The last completed line, which `tokens` refers into.
    pub(crate) completed: LineBuffer<CMDLINE_CAPACITY>,
    pub(crate) tokens: Tokens<MAX_ARGS>,
    pub(crate) stop: bool,
}

impl<'a, IO: CharIo> Shell<'a, IO> {
    pub fn new(io: IO, commands: &'a [Command<IO>], config: ShellConfig) -> Self {
        debug!(
            "shell created with {} commands, config {:?}",
            commands.len(),
            config
        );
        Self {
            io,
            commands,
            config,
            line: LineBuffer::new(),
            completed: LineBuffer::new(),
            tokens: Tokens::default(),
            stop: false,
        }
    }

    /// Reads and handles bytes until a command or the input stops the shell.
    ///
    /// At least one byte is read even if a stop was already requested.
    pub fn run(&mut self) {
        if self.config.echo {
            self.put_str(PROMPT);
        }

        loop {
            let input = self.io.read_byte();
            self.feed(input);
            if self.stop {
                break;
            }
        }
        debug!("shell stopped");
    }

    /// Handles one input byte; `None` is end of input.
    pub fn feed(&mut self, input: Option<u8>) {
        let key = Key::classify(input);
        trace!("input {:?} read as {:?}", input, key);

        match key {
            Key::EndOfTransmission => self.stop = true,
            Key::LineFeed => self.on_line_ending(LineEnding::Lf),
            Key::CarriageReturn => self.on_line_ending(LineEnding::Cr),
            Key::Erase => self.on_erase(),
            Key::Tab => {
                if self.config.echo {
                    self.complete();
                }
            }
            Key::Char(byte) => self.on_char(byte),
        }
    }

    fn on_line_ending(&mut self, ending: LineEnding) {
        // The other line ending is swallowed.
        if ending == self.config.line_ending {
            self.on_newline();
        }
    }

    fn on_newline(&mut self) {
        if self.config.echo {
            self.put_newline();
        }

        match self.handle_line() {
            Dispatch::NotFound => {
                self.put_str(NO_SUCH_COMMAND);
                self.put_str(" \"");
                let name = self.tokens.name().range();
                self.io.write_bytes(&self.completed.as_bytes()[name]);
                self.put_byte(b'"');
                self.put_newline();
            }
            Dispatch::Failed(err) => {
                self.put_str(err.message());
                self.put_newline();
            }
            Dispatch::Handled | Dispatch::Ignored => {}
        }

        if self.config.echo {
            self.put_str(PROMPT);
        }
        self.line.clear();
    }

    fn handle_line(&mut self) -> Dispatch {
        self.completed = self.line;
        self.tokens = Tokens::parse(self.completed.as_bytes());

        let table = self.commands;
        let name = &self.completed.as_bytes()[self.tokens.name().range()];
        let Some(command) = commands::find(table, name) else {
            debug!("no command named {:?}", printable(name));
            return Dispatch::NotFound;
        };
        let Some(handler) = command.handler else {
            debug!("command {:?} has no handler", command.name);
            return Dispatch::Ignored;
        };

        debug!(
            "dispatching {:?} with {} argument(s)",
            command.name,
            self.tokens.len()
        );
        match handler(self) {
            Ok(()) => Dispatch::Handled,
            Err(err) => {
                debug!("command {:?} failed: {}", command.name, err);
                Dispatch::Failed(err)
            }
        }
    }

    fn on_erase(&mut self) {
        if self.line.pop() && self.config.echo {
            self.put_bytes(ERASE);
        }
    }

    fn on_char(&mut self, byte: u8) {
        if self.line.push(byte) == Push::Overwrote {
            trace!("line full, replaced last byte");
            if self.config.echo {
                self.put_byte(BACKSPACE);
            }
        }
        if self.config.echo {
            self.put_byte(byte);
        }
    }

    /// The `index`th argument of the last completed line.
    pub fn arg(&self, index: usize) -> Option<&[u8]> {
        self.tokens
            .get(index)
            .map(|span| &self.completed.as_bytes()[span.range()])
    }

    /// Like [`arg`](Shell::arg), but `None` also for arguments that are not
    /// UTF-8.
    pub fn arg_str(&self, index: usize) -> Option<&str> {
        self.arg(index)
            .and_then(|arg| core::str::from_utf8(arg).ok())
    }

    pub fn arg_count(&self) -> usize {
        self.tokens.len()
    }

    /// Command name of the last completed line.
    pub fn command_name(&self) -> &[u8] {
        &self.completed.as_bytes()[self.tokens.name().range()]
    }

    /// What has been typed on the current line so far.
    pub fn line(&self) -> &[u8] {
        self.line.as_bytes()
    }

    pub fn commands(&self) -> &'a [Command<IO>] {
        self.commands
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ShellConfig {
        &mut self.config
    }

    pub fn io(&self) -> &IO {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    pub fn into_io(self) -> IO {
        self.io
    }

    /// Stops [`run`](Shell::run) after the byte being handled.
    pub fn request_stop(&mut self) {
        self.stop = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stop
    }

    pub fn put_byte(&mut self, byte: u8) {
        self.io.write_byte(byte);
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.io.write_bytes(bytes);
    }

    pub fn put_str(&mut self, s: &str) {
        self.io.write_bytes(s.as_bytes());
    }

    /// Writes the `index`th argument. Returns `false` if there is none.
    pub fn put_arg(&mut self, index: usize) -> bool {
        match self.tokens.get(index) {
            Some(span) => {
                self.io.write_bytes(&self.completed.as_bytes()[span.range()]);
                true
            }
            None => false,
        }
    }

    /// Writes CR and/or LF as configured.
    pub fn put_newline(&mut self) {
        if self.config.emit_cr {
            self.io.write_byte(b'\r');
        }
        if self.config.emit_lf {
            self.io.write_byte(b'\n');
        }
    }
}

fn printable(bytes: &[u8]) -> &str {
    core::str::from_utf8(bytes).unwrap_or("<non-utf8>")
}
