use core::fmt;

use crate::core::shell::Shell;

pub mod builtin;

/// Called with the shell once a line naming its command is completed. The
/// line's arguments are available through [`Shell::arg`].
pub type Handler<IO> = fn(&mut Shell<'_, IO>) -> Result<(), CommandError>;

/// Failure reported by a command handler. The shell prints the message and
/// keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    Syntax,
    Permission,
    BadArguments,
    Busy,
}

impl CommandError {
    pub const fn message(&self) -> &'static str {
        match self {
            CommandError::Syntax => "Syntax error",
            CommandError::Permission => "Bad permissions",
            CommandError::BadArguments => "Bad argument(s)",
            CommandError::Busy => "Subsystem busy",
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}

/// One entry of a command table.
///
/// Tables are scanned in order, so keep them alphabetized if completion and
/// `help` output should be. An empty `name` is never matched.
pub struct Command<IO> {
    pub name: &'static str,
    pub help: &'static str,
    pub handler: Option<Handler<IO>>,
}

impl<IO> Command<IO> {
    pub const fn new(name: &'static str, help: &'static str, handler: Handler<IO>) -> Self {
        Self {
            name,
            help,
            handler: Some(handler),
        }
    }

    /// A command that is recognised but does nothing.
    pub const fn inert(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            help,
            handler: None,
        }
    }

    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn matches(&self, name: &[u8]) -> bool {
        self.is_named() && self.name.as_bytes() == name
    }

    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.is_named() && self.name.as_bytes().starts_with(prefix)
    }
}

impl<IO> Clone for Command<IO> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<IO> Copy for Command<IO> {}

impl<IO> fmt::Debug for Command<IO> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("help", &self.help)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

/// What happened to a completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    /// The command exists but has no handler.
    Ignored,
    Failed(CommandError),
    NotFound,
}

/// First command in table order whose name equals `name` exactly.
pub fn find<'a, IO>(commands: &'a [Command<IO>], name: &[u8]) -> Option<&'a Command<IO>> {
    commands.iter().find(|command| command.matches(name))
}
