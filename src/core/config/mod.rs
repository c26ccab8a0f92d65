use core::fmt;
use core::str::FromStr;

#[cfg(feature = "std")]
mod loader;
#[cfg(feature = "std")]
mod paths;

#[cfg(feature = "std")]
pub use loader::{ConfigError, ConfigLoader, Settings};
#[cfg(feature = "std")]
pub use paths::ConfigPaths;

/// Which input byte completes a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Complete on LF, for CR+LF and LF-only input.
    #[default]
    Lf,
    /// Complete on CR, for CR-only input.
    Cr,
}

impl FromStr for LineEnding {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lf" | "LF" => Ok(LineEnding::Lf),
            "cr" | "CR" => Ok(LineEnding::Cr),
            _ => Err(()),
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEnding::Lf => write!(f, "lf"),
            LineEnding::Cr => write!(f, "cr"),
        }
    }
}

/// Per-shell behaviour. Handlers may change it while the shell runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellConfig {
    pub line_ending: LineEnding,
    /// Act as a teletype: echo input, draw the prompt, support tab completion.
    pub echo: bool,
    /// Emit CR as part of every newline.
    pub emit_cr: bool,
    /// Emit LF as part of every newline.
    pub emit_lf: bool,
}

impl ShellConfig {
    /// Interactive terminal settings: LF completes a line, echo on, CR+LF
    /// newlines.
    pub const fn terminal() -> Self {
        Self {
            line_ending: LineEnding::Lf,
            echo: true,
            emit_cr: true,
            emit_lf: true,
        }
    }

    pub const fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub const fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub const fn with_newline(mut self, emit_cr: bool, emit_lf: bool) -> Self {
        self.emit_cr = emit_cr;
        self.emit_lf = emit_lf;
        self
    }
}

/// Parses the switch spellings accepted by the `set` command and the
/// configuration file.
pub fn parse_switch(value: &str) -> Option<bool> {
    match value {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
