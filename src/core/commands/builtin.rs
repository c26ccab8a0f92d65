//! Example commands: `#`, `echo`, `exit`, `help` and `set`.
//!
//! They are ordinary handlers with no special standing in the engine; a
//! firmware image is free to use, replace or omit any of them.

use log::debug;

use super::{Command, CommandError};
use crate::core::config::{parse_switch, LineEnding};
use crate::core::shell::{Shell, CMDLINE_CAPACITY};
use crate::io::CharIo;

/// The example commands, alphabetized.
pub fn commands<IO: CharIo>() -> [Command<IO>; 5] {
    [
        Command::new("#", "Comment; the rest of the line is ignored", comment),
        Command::new("echo", "Prints arguments", echo),
        Command::new("exit", "Quits the shell", exit),
        Command::new("help", "Prints commands", help),
        Command::new("set", "set <echo|cr|lf|eol> <value>", set),
    ]
}

/// Lists `name: help` for every command, or only for those starting with
/// the first argument.
pub fn help<IO: CharIo>(shell: &mut Shell<'_, IO>) -> Result<(), CommandError> {
    let mut prefix = [0u8; CMDLINE_CAPACITY];
    let len = match shell.arg(0) {
        Some(arg) => {
            prefix[..arg.len()].copy_from_slice(arg);
            arg.len()
        }
        None => 0,
    };

    for command in shell.commands() {
        if command.starts_with(&prefix[..len]) {
            shell.put_str(command.name);
            shell.put_str(": ");
            shell.put_str(command.help);
            shell.put_newline();
        }
    }
    Ok(())
}

/// Prints each argument on its own line.
pub fn echo<IO: CharIo>(shell: &mut Shell<'_, IO>) -> Result<(), CommandError> {
    for index in 0..shell.arg_count() {
        shell.put_arg(index);
        shell.put_newline();
    }
    Ok(())
}

pub fn exit<IO: CharIo>(shell: &mut Shell<'_, IO>) -> Result<(), CommandError> {
    shell.request_stop();
    Ok(())
}

pub fn comment<IO: CharIo>(_shell: &mut Shell<'_, IO>) -> Result<(), CommandError> {
    Ok(())
}

/// `set <key> <value>`: changes the running shell's configuration.
///
/// `echo`, `cr` and `lf` take a switch (`on`/`off`), `eol` takes `cr` or
/// `lf`.
pub fn set<IO: CharIo>(shell: &mut Shell<'_, IO>) -> Result<(), CommandError> {
    if shell.arg_count() != 2 {
        return Err(CommandError::BadArguments);
    }
    let key = shell.arg_str(0).ok_or(CommandError::BadArguments)?;
    let value = shell.arg_str(1).ok_or(CommandError::BadArguments)?;

    let mut config = *shell.config();
    match key {
        "echo" => config.echo = parse_switch(value).ok_or(CommandError::BadArguments)?,
        "cr" => config.emit_cr = parse_switch(value).ok_or(CommandError::BadArguments)?,
        "lf" => config.emit_lf = parse_switch(value).ok_or(CommandError::BadArguments)?,
        "eol" => {
            config.line_ending = value
                .parse::<LineEnding>()
                .map_err(|()| CommandError::BadArguments)?
        }
        _ => return Err(CommandError::BadArguments),
    }

    debug!("set {} = {}", key, value);
    *shell.config_mut() = config;
    Ok(())
}
