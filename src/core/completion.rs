use log::debug;

use crate::core::shell::{Shell, PROMPT};
use crate::io::CharIo;

pub(crate) trait TabCompletion {
    /// Completes the typed line against the command names, listing every
    /// candidate and redrawing the prompt when there was at least one.
    fn complete(&mut self);
}

impl<IO: CharIo> TabCompletion for Shell<'_, IO> {
    fn complete(&mut self) {
        let typed = self.line;
        let commands = self.commands;

        let mut matches = 0usize;
        let mut last = None;
        for command in commands
            .iter()
            .filter(|command| command.starts_with(typed.as_bytes()))
        {
            matches += 1;
            last = Some(command);
            self.put_newline();
            self.put_str(command.name);
        }

        let Some(last) = last else {
            return;
        };
        debug!("{} completion candidate(s)", matches);
        if matches == 1 {
            self.line.replace(last.name.as_bytes());
        }

        self.put_newline();
        self.put_str(PROMPT);
        self.io.write_bytes(self.line.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::builtin;
    use crate::core::commands::Command;
    use crate::core::config::ShellConfig;
    use crate::io::ScriptedIo;

    fn typed<'a>(commands: &'a [Command<ScriptedIo>], text: &[u8]) -> Shell<'a, ScriptedIo> {
        let mut shell = Shell::new(ScriptedIo::default(), commands, ShellConfig::terminal());
        for &byte in text {
            shell.feed(Some(byte));
        }
        shell.io_mut().clear_output();
        shell
    }

    #[test]
    fn test_unnamed_commands_are_skipped() {
        let commands: [Command<ScriptedIo>; 2] = [
            Command::inert("", ""),
            Command::new("echo", "", builtin::echo),
        ];
        let mut shell = typed(&commands, b"");
        shell.complete();

        assert_eq!(shell.line(), b"echo");
        assert_eq!(shell.io().output_str(), "\r\necho\r\n> echo");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let commands: [Command<ScriptedIo>; 1] = [Command::new("echo", "", builtin::echo)];
        let mut shell = typed(&commands, b"E");
        shell.complete();

        assert_eq!(shell.line(), b"E");
        assert!(shell.io().output().is_empty());
    }

    #[test]
    fn test_full_name_completes_to_itself() {
        let commands: [Command<ScriptedIo>; 2] = [
            Command::new("echo", "", builtin::echo),
            Command::new("echoes", "", builtin::echo),
        ];
        let mut shell = typed(&commands, b"echoe");
        shell.complete();

        assert_eq!(shell.line(), b"echoes");
    }

    #[test]
    fn test_long_name_is_truncated_to_capacity() {
        let commands: [Command<ScriptedIo>; 1] =
            [Command::inert("a-very-long-command-name", "")];
        let mut shell = typed(&commands, b"a-");
        shell.complete();

        assert_eq!(shell.line(), &b"a-very-long-command-name"[..crate::CMDLINE_CAPACITY]);
    }
}
