use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        let table = [
            ("help", "-h", "--help", "Print this help message", false),
            ("version", "-v", "--version", "Show version information", false),
            ("config", "-c", "--config", "Read settings from this file", true),
            ("quiet", "-q", "--quiet", "Do not print the banner", false),
            ("debug", "-d", "--debug", "Enable debug logging on stderr", false),
            ("plain", "-p", "--plain", "Leave the terminal in cooked mode", false),
        ];
        for (name, short, long, description, takes_value) in table {
            flags.insert(
                name.to_string(),
                Flag {
                    short: short.to_string(),
                    long: long.to_string(),
                    description: description.to_string(),
                    takes_value,
                    value: None,
                },
            );
        }

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            let Some(flag) = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
            else {
                return Err(ShellError::FlagError(format!("Unknown argument {}", arg)));
            };

            if flag.takes_value {
                if i + 1 < args.len() {
                    flag.value = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    return Err(ShellError::FlagError(format!(
                        "Flag {} requires a value",
                        arg
                    )));
                }
            } else {
                flag.value = Some("true".to_string());
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: linesh [OPTIONS]");
        println!("\nOptions:");
        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by(|a, b| a.long.cmp(&b.long));
        for flag in flags {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_and_long_flags() {
        let mut flags = Flags::new();
        flags.parse(&args(&["-q", "--debug"])).unwrap();

        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("debug"));
        assert!(!flags.is_set("plain"));
    }

    #[test]
    fn test_config_takes_value() {
        let mut flags = Flags::new();
        flags.parse(&args(&["--config", "/tmp/linesh.conf", "-p"])).unwrap();

        assert_eq!(
            flags.get_value("config").map(String::as_str),
            Some("/tmp/linesh.conf")
        );
        assert!(flags.is_set("plain"));
    }

    #[test]
    fn test_missing_value_is_an_error() {
        let mut flags = Flags::new();
        assert!(matches!(
            flags.parse(&args(&["-c"])),
            Err(ShellError::FlagError(_))
        ));
    }

    #[test]
    fn test_unknown_argument_is_an_error() {
        let mut flags = Flags::new();
        assert!(matches!(
            flags.parse(&args(&["--colour"])),
            Err(ShellError::FlagError(_))
        ));
    }
}
