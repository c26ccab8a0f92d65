use std::{fmt, fs, path::Path};

use log::debug;

use super::{parse_switch, ConfigPaths, LineEnding, ShellConfig};

/// Everything the host binary reads from its configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub shell: ShellConfig,
    /// Put the terminal into raw mode while the shell runs.
    pub raw: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            shell: ShellConfig::terminal(),
            raw: true,
        }
    }
}

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn load(&self) -> Result<Settings, ConfigError> {
        let mut settings = Settings::default();
        let path = &self.paths.config_path;

        if path.exists() {
            self.load_file(path, &mut settings)?;
        } else if self.paths.explicit {
            return Err(ConfigError::ConfigFileNotFound(
                path.to_string_lossy().to_string(),
            ));
        } else {
            debug!("no config file at {}", path.display());
        }
        Ok(settings)
    }

    fn load_file(&self, path: &Path, settings: &mut Settings) -> Result<(), ConfigError> {
        debug!("loading config from {}", path.display());
        let content = fs::read_to_string(path)?;
        for (index, line) in content.lines().enumerate() {
            self.process_line(index + 1, line, settings)?;
        }
        Ok(())
    }

    fn process_line(
        &self,
        number: usize,
        line: &str,
        settings: &mut Settings,
    ) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(ConfigError::Syntax(number));
        };
        let key = key.trim();
        let value = value.trim().trim_matches(|c| c == '\'' || c == '"');

        let invalid = || ConfigError::InvalidValue {
            line: number,
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "eol" => settings.shell.line_ending = value.parse::<LineEnding>().map_err(|()| invalid())?,
            "echo" => settings.shell.echo = parse_switch(value).ok_or_else(invalid)?,
            "cr" => settings.shell.emit_cr = parse_switch(value).ok_or_else(invalid)?,
            "lf" => settings.shell.emit_lf = parse_switch(value).ok_or_else(invalid)?,
            "raw" => settings.raw = parse_switch(value).ok_or_else(invalid)?,
            _ => {
                return Err(ConfigError::UnknownKey {
                    line: number,
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ConfigDirNotFound,
    ConfigFileNotFound(String),
    Syntax(usize),
    UnknownKey { line: usize, key: String },
    InvalidValue { line: usize, key: String, value: String },
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConfigDirNotFound => write!(f, "Config directory not found"),
            ConfigError::ConfigFileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::Syntax(line) => write!(f, "line {}: expected key = value", line),
            ConfigError::UnknownKey { line, key } => write!(f, "line {}: unknown key '{}'", line, key),
            ConfigError::InvalidValue { line, key, value } => {
                write!(f, "line {}: invalid value '{}' for '{}'", line, value, key)
            }
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
