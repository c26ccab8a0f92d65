use crate::core::config::ConfigError;
use crate::platform::PlatformError;

/// Anything that can stop the `linesh` binary before or after the shell
/// runs. The shell loop itself has no failure mode.
#[derive(Debug)]
pub enum ShellError {
    Io(std::io::Error),
    ConfigError(ConfigError),
    FlagError(String),
    PlatformError(PlatformError),
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::ConfigError(err)
    }
}

impl From<PlatformError> for ShellError {
    fn from(err: PlatformError) -> Self {
        ShellError::PlatformError(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::ConfigError(e) => write!(f, "Config error: {}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
            ShellError::PlatformError(e) => write!(f, "Platform error: {}", e),
        }
    }
}

impl std::error::Error for ShellError {}
