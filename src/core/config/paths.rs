use super::ConfigError;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_path: PathBuf,
    /// Set when the path was given on the command line; such a file must
    /// exist.
    pub explicit: bool,
}

impl ConfigPaths {
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(ConfigPaths {
            config_path: config_dir.join("linesh").join("config"),
            explicit: false,
        })
    }

    pub fn with_override(path: impl Into<PathBuf>) -> Self {
        ConfigPaths {
            config_path: path.into(),
            explicit: true,
        }
    }
}
