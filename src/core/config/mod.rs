use std::{fmt, path::{Path, PathBuf}};

mod loader;
mod paths;

use loader::ConfigLoader;
use paths::ConfigPaths;

/// Settings for the interactive front end, read from `~/.fileshrc`.
#[derive(Debug, Clone)]
pub struct Config {
    pub history_file: PathBuf,
    pub history_size: usize,
    pub color: bool,
}

impl Config {
    pub const DEFAULT_HISTORY_SIZE: usize = 1000;

    pub fn with_defaults(history_file: PathBuf) -> Self {
        Config {
            history_file,
            history_size: Self::DEFAULT_HISTORY_SIZE,
            color: true,
        }
    }

    /// Defaults overlaid with the user's rc file, or with `custom` when
    /// given. A missing custom file is an error; a missing rc file is not.
    pub fn load(custom: Option<&Path>) -> Result<Self, ConfigError> {
        let paths = ConfigPaths::new()?;
        let mut config = Self::with_defaults(paths.history_path.clone());

        match custom {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::ConfigFileNotFound(path.display().to_string()));
                }
                ConfigLoader::new(path).load(&mut config)?;
            }
            None => ConfigLoader::new(&paths.rc_path).load_if_exists(&mut config)?,
        }
        Ok(config)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    HomeDirNotFound,
    ConfigFileNotFound(String),
    InvalidLine(usize, String),
    InvalidValue { key: String, value: String },
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
            ConfigError::HomeDirNotFound => write!(f, "Home directory not found"),
            ConfigError::ConfigFileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::InvalidLine(number, line) => {
                write!(f, "line {}: expected `key = value`, found `{}`", number, line)
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value `{}` for `{}`", value, key)
            }
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
