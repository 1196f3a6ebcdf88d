use std::{fs, path::Path};

use super::{Config, ConfigError};

/// Reads `key = value` lines into a [`Config`].
pub struct ConfigLoader<'a> {
    path: &'a Path,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    pub fn load_if_exists(&self, config: &mut Config) -> Result<(), ConfigError> {
        if !self.path.exists() {
            log::debug!("no config file at {}", self.path.display());
            return Ok(());
        }
        self.load(config)
    }

    pub fn load(&self, config: &mut Config) -> Result<(), ConfigError> {
        let content = fs::read_to_string(self.path)?;
        for (number, line) in content.lines().enumerate() {
            self.process_line(number + 1, line, config)?;
        }
        log::debug!("loaded config from {}", self.path.display());
        Ok(())
    }

    fn process_line(&self, number: usize, line: &str, config: &mut Config) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(ConfigError::InvalidLine(number, line.to_string()));
        };
        let key = key.trim();
        let mut value = value.trim();

        // Remove quotes if present
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value = &value[1..value.len() - 1];
        }

        match key {
            "history_file" => config.history_file = value.into(),
            "history_size" => {
                config.history_size = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
            }
            "color" => {
                config.color = match value {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => {
                        return Err(ConfigError::InvalidValue {
                            key: key.to_string(),
                            value: value.to_string(),
                        })
                    }
                };
            }
            _ => log::warn!("{}:{}: unknown config key `{}`", self.path.display(), number, key),
        }
        Ok(())
    }
}
