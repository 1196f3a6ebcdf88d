use super::ConfigError;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
    pub history_path: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Self::in_home(&home))
    }

    pub fn in_home(home: &Path) -> Self {
        ConfigPaths {
            rc_path: home.join(".fileshrc"),
            history_path: home.join(".filesh_history"),
        }
    }
}
