//! Storage configuration from TOML (`[storage]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Directory holding the session files; `~/.flow` when unset.
    /// A leading `~/` is expanded to the home directory.
    pub dir: Option<PathBuf>,
}

impl FileStorageConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        match &self.dir {
            Some(dir) if dir.as_os_str().is_empty() => Err(ConfigValidationError::EmptyStorageDir),
            _ => Ok(()),
        }
    }

    /// The configured directory with `~` expanded, if any.
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        self.dir.as_deref().map(expand_home)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
