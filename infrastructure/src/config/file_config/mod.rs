//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod output;
mod storage;

pub use output::FileOutputConfig;
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("storage.dir cannot be empty")]
    EmptyStorageDir,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where sessions are stored
    pub storage: FileStorageConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.storage.validate()
    }
}
