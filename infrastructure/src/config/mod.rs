//! Configuration file loading for flow
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FLOW_*` environment variables (e.g. `FLOW_STORAGE_DIR`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./flow.toml` or `./.flow.toml`
//! 4. Global config: `$XDG_CONFIG_HOME/flow/config.toml` (or platform equivalent)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileOutputConfig, FileStorageConfig};
pub use loader::ConfigLoader;
