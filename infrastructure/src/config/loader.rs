//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;
use tracing::debug;

const PROJECT_CONFIG_FILES: [&str; 2] = ["flow.toml", ".flow.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `FLOW_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./flow.toml` or `./.flow.toml`
    /// 4. Global config: `<config dir>/flow/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut files = Vec::new();

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from {}", global_path.display());
            files.push(global_path);
        }

        if let Some(path) = Self::project_config_path() {
            debug!("Loading project config from {}", path.display());
            files.push(path);
        }

        if let Some(path) = config_path {
            debug!("Loading explicit config from {}", path.display());
            files.push(path.clone());
        }

        Self::load_from(&files)
    }

    /// Merge `files` over the defaults, later files winning, then apply the
    /// `FLOW_*` environment variables.
    fn load_from(files: &[PathBuf]) -> Result<FileConfig, Box<figment::Error>> {
        let figment = files.iter().fold(
            Figment::new().merge(Serialized::defaults(FileConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        );

        figment
            .merge(Env::prefixed("FLOW_").split("_"))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns `<config dir>/flow/config.toml`, e.g.
    /// `~/.config/flow/config.toml` on Linux.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("flow").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Environment: FLOW_STORAGE_DIR, FLOW_OUTPUT_COLOR");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./flow.toml or ./.flow.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
