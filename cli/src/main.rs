//! CLI entrypoint for flow
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use flow_application::App;
use flow_domain::SessionRepository;
use flow_infrastructure::{
    ConfigLoader, FileConfig, FileSystemSessionRepository, SystemDateProvider, UuidIdProvider,
};
use flow_presentation::{Cli, CommandRunner};
use std::io;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    info!("Starting flow");

    // Show config file locations and exit
    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Err(e) = config.validate() {
        warn!("Invalid configuration: {}", e);
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let repository = open_repository(&cli, &config)?;
    info!("Storing sessions in {}", repository.dir().display());

    let date_provider = Arc::new(SystemDateProvider);
    let repository: Arc<dyn SessionRepository> = Arc::new(repository);
    let app = App::new(repository, date_provider.clone(), Arc::new(UuidIdProvider));
    let runner = CommandRunner::new(app, date_provider);

    let mut stdout = io::stdout().lock();
    runner.run(cli.resolved_command(), &mut stdout)?;

    Ok(())
}

/// Storage directory priority: `--storage-dir`, then `[storage] dir`, then `~/.flow`.
fn open_repository(cli: &Cli, config: &FileConfig) -> Result<FileSystemSessionRepository> {
    let repository = match cli
        .storage_dir
        .clone()
        .or_else(|| config.storage.resolved_dir())
    {
        Some(dir) => FileSystemSessionRepository::new_in(dir)?,
        None => FileSystemSessionRepository::default_location()?,
    };
    Ok(repository)
}
