//! CLI command definitions

use super::time_arg::{parse_since, parse_until};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for flow
#[derive(Parser, Debug)]
#[command(name = "flow")]
#[command(author, version, about = "Flow is a tool to manage your time tracking")]
#[command(long_about = r#"
Flow tracks focused work sessions. Start a session on a project, optionally
tagged, stop it when you are done, and ask for reports over any time range.

Sessions are stored as one JSON file each in ~/.flow (see --storage-dir).

Configuration files are loaded from (in priority order):
1. FLOW_* environment variables
2. --config <path>     Explicit config file
3. ./flow.toml         Project-level config
4. ~/.config/flow/config.toml   Global config

Example:
  flow start my-project backend review
  flow status
  flow stop
  flow report --since 2024-04-01 --project my-project
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Directory holding the session files (overrides the configuration)
    #[arg(long, value_name = "PATH", global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl Cli {
    /// The command to run; a bare `flow` shows the status.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Status)
    }
}

/// Flow subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a new session on a project
    Start {
        /// Project the session belongs to
        project: String,

        /// Tags describing the work
        tags: Vec<String>,
    },

    /// Stop the flowing session
    Stop,

    /// Show the current or last session
    Status,

    /// List projects with their tags
    Projects,

    /// Report the sessions of a time range
    Report(ReportArgs),
}

/// Arguments of `flow report`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportArgs {
    /// Only sessions started at or after this date (YYYY-MM-DD [HH:MM[:SS]])
    #[arg(long, value_name = "DATE", value_parser = parse_since)]
    pub since: Option<DateTime<Utc>>,

    /// Only sessions started at or before this date (YYYY-MM-DD [HH:MM[:SS]])
    #[arg(long, value_name = "DATE", value_parser = parse_until)]
    pub until: Option<DateTime<Utc>>,

    /// Only sessions of this project
    #[arg(short, long, value_name = "NAME")]
    pub project: Option<String>,

    /// Only sessions started today
    #[arg(long, conflicts_with_all = ["since", "until"])]
    pub today: bool,
}
