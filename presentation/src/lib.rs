//! Presentation layer for flow
//!
//! This crate contains CLI definitions, command dispatch and output
//! formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, ReportArgs};
pub use cli::runner::{CommandError, CommandRunner};
pub use cli::time_arg::TimeArgError;
pub use output::console::{ConsoleFormatter, format_duration};
