//! Dispatches parsed commands to the application use cases

use super::commands::{Command, ReportArgs};
use super::time_arg::{TimeArgError, day_bounds_in};
use crate::output::console::ConsoleFormatter;
use chrono::Local;
use flow_application::{
    App, DateProvider, StartSessionError, StartSessionInput, StopSessionError,
    ViewSessionsReportInput,
};
use flow_domain::{RepositoryError, TimeRange};
use std::io::{self, Write};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by a command run.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Start(#[from] StartSessionError),

    #[error(transparent)]
    Stop(#[from] StopSessionError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    TimeArg(#[from] TimeArgError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Runs flow commands against an [`App`] and renders the results.
pub struct CommandRunner {
    app: App,
    date_provider: Arc<dyn DateProvider>,
}

impl CommandRunner {
    /// The date provider resolves relative ranges such as `--today`.
    pub fn new(app: App, date_provider: Arc<dyn DateProvider>) -> Self {
        Self { app, date_provider }
    }

    /// Execute `command`, writing its human-readable result to `out`.
    pub fn run(&self, command: Command, out: &mut dyn Write) -> Result<(), CommandError> {
        debug!("Running command {:?}", command);
        let output = match command {
            Command::Start { project, tags } => {
                let session = self
                    .app
                    .start_session
                    .execute(StartSessionInput::new(project).with_tags(tags))?;
                ConsoleFormatter::format_started(&session)
            }
            Command::Stop => {
                let session = self.app.stop_session.execute()?;
                ConsoleFormatter::format_stopped(&session)
            }
            Command::Status => {
                let status = self.app.session_status.execute()?;
                ConsoleFormatter::format_status(&status)
            }
            Command::Projects => {
                let projects = self.app.list_projects.execute()?;
                ConsoleFormatter::format_projects(&projects)
            }
            Command::Report(args) => {
                let input = self.report_input(args)?;
                let report = self.app.view_sessions_report.execute(input)?;
                ConsoleFormatter::format_report(&report)
            }
        };

        writeln!(out, "{}", output.trim_end())?;
        Ok(())
    }

    fn report_input(&self, args: ReportArgs) -> Result<ViewSessionsReportInput, TimeArgError> {
        let range = if args.today {
            let (since, until) = day_bounds_in(self.date_provider.now(), &Local)?;
            TimeRange::between(since, until)
        } else {
            TimeRange {
                since: args.since,
                until: args.until,
            }
        };

        let input = ViewSessionsReportInput::new(range);
        Ok(match args.project {
            Some(project) => input.with_project(project),
            None => input,
        })
    }
}
