//! View sessions report use case
//!
//! Collects the sessions started inside a [`TimeRange`] and totals the time
//! spent per project and per tag.
//!
//! # Totals
//!
//! - Only ended sessions contribute time; flowing sessions are listed but
//!   count as zero until they are stopped.
//! - A session's duration is credited once to each distinct tag it carries,
//!   so tag totals of a project may add up to more than the project total.
//! - Projects and tags appear in order of first use within the range.

use crate::use_cases::shared::total_duration;
use chrono::TimeDelta;
use flow_domain::{OrderedSet, RepositoryError, Session, SessionRepository, TimeRange};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Input for the [`ViewSessionsReportUseCase`].
#[derive(Debug, Clone, Default)]
pub struct ViewSessionsReportInput {
    pub range: TimeRange,
    /// Restrict the report to a single project
    pub project: Option<String>,
}

impl ViewSessionsReportInput {
    pub fn new(range: TimeRange) -> Self {
        Self {
            range,
            project: None,
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }
}

/// Time spent on one tag of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagReport {
    pub name: String,
    pub total: TimeDelta,
}

/// Aggregated time for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReport {
    pub name: String,
    pub session_count: usize,
    pub total: TimeDelta,
    pub tags: Vec<TagReport>,
}

/// Output of the [`ViewSessionsReportUseCase`].
#[derive(Debug, Clone)]
pub struct SessionsReport {
    pub range: TimeRange,
    /// Matching sessions, ascending by start time
    pub sessions: Vec<Session>,
    pub projects: Vec<ProjectReport>,
    pub total: TimeDelta,
}

impl SessionsReport {
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn project(&self, name: &str) -> Option<&ProjectReport> {
        self.projects.iter().find(|p| p.name == name)
    }

    fn build(range: TimeRange, sessions: Vec<Session>) -> Self {
        let project_names: OrderedSet<&str> =
            sessions.iter().map(|s| s.project.as_str()).collect();

        let projects = project_names
            .iter()
            .map(|name| {
                let project_sessions: Vec<&Session> =
                    sessions.iter().filter(|s| s.project == *name).collect();
                Self::build_project(name, &project_sessions)
            })
            .collect();

        let total = total_duration(&sessions);
        Self {
            range,
            sessions,
            projects,
            total,
        }
    }

    fn build_project(name: &str, sessions: &[&Session]) -> ProjectReport {
        let mut tag_order: OrderedSet<&str> = OrderedSet::new();
        let mut tag_totals: HashMap<&str, TimeDelta> = HashMap::new();

        for session in sessions {
            let distinct: OrderedSet<&str> = session.tags.iter().map(String::as_str).collect();
            for tag in distinct {
                tag_order.insert(tag);
                *tag_totals.entry(tag).or_insert_with(TimeDelta::zero) += session.duration();
            }
        }

        let tags = tag_order
            .into_iter()
            .map(|tag| TagReport {
                name: tag.to_string(),
                total: tag_totals.get(tag).copied().unwrap_or_else(TimeDelta::zero),
            })
            .collect();

        ProjectReport {
            name: name.to_string(),
            session_count: sessions.len(),
            total: total_duration(sessions.iter().copied()),
            tags,
        }
    }
}

/// Use case for reporting the sessions of a time range.
#[derive(Clone)]
pub struct ViewSessionsReportUseCase {
    repository: Arc<dyn SessionRepository>,
}

impl ViewSessionsReportUseCase {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(
        &self,
        input: ViewSessionsReportInput,
    ) -> Result<SessionsReport, RepositoryError> {
        let mut sessions = self.repository.find_in_time_range(&input.range)?;
        if let Some(project) = &input.project {
            sessions.retain(|session| &session.project == project);
        }

        debug!("Building report over {} sessions", sessions.len());
        Ok(SessionsReport::build(input.range, sessions))
    }
}
