//! Start session use case
//!
//! Opens a new flowing session on a project. Only one session may flow at a
//! time: starting while the last session is still running is refused.

use crate::ports::date_provider::DateProvider;
use crate::ports::id_provider::IdProvider;
use chrono::{DateTime, Utc};
use flow_domain::{RepositoryError, Session, SessionRepository};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when starting a session.
#[derive(Error, Debug)]
pub enum StartSessionError {
    #[error("Project name cannot be empty")]
    EmptyProject,

    /// The last session has not been stopped yet.
    #[error("A session is already flowing on project '{project}'")]
    AlreadyFlowing {
        project: String,
        started_at: DateTime<Utc>,
    },

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Input for the [`StartSessionUseCase`].
#[derive(Debug, Clone)]
pub struct StartSessionInput {
    pub project: String,
    pub tags: Vec<String>,
}

impl StartSessionInput {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Use case for starting a flow session.
#[derive(Clone)]
pub struct StartSessionUseCase {
    repository: Arc<dyn SessionRepository>,
    date_provider: Arc<dyn DateProvider>,
    id_provider: Arc<dyn IdProvider>,
}

impl StartSessionUseCase {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        date_provider: Arc<dyn DateProvider>,
        id_provider: Arc<dyn IdProvider>,
    ) -> Self {
        Self {
            repository,
            date_provider,
            id_provider,
        }
    }

    /// Create, persist and return the new flowing session.
    pub fn execute(&self, input: StartSessionInput) -> Result<Session, StartSessionError> {
        let project = input.project.trim();
        if project.is_empty() {
            return Err(StartSessionError::EmptyProject);
        }

        if let Some(last) = self.repository.find_last_session()?
            && last.is_flowing()
        {
            return Err(StartSessionError::AlreadyFlowing {
                project: last.project,
                started_at: last.start_time,
            });
        }

        let tags: Vec<String> = input
            .tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();

        let session = Session::start(
            self.id_provider.next_id(),
            self.date_provider.now(),
            project,
            tags,
        );
        debug!("Saving new session {}", session.id);
        self.repository.save(&session)?;

        info!(
            "Started session {} on project '{}'",
            session.id, session.project
        );
        Ok(session)
    }
}
