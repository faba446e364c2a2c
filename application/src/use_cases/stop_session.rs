//! Stop session use case

use crate::ports::date_provider::DateProvider;
use chrono::{DateTime, Utc};
use flow_domain::{RepositoryError, Session, SessionRepository};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur when stopping a session.
#[derive(Error, Debug)]
pub enum StopSessionError {
    /// There is no session at all, or the last one already ended.
    #[error("No flowing session to stop")]
    NoFlowingSession,

    /// The clock reads earlier than the session start; nothing is saved.
    #[error("Cannot stop session started at {started_at}: clock reads {now}")]
    EndBeforeStart {
        started_at: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case for ending the currently flowing session.
#[derive(Clone)]
pub struct StopSessionUseCase {
    repository: Arc<dyn SessionRepository>,
    date_provider: Arc<dyn DateProvider>,
}

impl StopSessionUseCase {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        date_provider: Arc<dyn DateProvider>,
    ) -> Self {
        Self {
            repository,
            date_provider,
        }
    }

    /// Stamp the flowing session with the current time and persist it.
    pub fn execute(&self) -> Result<Session, StopSessionError> {
        let mut session = match self.repository.find_last_session()? {
            Some(session) if session.is_flowing() => session,
            _ => return Err(StopSessionError::NoFlowingSession),
        };

        let now = self.date_provider.now();
        if now < session.start_time {
            return Err(StopSessionError::EndBeforeStart {
                started_at: session.start_time,
                now,
            });
        }

        session.stop(now);
        self.repository.save(&session)?;

        info!(
            "Stopped session {} on project '{}' after {}s",
            session.id,
            session.project,
            session.duration().num_seconds()
        );
        Ok(session)
    }
}
