//! Session status use case
//!
//! Reports on the most recent session: how long it has been flowing, or how
//! long it lasted once ended.

use crate::ports::date_provider::DateProvider;
use chrono::TimeDelta;
use flow_domain::{RepositoryError, Session, SessionRepository, round_to_second};
use std::sync::Arc;

/// Result of a status query.
#[derive(Debug, Clone)]
pub enum SessionStatusOutput {
    /// No session has ever been recorded
    Idle,
    /// The last session is still running
    Flowing { session: Session, elapsed: TimeDelta },
    /// The last session has ended
    Ended { session: Session },
}

impl SessionStatusOutput {
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionStatusOutput::Idle => None,
            SessionStatusOutput::Flowing { session, .. }
            | SessionStatusOutput::Ended { session } => Some(session),
        }
    }

    /// Time spent in the last session so far.
    pub fn elapsed(&self) -> TimeDelta {
        match self {
            SessionStatusOutput::Idle => TimeDelta::zero(),
            SessionStatusOutput::Flowing { elapsed, .. } => *elapsed,
            SessionStatusOutput::Ended { session } => session.duration(),
        }
    }
}

/// Use case for querying the current session status.
#[derive(Clone)]
pub struct SessionStatusUseCase {
    repository: Arc<dyn SessionRepository>,
    date_provider: Arc<dyn DateProvider>,
}

impl SessionStatusUseCase {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        date_provider: Arc<dyn DateProvider>,
    ) -> Self {
        Self {
            repository,
            date_provider,
        }
    }

    pub fn execute(&self) -> Result<SessionStatusOutput, RepositoryError> {
        let Some(session) = self.repository.find_last_session()? else {
            return Ok(SessionStatusOutput::Idle);
        };

        if session.is_flowing() {
            let elapsed = round_to_second(self.date_provider.now() - session.start_time);
            Ok(SessionStatusOutput::Flowing { session, elapsed })
        } else {
            Ok(SessionStatusOutput::Ended { session })
        }
    }
}
