//! In-memory session repository
//!
//! Holds sessions for the lifetime of the process only. Used as a test
//! double and wherever durability is not needed.

use flow_domain::{RepositoryError, Session, SessionRepository, sort_by_start_time};
use std::sync::RwLock;

/// Session repository backed by a vector.
///
/// `save` upserts by session id, the same key the file system repository
/// uses for its file names.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<Vec<Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sessions(sessions: Vec<Session>) -> Self {
        Self {
            sessions: RwLock::new(sessions),
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A poisoned lock only means a panic happened mid-operation elsewhere;
    // the vector itself is still consistent.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Session>> {
        self.sessions.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn save(&self, session: &Session) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        match sessions.iter().position(|s| s.id == session.id) {
            Some(index) => sessions[index] = session.clone(),
            None => sessions.push(session.clone()),
        }
        Ok(())
    }

    fn find_all_sessions(&self) -> Result<Vec<Session>, RepositoryError> {
        let mut sessions = self.read().clone();
        sort_by_start_time(&mut sessions);
        Ok(sessions)
    }
}
