//! Session repository trait

use super::entities::Session;
use super::value_objects::TimeRange;
use crate::core::ordered_set::OrderedSet;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by session persistence.
///
/// "Nothing found" is never an error: queries return empty vectors or `None`.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Failed to initialize session storage at {}: {source}", path.display())]
    Initialization {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write session {id}: {source}")]
    Write {
        id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read session storage at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed session file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

/// Repository trait for flow sessions
///
/// The sole owner of the session collection. Implementations live in the
/// infrastructure layer and only need to provide [`save`](Self::save) and
/// [`find_all_sessions`](Self::find_all_sessions); every other query is
/// derived from the sorted enumeration and may be overridden when a backend
/// can answer it more cheaply.
pub trait SessionRepository: Send + Sync {
    /// Insert a session, or replace the stored session with the same id.
    fn save(&self, session: &Session) -> Result<(), RepositoryError>;

    /// All sessions, ascending by start time.
    fn find_all_sessions(&self) -> Result<Vec<Session>, RepositoryError>;

    /// The session with the latest start time.
    fn find_last_session(&self) -> Result<Option<Session>, RepositoryError> {
        Ok(self.find_all_sessions()?.pop())
    }

    fn find_all_by_project(&self, project: &str) -> Result<Vec<Session>, RepositoryError> {
        Ok(self
            .find_all_sessions()?
            .into_iter()
            .filter(|session| session.project == project)
            .collect())
    }

    /// Distinct project names in order of first appearance.
    fn find_all_projects(&self) -> Result<Vec<String>, RepositoryError> {
        let projects: OrderedSet<String> = self
            .find_all_sessions()?
            .into_iter()
            .map(|session| session.project)
            .collect();
        Ok(projects.into_vec())
    }

    /// Distinct tags used by `project`, in order of first appearance.
    fn find_all_project_tags(&self, project: &str) -> Result<Vec<String>, RepositoryError> {
        let tags: OrderedSet<String> = self
            .find_all_by_project(project)?
            .into_iter()
            .flat_map(|session| session.tags)
            .collect();
        Ok(tags.into_vec())
    }

    /// Sessions whose start time falls inside `range`.
    fn find_in_time_range(&self, range: &TimeRange) -> Result<Vec<Session>, RepositoryError> {
        Ok(self
            .find_all_sessions()?
            .into_iter()
            .filter(|session| range.contains(session.start_time))
            .collect())
    }
}

/// Sort sessions ascending by start time, ties broken by id.
///
/// Shared by implementations whose storage order carries no meaning.
pub fn sort_by_start_time(sessions: &mut [Session]) {
    sessions.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then_with(|| a.id.cmp(&b.id))
    });
}
