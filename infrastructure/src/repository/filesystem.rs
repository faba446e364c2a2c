//! File system session repository
//!
//! Stores every session as its own JSON document inside a dedicated
//! directory:
//!
//! ```text
//! ~/.flow/
//! ├── 0b8e1c3e-....json
//! └── 5f1a9d02-....json
//! ```
//!
//! Directory listing order is filesystem-defined, so every enumeration
//! sorts the loaded sessions by start time before returning them.

use super::record::SessionRecord;
use flow_domain::{RepositoryError, Session, SessionRepository, sort_by_start_time};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the storage folder created under the base directory.
pub const FLOW_FOLDER_NAME: &str = ".flow";

const SESSION_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "json.tmp";

/// Session repository backed by one JSON file per session.
///
/// A malformed session file aborts the enumeration with
/// [`RepositoryError::Malformed`] rather than being skipped, so corrupt data
/// never silently disappears from reports.
#[derive(Debug, Clone)]
pub struct FileSystemSessionRepository {
    dir: PathBuf,
}

impl FileSystemSessionRepository {
    /// Open the repository in `<base_dir>/.flow`, creating it if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        Self::new_in(base_dir.as_ref().join(FLOW_FOLDER_NAME))
    }

    /// Open the repository directly in `dir`, creating it (and its parents)
    /// if needed. Safe to call repeatedly.
    pub fn new_in(dir: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| RepositoryError::Initialization {
            path: dir.clone(),
            source,
        })?;
        debug!("Session storage ready at {}", dir.display());
        Ok(Self { dir })
    }

    /// Open the repository in `~/.flow`.
    pub fn default_location() -> Result<Self, RepositoryError> {
        let home = dirs::home_dir().ok_or_else(|| RepositoryError::Initialization {
            path: PathBuf::from("~").join(FLOW_FOLDER_NAME),
            source: io::Error::new(io::ErrorKind::NotFound, "home directory not found"),
        })?;
        Self::new(home)
    }

    /// Directory holding the session files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn session_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", id, SESSION_EXTENSION))
    }

    fn load_session(&self, path: &Path) -> Result<Session, RepositoryError> {
        let content = fs::read_to_string(path).map_err(|source| RepositoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let record: SessionRecord =
            serde_json::from_str(&content).map_err(|e| RepositoryError::Malformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let file_id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        // The file name is the key `save` writes to, so it must agree
        if let Some(id) = record.id.as_deref()
            && id != file_id
        {
            return Err(RepositoryError::Malformed {
                path: path.to_path_buf(),
                reason: format!("session id '{}' does not match the file name", id),
            });
        }
        Ok(record.into_session(&file_id))
    }

    fn session_files(&self) -> Result<Vec<PathBuf>, RepositoryError> {
        let read_error = |source| RepositoryError::Read {
            path: self.dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            let is_session = path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(SESSION_EXTENSION);
            if is_session {
                files.push(path);
            } else {
                debug!("Ignoring non-session entry {}", path.display());
            }
        }
        Ok(files)
    }
}

/// Ids become file names, so anything that could escape the directory is
/// refused.
fn validate_id(id: &str) -> io::Result<()> {
    let invalid = id.is_empty()
        || id == "."
        || id == ".."
        || id.contains(['/', '\\']);
    if invalid {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' is not a valid session id", id),
        ));
    }
    Ok(())
}

impl SessionRepository for FileSystemSessionRepository {
    fn save(&self, session: &Session) -> Result<(), RepositoryError> {
        let write_error = |source| RepositoryError::Write {
            id: session.id.clone(),
            source,
        };
        validate_id(&session.id).map_err(write_error)?;

        let content = serde_json::to_string_pretty(&SessionRecord::from(session))
            .map_err(|e| write_error(io::Error::other(e)))?;

        // Write then rename so readers never observe a truncated file
        let path = self.session_path(&session.id);
        let temp_path = path.with_extension(TEMP_EXTENSION);
        fs::write(&temp_path, content).map_err(write_error)?;
        if let Err(e) = fs::rename(&temp_path, &path) {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                warn!(
                    "Could not remove temporary file {}: {}",
                    temp_path.display(),
                    cleanup
                );
            }
            return Err(write_error(e));
        }

        debug!("Saved session {} to {}", session.id, path.display());
        Ok(())
    }

    fn find_all_sessions(&self) -> Result<Vec<Session>, RepositoryError> {
        let mut sessions = self
            .session_files()?
            .iter()
            .map(|path| self.load_session(path))
            .collect::<Result<Vec<_>, _>>()?;
        sort_by_start_time(&mut sessions);
        Ok(sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use flow_domain::TimeRange;

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, day, hour, minute, 0).unwrap()
    }

    fn tags(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn ids(sessions: &[Session]) -> Vec<&str> {
        sessions.iter().map(|s| s.id.as_str()).collect()
    }

    /// Field-by-field comparison; `Session` equality only looks at ids.
    fn assert_same_session(actual: &Session, expected: &Session) {
        assert_eq!(actual.id, expected.id);
        assert_eq!(actual.start_time, expected.start_time);
        assert_eq!(actual.end_time, expected.end_time);
        assert_eq!(actual.project, expected.project);
        assert_eq!(actual.tags, expected.tags);
    }

    fn seeded(base: &Path) -> FileSystemSessionRepository {
        let repo = FileSystemSessionRepository::new(base).unwrap();
        // Saved out of order on purpose
        let sessions = [
            Session::start("3", at(18, 21, 0), "MyTodo", tags(&["delete-todo"])),
            Session::start("1", at(17, 19, 0), "Flow", tags(&["tests", "integration"]))
                .ended_at(at(17, 20, 0)),
            Session::start("2", at(17, 21, 0), "MyTodo", tags(&["add-todo", "update-todo"]))
                .ended_at(at(17, 23, 0)),
        ];
        for session in &sessions {
            repo.save(session).unwrap();
        }
        repo
    }

    #[test]
    fn test_new_creates_folder() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSystemSessionRepository::new(dir.path()).unwrap();

        let expected = dir.path().join(FLOW_FOLDER_NAME);
        assert!(expected.is_dir());
        assert_eq!(repo.dir(), expected.as_path());
    }

    #[test]
    fn test_new_is_idempotent_and_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        FileSystemSessionRepository::new(&nested).unwrap();
        FileSystemSessionRepository::new(&nested).unwrap();
        assert!(nested.join(FLOW_FOLDER_NAME).is_dir());
    }

    #[test]
    fn test_new_fails_when_path_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = FileSystemSessionRepository::new_in(&blocker);
        assert!(matches!(
            result,
            Err(RepositoryError::Initialization { .. })
        ));
    }

    #[test]
    fn test_save_writes_id_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSystemSessionRepository::new(dir.path()).unwrap();

        repo.save(&Session::start("1", Utc::now(), "Flow", vec![]))
            .unwrap();

        assert!(repo.dir().join("1.json").is_file());
        assert!(!repo.dir().join("1.json.tmp").exists());
    }

    #[test]
    fn test_save_twice_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSystemSessionRepository::new(dir.path()).unwrap();

        let mut session = Session::start("1", at(17, 19, 0), "Flow", vec![]);
        repo.save(&session).unwrap();
        session.stop(at(17, 20, 0));
        repo.save(&session).unwrap();

        let sessions = repo.find_all_sessions().unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].end_time, Some(at(17, 20, 0)));
    }

    #[test]
    fn test_save_rejects_path_like_ids() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSystemSessionRepository::new(dir.path()).unwrap();

        for id in ["", "..", "../escape", "a/b"] {
            let result = repo.save(&Session::start(id, at(17, 19, 0), "Flow", vec![]));
            assert!(
                matches!(result, Err(RepositoryError::Write { .. })),
                "id {:?} should be refused",
                id
            );
        }
        assert!(repo.find_all_sessions().unwrap().is_empty());
    }

    #[test]
    fn test_find_all_sessions_round_trip_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let repo = seeded(dir.path());

        let sessions = repo.find_all_sessions().unwrap();
        assert_eq!(ids(&sessions), vec!["1", "2", "3"]);

        assert_same_session(
            &sessions[0],
            &Session::start("1", at(17, 19, 0), "Flow", tags(&["tests", "integration"]))
                .ended_at(at(17, 20, 0)),
        );
        assert_same_session(
            &sessions[2],
            &Session::start("3", at(18, 21, 0), "MyTodo", tags(&["delete-todo"])),
        );
    }

    #[test]
    fn test_round_trip_keeps_empty_tags_and_flowing_state() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSystemSessionRepository::new(dir.path()).unwrap();
        let session = Session::start("solo", at(17, 19, 0), "Flow", vec![]);
        repo.save(&session).unwrap();

        // Reopen to read from disk through a fresh handle
        let reopened = FileSystemSessionRepository::new(dir.path()).unwrap();
        let loaded = reopened.find_all_sessions().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_same_session(&loaded[0], &session);
        assert!(loaded[0].is_flowing());
    }

    #[test]
    fn test_find_all_sessions_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSystemSessionRepository::new(dir.path()).unwrap();
        assert!(repo.find_all_sessions().unwrap().is_empty());
    }

    #[test]
    fn test_find_all_sessions_ignores_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let repo = seeded(dir.path());
        fs::write(repo.dir().join("notes.txt"), "hello").unwrap();
        fs::write(repo.dir().join("4.json.tmp"), "{").unwrap();
        fs::create_dir(repo.dir().join("archive.json")).unwrap();

        assert_eq!(repo.find_all_sessions().unwrap().len(), 3);
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let repo = seeded(dir.path());
        fs::write(repo.dir().join("broken.json"), "{ not json").unwrap();

        match repo.find_all_sessions() {
            Err(RepositoryError::Malformed { path, .. }) => {
                assert_eq!(path, repo.dir().join("broken.json"));
            }
            other => panic!("expected Malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_id_disagreeing_with_file_name_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSystemSessionRepository::new(dir.path()).unwrap();
        let record = SessionRecord::from(&Session::start("1", at(17, 19, 0), "Flow", vec![]));
        fs::write(
            repo.dir().join("copy.json"),
            serde_json::to_string(&record).unwrap(),
        )
        .unwrap();

        match repo.find_all_sessions() {
            Err(RepositoryError::Malformed { path, reason }) => {
                assert_eq!(path, repo.dir().join("copy.json"));
                assert!(reason.contains("'1'"));
            }
            other => panic!("expected Malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_file_without_id_uses_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSystemSessionRepository::new(dir.path()).unwrap();
        fs::write(
            repo.dir().join("legacy.json"),
            r#"{"start_time": "2024-04-17T19:00:00Z", "end_time": null, "project": "Flow", "tags": []}"#,
        )
        .unwrap();

        let sessions = repo.find_all_sessions().unwrap();
        assert_eq!(ids(&sessions), vec!["legacy"]);
    }

    #[test]
    fn test_find_last_session() {
        let dir = tempfile::tempdir().unwrap();
        let repo = seeded(dir.path());

        let last = repo.find_last_session().unwrap().unwrap();
        assert_same_session(
            &last,
            &Session::start("3", at(18, 21, 0), "MyTodo", tags(&["delete-todo"])),
        );
    }

    #[test]
    fn test_find_last_session_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSystemSessionRepository::new(dir.path()).unwrap();
        assert!(repo.find_last_session().unwrap().is_none());
    }

    #[test]
    fn test_find_all_by_project() {
        let dir = tempfile::tempdir().unwrap();
        let repo = seeded(dir.path());

        assert_eq!(ids(&repo.find_all_by_project("MyTodo").unwrap()), vec!["2", "3"]);
        assert_eq!(ids(&repo.find_all_by_project("Flow").unwrap()), vec!["1"]);
        assert!(repo.find_all_by_project("flow").unwrap().is_empty());
    }

    #[test]
    fn test_find_all_projects() {
        let dir = tempfile::tempdir().unwrap();
        let repo = seeded(dir.path());
        assert_eq!(repo.find_all_projects().unwrap(), vec!["Flow", "MyTodo"]);
    }

    #[test]
    fn test_find_all_project_tags() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSystemSessionRepository::new(dir.path()).unwrap();
        let sessions = [
            Session::start("1", at(17, 19, 0), "Flow", tags(&["tests", "integration"]))
                .ended_at(at(17, 20, 0)),
            Session::start("2", at(17, 21, 0), "MyTodo", tags(&["add-todo", "update-todo"]))
                .ended_at(at(17, 22, 0)),
            Session::start("3", at(17, 23, 0), "MyTodo", tags(&["update-todo", "delete-todo"])),
        ];
        for session in &sessions {
            repo.save(session).unwrap();
        }

        assert_eq!(
            repo.find_all_project_tags("Flow").unwrap(),
            vec!["tests", "integration"]
        );
        assert_eq!(
            repo.find_all_project_tags("MyTodo").unwrap(),
            vec!["add-todo", "update-todo", "delete-todo"]
        );
    }

    #[test]
    fn test_find_in_time_range() {
        let dir = tempfile::tempdir().unwrap();
        let repo = seeded(dir.path());

        let cases = [
            ("all", TimeRange::unbounded(), vec!["1", "2", "3"]),
            ("since", TimeRange::since(at(17, 20, 0)), vec!["2", "3"]),
            ("until", TimeRange::until(at(17, 20, 1)), vec!["1"]),
            (
                "since and until",
                TimeRange::between(at(17, 17, 0), at(17, 22, 0)),
                vec!["1", "2"],
            ),
            (
                "inclusive bounds",
                TimeRange::between(at(17, 21, 0), at(18, 21, 0)),
                vec!["2", "3"],
            ),
        ];

        for (name, range, expected) in cases {
            let sessions = repo.find_in_time_range(&range).unwrap();
            assert_eq!(ids(&sessions), expected, "case {}", name);
        }
    }
}
