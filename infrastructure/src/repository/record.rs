//! On-disk representation of a session
//!
//! Kept separate from the domain entity so the file format can evolve
//! without touching [`Session`].

use chrono::{DateTime, Utc};
use flow_domain::Session;
use serde::{Deserialize, Serialize};

/// JSON document stored in `<id>.json`.
///
/// `end_time` is written as `null` while the session is flowing. Files
/// without an `id` key take their id from the file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub project: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SessionRecord {
    pub fn into_session(self, fallback_id: &str) -> Session {
        Session {
            id: self.id.unwrap_or_else(|| fallback_id.to_string()),
            start_time: self.start_time,
            end_time: self.end_time,
            project: self.project,
            tags: self.tags,
        }
    }
}

impl From<&Session> for SessionRecord {
    fn from(session: &Session) -> Self {
        Self {
            id: Some(session.id.clone()),
            start_time: session.start_time,
            end_time: session.end_time,
            project: session.project.clone(),
            tags: session.tags.clone(),
        }
    }
}
