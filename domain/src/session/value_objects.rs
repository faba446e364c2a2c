//! Session value objects

use chrono::{DateTime, Utc};

/// A filter window over session start times (Value Object)
///
/// Both bounds are inclusive. An absent bound leaves that side open, so
/// `TimeRange::default()` matches every instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl TimeRange {
    /// A range with no bounds at all
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn since(since: DateTime<Utc>) -> Self {
        Self {
            since: Some(since),
            until: None,
        }
    }

    pub fn until(until: DateTime<Utc>) -> Self {
        Self {
            since: None,
            until: Some(until),
        }
    }

    pub fn between(since: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        Self {
            since: Some(since),
            until: Some(until),
        }
    }

    pub fn with_since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    pub fn with_until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.since.is_none() && self.until.is_none()
    }

    /// Whether `instant` falls inside `[since, until]`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        let after_since = self.since.is_none_or(|since| instant >= since);
        let before_until = self.until.is_none_or(|until| instant <= until);
        after_since && before_until
    }
}
