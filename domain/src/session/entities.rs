//! Session domain entities

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use std::fmt;

/// Display format shared by all session timestamps.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder shown instead of an end time while a session is flowing.
pub const NO_END_TIME: &str = "/";

/// Lifecycle state of a [`Session`], derived from its end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// Still running: no end time recorded yet
    Flowing,
    /// Completed: an end time has been recorded
    Ended,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Flowing => "FLOWING",
            SessionStatus::Ended => "ENDED",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked interval of work on a project (Entity)
///
/// Two sessions are equal when they share the same `id`, whatever the
/// rest of their fields hold.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub start_time: DateTime<Utc>,
    /// `None` while the session is still flowing
    pub end_time: Option<DateTime<Utc>>,
    pub project: String,
    /// Insertion order is preserved; duplicates are kept as given
    pub tags: Vec<String>,
}

impl Session {
    /// Create a flowing session started at `start_time`.
    pub fn start(
        id: impl Into<String>,
        start_time: DateTime<Utc>,
        project: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            start_time,
            end_time: None,
            project: project.into(),
            tags,
        }
    }

    /// Builder-style end time, mostly useful to describe ended sessions.
    pub fn ended_at(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Record the end of the session.
    ///
    /// The caller is responsible for `end_time >= start_time`.
    pub fn stop(&mut self, end_time: DateTime<Utc>) {
        self.end_time = Some(end_time);
    }

    pub fn status(&self) -> SessionStatus {
        match self.end_time {
            Some(_) => SessionStatus::Ended,
            None => SessionStatus::Flowing,
        }
    }

    pub fn is_flowing(&self) -> bool {
        self.end_time.is_none()
    }

    /// Elapsed time between start and end, rounded to the nearest second.
    ///
    /// Zero while the session is flowing.
    pub fn duration(&self) -> TimeDelta {
        match self.end_time {
            Some(end) => round_to_second(end - self.start_time),
            None => TimeDelta::zero(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Start time rendered in the local timezone.
    pub fn formatted_start_time(&self) -> String {
        self.formatted_start_time_in(&Local)
    }

    /// End time rendered in the local timezone, or [`NO_END_TIME`].
    pub fn formatted_end_time(&self) -> String {
        self.formatted_end_time_in(&Local)
    }

    pub fn formatted_start_time_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.start_time
            .with_timezone(tz)
            .format(DATE_TIME_FORMAT)
            .to_string()
    }

    pub fn formatted_end_time_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self.end_time {
            Some(end) => end.with_timezone(tz).format(DATE_TIME_FORMAT).to_string(),
            None => NO_END_TIME.to_string(),
        }
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Session {}

/// Round half away from zero, matching how durations are reported.
pub fn round_to_second(delta: TimeDelta) -> TimeDelta {
    let seconds = delta.num_seconds();
    let nanos = delta.subsec_nanos();
    let carry = if nanos >= 500_000_000 {
        1
    } else if nanos <= -500_000_000 {
        -1
    } else {
        0
    };
    TimeDelta::seconds(seconds + carry)
}
