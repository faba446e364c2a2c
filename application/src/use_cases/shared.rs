//! Shared helpers for use cases.

use chrono::TimeDelta;
use flow_domain::Session;

/// Sum of the recorded durations; flowing sessions contribute nothing.
pub(crate) fn total_duration<'a>(sessions: impl IntoIterator<Item = &'a Session>) -> TimeDelta {
    sessions
        .into_iter()
        .fold(TimeDelta::zero(), |total, session| total + session.duration())
}
