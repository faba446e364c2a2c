//! Port for reading the current time.
//!
//! Use cases never call the system clock themselves; the binary injects a
//! real clock and tests inject a fixed one.

use chrono::{DateTime, Utc};

/// Source of "now" for use cases that stamp sessions.
pub trait DateProvider: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
