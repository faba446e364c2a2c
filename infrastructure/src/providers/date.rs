//! Date providers

use chrono::{DateTime, TimeDelta, Utc};
use flow_application::DateProvider;
use std::sync::Mutex;

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateProvider;

impl DateProvider for SystemDateProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the instant it was last set to.
#[derive(Debug)]
pub struct FixedDateProvider {
    now: Mutex<DateTime<Utc>>,
}

impl FixedDateProvider {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += delta;
    }
}

impl DateProvider for FixedDateProvider {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}
