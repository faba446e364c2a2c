//! Session id providers

use flow_application::IdProvider;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Random v4 UUIDs, hyphenated.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdProvider;

impl IdProvider for UuidIdProvider {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `"1"`, `"2"`, `"3"`, ... in call order.
#[derive(Debug, Default)]
pub struct SequentialIdProvider {
    counter: AtomicU64,
}

impl SequentialIdProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdProvider for SequentialIdProvider {
    fn next_id(&self) -> String {
        (self.counter.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }
}
