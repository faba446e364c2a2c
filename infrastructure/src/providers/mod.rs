//! Implementations of the application's provider ports.
//!
//! Real providers read the system clock and a random source; the fixed and
//! sequential ones keep tests deterministic.

mod date;
mod id;

pub use date::{FixedDateProvider, SystemDateProvider};
pub use id::{SequentialIdProvider, UuidIdProvider};
