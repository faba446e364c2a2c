//! Domain layer for flow
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Flow Session
//!
//! A tracked interval of work, tagged with a project and optional labels:
//!
//! - **Flowing**: still in progress, no end time recorded
//! - **Ended**: completed, end time recorded
//!
//! ## Repository
//!
//! [`SessionRepository`] is the sole owner of the session collection. Use
//! cases only reach sessions through it.

pub mod core;
pub mod session;

// Re-export commonly used types
pub use core::ordered_set::OrderedSet;
pub use session::{
    entities::{DATE_TIME_FORMAT, NO_END_TIME, Session, SessionStatus, round_to_second},
    repository::{RepositoryError, SessionRepository, sort_by_start_time},
    value_objects::TimeRange,
};
