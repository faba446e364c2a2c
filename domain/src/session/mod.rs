//! Flow session domain.
//!
//! - [`entities::Session`]: a tracked interval of work on a project
//! - [`value_objects::TimeRange`]: an optional-bound filter window
//! - [`repository::SessionRepository`]: trait for session persistence

pub mod entities;
pub mod repository;
pub mod value_objects;
