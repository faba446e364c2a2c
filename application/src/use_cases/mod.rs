//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod list_projects;
pub(crate) mod shared;
pub mod session_status;
pub mod start_session;
pub mod stop_session;
pub mod view_sessions_report;
