//! Application layer for flow
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod app;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use app::App;
pub use ports::{date_provider::DateProvider, id_provider::IdProvider};
pub use use_cases::list_projects::{ListProjectsUseCase, ProjectSummary};
pub use use_cases::session_status::{SessionStatusOutput, SessionStatusUseCase};
pub use use_cases::start_session::{StartSessionError, StartSessionInput, StartSessionUseCase};
pub use use_cases::stop_session::{StopSessionError, StopSessionUseCase};
pub use use_cases::view_sessions_report::{
    ProjectReport, SessionsReport, TagReport, ViewSessionsReportInput, ViewSessionsReportUseCase,
};
