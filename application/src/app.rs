//! Use case container
//!
//! Wires every use case from a single repository and the two providers, so
//! the binary (and integration tests) only choose the adapters.

use crate::ports::date_provider::DateProvider;
use crate::ports::id_provider::IdProvider;
use crate::use_cases::list_projects::ListProjectsUseCase;
use crate::use_cases::session_status::SessionStatusUseCase;
use crate::use_cases::start_session::StartSessionUseCase;
use crate::use_cases::stop_session::StopSessionUseCase;
use crate::use_cases::view_sessions_report::ViewSessionsReportUseCase;
use flow_domain::SessionRepository;
use std::sync::Arc;

/// All flow use cases, sharing the same injected adapters.
#[derive(Clone)]
pub struct App {
    pub start_session: StartSessionUseCase,
    pub stop_session: StopSessionUseCase,
    pub session_status: SessionStatusUseCase,
    pub list_projects: ListProjectsUseCase,
    pub view_sessions_report: ViewSessionsReportUseCase,
}

impl App {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        date_provider: Arc<dyn DateProvider>,
        id_provider: Arc<dyn IdProvider>,
    ) -> Self {
        Self {
            start_session: StartSessionUseCase::new(
                repository.clone(),
                date_provider.clone(),
                id_provider,
            ),
            stop_session: StopSessionUseCase::new(repository.clone(), date_provider.clone()),
            session_status: SessionStatusUseCase::new(repository.clone(), date_provider),
            list_projects: ListProjectsUseCase::new(repository.clone()),
            view_sessions_report: ViewSessionsReportUseCase::new(repository),
        }
    }
}
