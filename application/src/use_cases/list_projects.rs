//! List projects use case

use flow_domain::{RepositoryError, SessionRepository};
use std::sync::Arc;

/// A project together with every tag used on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub name: String,
    /// Distinct tags in order of first use
    pub tags: Vec<String>,
}

/// Use case for listing known projects and their tags.
#[derive(Clone)]
pub struct ListProjectsUseCase {
    repository: Arc<dyn SessionRepository>,
}

impl ListProjectsUseCase {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Projects in order of first appearance.
    pub fn execute(&self) -> Result<Vec<ProjectSummary>, RepositoryError> {
        self.repository
            .find_all_projects()?
            .into_iter()
            .map(|name| {
                let tags = self.repository.find_all_project_tags(&name)?;
                Ok(ProjectSummary { name, tags })
            })
            .collect()
    }
}
