// System error logic - Draining captured errors for display
use crate::application::exception_repository::ExceptionRepository;
use crate::domain::system_error::{SystemError, sort_newest_first};
use std::sync::Arc;

#[derive(Clone)]
pub struct SystemErrorLogic {
    repository: Arc<dyn ExceptionRepository>,
}

impl SystemErrorLogic {
    pub fn new(repository: Arc<dyn ExceptionRepository>) -> Self {
        Self { repository }
    }

    /// Drain captured errors, newest first
    pub async fn get_system_errors(&self) -> anyhow::Result<Vec<SystemError>> {
        let mut errors = self.repository.get_system_errors().await?;
        sort_newest_first(&mut errors);
        Ok(errors)
    }
}
