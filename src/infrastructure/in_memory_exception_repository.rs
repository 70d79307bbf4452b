// In-memory exception repository - Captured errors live until the next drain
use crate::application::exception_repository::ExceptionRepository;
use crate::application::random_source::RandomSource;
use crate::domain::system_error::SystemError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct CapturedError {
    captured_at: DateTime<Utc>,
    message: String,
    details: String,
}

pub struct InMemoryExceptionRepository {
    errors: Mutex<Vec<CapturedError>>,
    random: Arc<dyn RandomSource>,
}

impl InMemoryExceptionRepository {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self {
            errors: Mutex::new(Vec::new()),
            random,
        }
    }
}

#[async_trait]
impl ExceptionRepository for InMemoryExceptionRepository {
    async fn add(&self, error: &anyhow::Error) -> anyhow::Result<()> {
        let captured = CapturedError {
            captured_at: Utc::now(),
            message: error.to_string(),
            details: format!("{:#}", error),
        };

        self.errors
            .lock()
            .map_err(|_| anyhow::anyhow!("Exception store lock poisoned"))?
            .push(captured);
        Ok(())
    }

    async fn get_system_errors(&self) -> anyhow::Result<Vec<SystemError>> {
        let drained = std::mem::take(
            &mut *self
                .errors
                .lock()
                .map_err(|_| anyhow::anyhow!("Exception store lock poisoned"))?,
        );

        Ok(drained
            .into_iter()
            .map(|e| SystemError::new(self.random.unique_token(), e.captured_at, e.message, e.details))
            .collect())
    }
}
