// Exception handler - Best-effort capture of failures for display on the dashboard
use crate::application::exception_repository::ExceptionRepository;
use crate::domain::error::AggregateError;
use std::sync::Arc;

/// Forwards failures to the exception repository.
///
/// Never fails: problems while recording an error are logged and dropped so
/// that callers can hand over errors from any code path.
#[derive(Clone)]
pub struct ExceptionHandler {
    repository: Arc<dyn ExceptionRepository>,
}

impl ExceptionHandler {
    pub fn new(repository: Arc<dyn ExceptionRepository>) -> Self {
        Self { repository }
    }

    /// Record a single error. Aggregates are unwrapped into their inner errors.
    pub async fn handle(&self, error: anyhow::Error) {
        match error.downcast::<AggregateError>() {
            Ok(aggregate) => self.handle_aggregate(aggregate).await,
            Err(error) => self.store(error).await,
        }
    }

    /// Record every inner error of an aggregate individually, flattening nested aggregates.
    pub async fn handle_aggregate(&self, aggregate: AggregateError) {
        // Stack in reverse so inner errors are stored in their original order
        let mut pending = aggregate.into_inner();
        pending.reverse();

        while let Some(error) = pending.pop() {
            match error.downcast::<AggregateError>() {
                Ok(nested) => {
                    let mut inner = nested.into_inner();
                    inner.reverse();
                    pending.extend(inner);
                }
                Err(error) => self.store(error).await,
            }
        }
    }

    async fn store(&self, error: anyhow::Error) {
        tracing::error!("Captured error: {:#}", error);

        if let Err(e) = self.repository.add(&error).await {
            tracing::warn!("Failed to record captured error '{}': {:#}", error, e);
        }
    }
}
