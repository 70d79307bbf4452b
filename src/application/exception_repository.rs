// Repository trait for captured errors
use crate::domain::system_error::SystemError;
use async_trait::async_trait;

#[async_trait]
pub trait ExceptionRepository: Send + Sync {
    /// Record an error for later display
    async fn add(&self, error: &anyhow::Error) -> anyhow::Result<()>;

    /// Return every recorded error as a system error and clear the store.
    ///
    /// This is a drain: a second call without an intervening `add` returns
    /// an empty collection.
    async fn get_system_errors(&self) -> anyhow::Result<Vec<SystemError>>;
}
