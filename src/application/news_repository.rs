// Repository trait for news items
use crate::domain::news::News;
use async_trait::async_trait;

#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Fetch every news item currently offered by the configured sources
    async fn get_news(&self) -> anyhow::Result<Vec<News>>;
}
