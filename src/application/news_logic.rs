// News logic - Bounded access to the news repository
use crate::application::news_repository::NewsRepository;
use crate::domain::news::News;
use std::sync::Arc;

#[derive(Clone)]
pub struct NewsLogic {
    repository: Arc<dyn NewsRepository>,
}

impl NewsLogic {
    pub fn new(repository: Arc<dyn NewsRepository>) -> Self {
        Self { repository }
    }

    /// At most `count` items, in the order the repository delivers them
    pub async fn get_news(&self, count: usize) -> anyhow::Result<Vec<News>> {
        let mut news = self.repository.get_news().await?;
        news.truncate(count);
        Ok(news)
    }
}
