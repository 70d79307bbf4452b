// News builder - Fills the news facet of the dashboard
use crate::application::content_builder::ContentBuilder;
use crate::application::exception_handler::ExceptionHandler;
use crate::application::news_logic::NewsLogic;
use crate::domain::dashboard::{DashboardSettings, SharedDashboard};
use async_trait::async_trait;

pub struct NewsBuilder {
    news_logic: NewsLogic,
    exception_handler: ExceptionHandler,
}

impl NewsBuilder {
    pub fn new(news_logic: NewsLogic, exception_handler: ExceptionHandler) -> Self {
        Self {
            news_logic,
            exception_handler,
        }
    }
}

#[async_trait]
impl ContentBuilder for NewsBuilder {
    fn name(&self) -> &'static str {
        "news"
    }

    fn should_build(&self, settings: &DashboardSettings) -> bool {
        settings.number_of_news > 0
    }

    async fn build(&self, settings: &DashboardSettings, dashboard: &SharedDashboard) {
        let count = usize::try_from(settings.number_of_news).unwrap_or(0);

        match self.news_logic.get_news(count).await {
            Ok(news) => {
                tracing::debug!("Fetched {} news items (requested {})", news.len(), count);
                dashboard.update(|d| d.replace_news(news));
            }
            Err(e) => self.exception_handler.handle(e).await,
        }
    }
}
