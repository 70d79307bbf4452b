// Reddit builder - Fills the authenticated user facet of the dashboard
use crate::application::content_builder::ContentBuilder;
use crate::application::exception_handler::ExceptionHandler;
use crate::application::reddit_logic::RedditLogic;
use crate::domain::dashboard::{DashboardSettings, SharedDashboard};
use async_trait::async_trait;

pub struct RedditBuilder {
    reddit_logic: RedditLogic,
    exception_handler: ExceptionHandler,
}

impl RedditBuilder {
    pub fn new(reddit_logic: RedditLogic, exception_handler: ExceptionHandler) -> Self {
        Self {
            reddit_logic,
            exception_handler,
        }
    }
}

#[async_trait]
impl ContentBuilder for RedditBuilder {
    fn name(&self) -> &'static str {
        "reddit"
    }

    fn should_build(&self, settings: &DashboardSettings) -> bool {
        settings.reddit_enabled && settings.reddit_access_token.is_some()
    }

    async fn build(&self, settings: &DashboardSettings, dashboard: &SharedDashboard) {
        let Some(token) = &settings.reddit_access_token else {
            return;
        };

        let lookup = match self.reddit_logic.get_authenticated_user(token).await {
            Ok(lookup) => lookup,
            Err(e) => return self.exception_handler.handle(e).await,
        };

        if let Some(refreshed) = lookup.refreshed_token {
            dashboard.update(|d| d.replace_refreshed_reddit_token(refreshed));
        }
        match lookup.user {
            Some(user) => dashboard.update(|d| d.replace_reddit_user(user)),
            None => tracing::debug!("Reddit returned no user for the access token"),
        }
    }
}
