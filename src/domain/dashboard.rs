// Dashboard domain model
use super::news::News;
use super::reddit::{AuthenticatedUser, RedditAccessToken};
use super::system_error::SystemError;
use std::sync::{Arc, Mutex, PoisonError};

pub const DEFAULT_NUMBER_OF_NEWS: i32 = 50;

/// Controls what a dashboard build fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    pub number_of_news: i32,
    pub reddit_enabled: bool,
    pub reddit_access_token: Option<RedditAccessToken>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            number_of_news: DEFAULT_NUMBER_OF_NEWS,
            reddit_enabled: false,
            reddit_access_token: None,
        }
    }
}

/// Result of a single dashboard build.
///
/// Every `replace_*` swaps the whole facet; nothing is merged.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    news: Vec<News>,
    system_errors: Vec<SystemError>,
    reddit_user: Option<AuthenticatedUser>,
    refreshed_reddit_token: Option<RedditAccessToken>,
    settings: DashboardSettings,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn news(&self) -> &[News] {
        &self.news
    }

    pub fn system_errors(&self) -> &[SystemError] {
        &self.system_errors
    }

    pub fn reddit_user(&self) -> Option<&AuthenticatedUser> {
        self.reddit_user.as_ref()
    }

    /// Replacement for the visitor's Reddit token, set when the stored one had expired
    pub fn refreshed_reddit_token(&self) -> Option<&RedditAccessToken> {
        self.refreshed_reddit_token.as_ref()
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn replace_news(&mut self, news: Vec<News>) {
        self.news = news;
    }

    pub fn replace_system_errors(&mut self, system_errors: Vec<SystemError>) {
        self.system_errors = system_errors;
    }

    pub fn replace_reddit_user(&mut self, reddit_user: AuthenticatedUser) {
        self.reddit_user = Some(reddit_user);
    }

    pub fn replace_refreshed_reddit_token(&mut self, token: RedditAccessToken) {
        self.refreshed_reddit_token = Some(token);
    }

    pub fn replace_settings(&mut self, settings: DashboardSettings) {
        self.settings = settings;
    }
}

/// Dashboard handle shared between concurrently running content builders.
///
/// The lock is only held for the duration of a single replace, never across
/// an await point.
#[derive(Debug, Clone, Default)]
pub struct SharedDashboard {
    inner: Arc<Mutex<Dashboard>>,
}

impl SharedDashboard {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            inner: Arc::new(Mutex::new(dashboard)),
        }
    }

    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Dashboard),
    {
        let mut dashboard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut dashboard);
    }

    pub fn snapshot(&self) -> Dashboard {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Take the dashboard back once every builder is done with it
    pub fn into_inner(self) -> Dashboard {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex.into_inner().unwrap_or_else(PoisonError::into_inner),
            Err(shared) => shared.lock().unwrap_or_else(PoisonError::into_inner).clone(),
        }
    }
}
