// In-memory fakes shared by the application tests
use crate::application::content_builder::ContentBuilder;
use crate::application::exception_repository::ExceptionRepository;
use crate::application::news_repository::NewsRepository;
use crate::application::random_source::RandomSource;
use crate::application::reddit_repository::RedditRepository;
use crate::domain::dashboard::{DashboardSettings, SharedDashboard};
use crate::domain::news::News;
use crate::domain::reddit::{AuthenticatedUser, RedditAccessToken};
use crate::domain::system_error::SystemError;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn news_items(count: usize) -> Vec<News> {
    let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            News::new(
                format!("news-{}", i),
                base - Duration::minutes(i as i64),
                format!("Headline {}", i),
                format!("Details {}", i),
                "Test Feed".to_string(),
                Some(format!("https://example.com/{}", i)),
            )
        })
        .collect()
}

pub fn reddit_token(expires_at: DateTime<Utc>) -> RedditAccessToken {
    RedditAccessToken::new(
        "access".to_string(),
        Some("refresh".to_string()),
        "identity".to_string(),
        expires_at,
    )
}

/// Counts upwards, so identifiers are predictable
#[derive(Default)]
pub struct SequenceRandomSource {
    next: AtomicU64,
}

impl RandomSource for SequenceRandomSource {
    fn next_in_range(&self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (max as i64 - min as i64) as u64;
        (min as i64 + (self.unique_seed() % span) as i64) as i32
    }

    fn unique_seed(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct RecordingExceptionRepository {
    messages: Mutex<Vec<String>>,
}

impl RecordingExceptionRepository {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExceptionRepository for RecordingExceptionRepository {
    async fn add(&self, error: &anyhow::Error) -> anyhow::Result<()> {
        self.messages.lock().unwrap().push(error.to_string());
        Ok(())
    }

    async fn get_system_errors(&self) -> anyhow::Result<Vec<SystemError>> {
        let messages = std::mem::take(&mut *self.messages.lock().unwrap());
        Ok(messages
            .into_iter()
            .enumerate()
            .map(|(i, m)| SystemError::new(i.to_string(), Utc::now(), m, String::new()))
            .collect())
    }
}

pub struct FailingExceptionRepository;

#[async_trait]
impl ExceptionRepository for FailingExceptionRepository {
    async fn add(&self, _error: &anyhow::Error) -> anyhow::Result<()> {
        anyhow::bail!("exception store unavailable")
    }

    async fn get_system_errors(&self) -> anyhow::Result<Vec<SystemError>> {
        anyhow::bail!("exception store unavailable")
    }
}

pub struct FakeNewsRepository {
    result: Result<Vec<News>, String>,
    calls: Arc<AtomicUsize>,
}

impl FakeNewsRepository {
    pub fn with_items(items: Vec<News>) -> Self {
        Self {
            result: Ok(items),
            calls: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl NewsRepository for FakeNewsRepository {
    async fn get_news(&self) -> anyhow::Result<Vec<News>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(|m| anyhow::anyhow!(m))
    }
}

pub struct FakeRedditRepository {
    user: Result<Option<String>, String>,
    looked_up: Mutex<Vec<String>>,
}

impl FakeRedditRepository {
    pub fn with_user(name: &str) -> Self {
        Self {
            user: Ok(Some(name.to_string())),
            looked_up: Mutex::default(),
        }
    }

    pub fn without_user() -> Self {
        Self {
            user: Ok(None),
            looked_up: Mutex::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            user: Err(message.to_string()),
            looked_up: Mutex::default(),
        }
    }

    /// Access tokens passed to `get_authenticated_user`, in call order
    pub fn looked_up_tokens(&self) -> Vec<String> {
        self.looked_up.lock().unwrap().clone()
    }
}

#[async_trait]
impl RedditRepository for FakeRedditRepository {
    fn authorization_url(&self, state: &str) -> String {
        format!("https://reddit.test/authorize?state={}", state)
    }

    async fn exchange_code(&self, code: &str) -> anyhow::Result<RedditAccessToken> {
        Ok(RedditAccessToken::new(
            format!("token-for-{}", code),
            None,
            "identity".to_string(),
            Utc::now() + Duration::hours(1),
        ))
    }

    async fn refresh_token(&self, _refresh_token: &str) -> anyhow::Result<RedditAccessToken> {
        Ok(RedditAccessToken::new(
            "refreshed".to_string(),
            None,
            "identity".to_string(),
            Utc::now() + Duration::hours(1),
        ))
    }

    async fn get_authenticated_user(
        &self,
        access_token: &str,
    ) -> anyhow::Result<Option<AuthenticatedUser>> {
        self.looked_up.lock().unwrap().push(access_token.to_string());
        let name = self.user.clone().map_err(|m| anyhow::anyhow!(m))?;
        Ok(name.map(|name| AuthenticatedUser {
            name,
            link_karma: 10,
            comment_karma: 20,
            created: Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap(),
            has_mail: false,
            inbox_count: 0,
        }))
    }
}

/// Always eligible, always panics
pub struct PanickingBuilder;

#[async_trait]
impl ContentBuilder for PanickingBuilder {
    fn name(&self) -> &'static str {
        "panicking"
    }

    fn should_build(&self, _settings: &DashboardSettings) -> bool {
        true
    }

    async fn build(&self, _settings: &DashboardSettings, _dashboard: &SharedDashboard) {
        panic!("builder exploded");
    }
}
