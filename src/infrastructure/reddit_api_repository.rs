// Reddit API repository implementation (OAuth2 code flow + identity)
use crate::application::reddit_repository::RedditRepository;
use crate::domain::reddit::{AuthenticatedUser, RedditAccessToken};
use crate::infrastructure::config::RedditSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::StatusCode;
use serde::Deserialize;

const WWW_BASE_URL: &str = "https://www.reddit.com";
const OAUTH_BASE_URL: &str = "https://oauth.reddit.com";

#[derive(Debug, Clone)]
pub struct RedditApiRepository {
    client: reqwest::Client,
    settings: RedditSettings,
    www_base_url: String,
    oauth_base_url: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MeResponse {
    name: String,
    #[serde(default)]
    link_karma: i64,
    #[serde(default)]
    comment_karma: i64,
    #[serde(default)]
    created_utc: f64,
    #[serde(default)]
    has_mail: Option<bool>,
    #[serde(default)]
    inbox_count: Option<i64>,
}

impl RedditApiRepository {
    pub fn new(settings: RedditSettings) -> Result<Self> {
        Self::with_base_urls(settings, WWW_BASE_URL, OAUTH_BASE_URL)
    }

    pub fn with_base_urls(settings: RedditSettings, www_base_url: &str, oauth_base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .build()
            .context("Failed to build HTTP client for Reddit")?;

        Ok(Self {
            client,
            settings,
            www_base_url: www_base_url.trim_end_matches('/').to_string(),
            oauth_base_url: oauth_base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn request_token(&self, form: &[(&str, &str)], previous_refresh: Option<&str>) -> Result<RedditAccessToken> {
        let url = format!("{}/api/v1/access_token", self.www_base_url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.settings.client_id, Some(&self.settings.client_secret))
            .form(form)
            .send()
            .await
            .context("Failed to send token request to Reddit")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Reddit token request failed with status {}: {}", status, body);
        }

        let data = response
            .json::<TokenResponse>()
            .await
            .context("Failed to parse Reddit token response")?;

        token_from_response(data, previous_refresh, Utc::now())
    }
}

fn token_from_response(
    data: TokenResponse,
    previous_refresh: Option<&str>,
    now: DateTime<Utc>,
) -> Result<RedditAccessToken> {
    // Reddit reports some failures with a 200 status and an error field
    if let Some(error) = data.error {
        anyhow::bail!("Reddit token request error: {}", error);
    }

    let access_token = data
        .access_token
        .filter(|t| !t.is_empty())
        .context("Reddit token response did not contain an access token")?;

    Ok(RedditAccessToken::new(
        access_token,
        data.refresh_token.or_else(|| previous_refresh.map(str::to_string)),
        data.scope.unwrap_or_default(),
        now + Duration::seconds(data.expires_in.unwrap_or(3600)),
    ))
}

fn user_from_response(data: MeResponse) -> AuthenticatedUser {
    AuthenticatedUser {
        name: data.name,
        link_karma: data.link_karma,
        comment_karma: data.comment_karma,
        created: DateTime::from_timestamp(data.created_utc as i64, 0).unwrap_or_default(),
        has_mail: data.has_mail.unwrap_or(false),
        inbox_count: data.inbox_count.unwrap_or(0),
    }
}

#[async_trait]
impl RedditRepository for RedditApiRepository {
    fn authorization_url(&self, state: &str) -> String {
        format!(
            "{}/api/v1/authorize?client_id={}&response_type=code&state={}&redirect_uri={}&duration=permanent&scope={}",
            self.www_base_url,
            urlencoding::encode(&self.settings.client_id),
            urlencoding::encode(state),
            urlencoding::encode(&self.settings.redirect_uri),
            urlencoding::encode(&self.settings.scope),
        )
    }

    async fn exchange_code(&self, code: &str) -> Result<RedditAccessToken> {
        self.request_token(
            &[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.settings.redirect_uri.as_str()),
            ],
            None,
        )
        .await
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<RedditAccessToken> {
        self.request_token(
            &[("grant_type", "refresh_token"), ("refresh_token", refresh_token)],
            Some(refresh_token),
        )
        .await
    }

    async fn get_authenticated_user(&self, access_token: &str) -> Result<Option<AuthenticatedUser>> {
        let url = format!("{}/api/v1/me", self.oauth_base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .context("Failed to send identity request to Reddit")?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::debug!("Reddit rejected the access token ({})", response.status());
                return Ok(None);
            }
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                anyhow::bail!("Reddit identity request failed with status {}: {}", status, body);
            }
            _ => {}
        }

        let data = response
            .json::<MeResponse>()
            .await
            .context("Failed to parse Reddit identity response")?;

        Ok(Some(user_from_response(data)))
    }
}
