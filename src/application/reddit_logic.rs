// Reddit logic - Token handling and user lookup
use crate::application::reddit_repository::RedditRepository;
use crate::domain::error::DashboardError;
use crate::domain::reddit::{AuthenticatedUser, RedditAccessToken};
use chrono::Utc;
use std::sync::Arc;

/// Account behind a stored token, plus the replacement token when it had to be refreshed
#[derive(Debug, Default)]
pub struct RedditLookup {
    pub user: Option<AuthenticatedUser>,
    pub refreshed_token: Option<RedditAccessToken>,
}

#[derive(Clone)]
pub struct RedditLogic {
    repository: Arc<dyn RedditRepository>,
}

impl RedditLogic {
    pub fn new(repository: Arc<dyn RedditRepository>) -> Self {
        Self { repository }
    }

    pub fn authorization_url(&self, state: &str) -> String {
        self.repository.authorization_url(state)
    }

    pub async fn exchange_code(&self, code: &str) -> anyhow::Result<RedditAccessToken> {
        let code = code.trim();
        if code.is_empty() {
            return Err(DashboardError::invalid_argument("code", "authorization code must not be blank").into());
        }

        self.repository.exchange_code(code).await
    }

    /// Look up the token's account, refreshing an expired token first when possible
    pub async fn get_authenticated_user(&self, token: &RedditAccessToken) -> anyhow::Result<RedditLookup> {
        let refreshed_token = match (&token.refresh_token, token.is_expired(Utc::now())) {
            (Some(refresh_token), true) => {
                tracing::debug!("Reddit access token expired, refreshing");
                let mut refreshed = self.repository.refresh_token(refresh_token).await?;
                if refreshed.refresh_token.is_none() {
                    refreshed.refresh_token = Some(refresh_token.clone());
                }
                Some(refreshed)
            }
            _ => None,
        };

        let access_token = refreshed_token
            .as_ref()
            .map_or(&token.access_token, |t| &t.access_token);
        let user = self.repository.get_authenticated_user(access_token).await?;

        Ok(RedditLookup { user, refreshed_token })
    }
}
