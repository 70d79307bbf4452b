// Repository trait for the Reddit API
use crate::domain::reddit::{AuthenticatedUser, RedditAccessToken};
use async_trait::async_trait;

#[async_trait]
pub trait RedditRepository: Send + Sync {
    /// URL the browser is sent to in order to grant access
    fn authorization_url(&self, state: &str) -> String;

    /// Trade an authorization code for token material
    async fn exchange_code(&self, code: &str) -> anyhow::Result<RedditAccessToken>;

    /// Obtain a fresh access token from a refresh token
    async fn refresh_token(&self, refresh_token: &str) -> anyhow::Result<RedditAccessToken>;

    /// Look up the account behind an access token; `None` when Reddit does not know it
    async fn get_authenticated_user(
        &self,
        access_token: &str,
    ) -> anyhow::Result<Option<AuthenticatedUser>>;
}
