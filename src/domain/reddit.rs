// Reddit domain models
use super::error::DashboardError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OAuth token material, carried between requests in a cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedditAccessToken {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub scope: String,
    pub expires_at: DateTime<Utc>,
}

impl RedditAccessToken {
    pub fn new(
        access_token: String,
        refresh_token: Option<String>,
        scope: String,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            scope,
            expires_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Compact, URL and cookie safe representation
    pub fn encode(&self) -> String {
        // Serializing a struct of strings and a timestamp cannot fail
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    pub fn decode(encoded: &str) -> Result<Self, DashboardError> {
        let encoded = encoded.trim();
        if encoded.is_empty() {
            return Err(DashboardError::invalid_argument(
                "encoded",
                "encoded token must not be blank",
            ));
        }

        let bytes = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|e| DashboardError::Token(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| DashboardError::Token(e.to_string()))
    }
}

/// The Reddit account the access token belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthenticatedUser {
    pub name: String,
    pub link_karma: i64,
    pub comment_karma: i64,
    pub created: DateTime<Utc>,
    pub has_mail: bool,
    pub inbox_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn token() -> RedditAccessToken {
        RedditAccessToken::new(
            "abc-123".to_string(),
            Some("refresh-456".to_string()),
            "identity".to_string(),
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_encoded_token_survives_transport() {
        let encoded = token().encode();
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert_eq!(RedditAccessToken::decode(&encoded).unwrap(), token());
    }

    #[test]
    fn test_decode_rejects_blank() {
        let err = RedditAccessToken::decode("   ").unwrap_err();
        assert_eq!(err.parameter(), Some("encoded"));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            RedditAccessToken::decode("not*base64"),
            Err(DashboardError::Token(_))
        ));
        let not_json = URL_SAFE_NO_PAD.encode(b"hello");
        assert!(matches!(
            RedditAccessToken::decode(&not_json),
            Err(DashboardError::Token(_))
        ));
    }

    #[test]
    fn test_is_expired() {
        let token = token();
        assert!(!token.is_expired(Utc.with_ymd_and_hms(2024, 5, 1, 11, 59, 59).unwrap()));
        assert!(token.is_expired(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()));
    }
}
