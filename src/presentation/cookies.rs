// Cookie <-> dashboard settings mapping
use crate::domain::dashboard::DashboardSettings;
use crate::domain::reddit::RedditAccessToken;
use axum::http::{HeaderMap, header};
use std::collections::HashMap;

pub const NEWS_COUNT_COOKIE: &str = "news_count";
pub const REDDIT_ENABLED_COOKIE: &str = "reddit_enabled";
pub const REDDIT_TOKEN_COOKIE: &str = "reddit_token";
pub const REDDIT_STATE_COOKIE: &str = "reddit_state";

const ONE_YEAR_SECS: i64 = 365 * 24 * 60 * 60;
const TEN_MINUTES_SECS: i64 = 10 * 60;

/// Values used when a visitor has no (valid) settings cookies
#[derive(Debug, Clone, Copy)]
pub struct SettingsDefaults {
    pub number_of_news: i32,
    pub max_news: i32,
}

pub fn read_cookies(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.split_once('='))
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .collect()
}

pub fn settings_from_cookies(headers: &HeaderMap, defaults: SettingsDefaults) -> DashboardSettings {
    let cookies = read_cookies(headers);

    let number_of_news = cookies
        .get(NEWS_COUNT_COOKIE)
        .and_then(|v| v.parse::<i32>().ok())
        .unwrap_or(defaults.number_of_news)
        .min(defaults.max_news);

    let reddit_enabled = cookies
        .get(REDDIT_ENABLED_COOKIE)
        .is_some_and(|v| v == "true");

    let reddit_access_token = cookies
        .get(REDDIT_TOKEN_COOKIE)
        .and_then(|v| match RedditAccessToken::decode(v) {
            Ok(token) => Some(token),
            Err(e) => {
                tracing::warn!("Ignoring unreadable Reddit token cookie: {}", e);
                None
            }
        });

    DashboardSettings {
        number_of_news,
        reddit_enabled,
        reddit_access_token,
    }
}

pub fn set_cookie(name: &str, value: &str, max_age_secs: i64) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        name, value, max_age_secs
    )
}

pub fn clear_cookie(name: &str) -> String {
    set_cookie(name, "", 0)
}

/// Short-lived cookie holding the OAuth state of a pending Reddit login
pub fn state_cookie(state: &str) -> String {
    set_cookie(REDDIT_STATE_COOKIE, state, TEN_MINUTES_SECS)
}

/// `Set-Cookie` values persisting the user-editable settings
pub fn settings_cookies(number_of_news: i32, reddit_enabled: bool) -> Vec<String> {
    vec![
        set_cookie(NEWS_COUNT_COOKIE, &number_of_news.to_string(), ONE_YEAR_SECS),
        reddit_enabled_cookie(reddit_enabled),
    ]
}

pub fn reddit_enabled_cookie(enabled: bool) -> String {
    set_cookie(REDDIT_ENABLED_COOKIE, if enabled { "true" } else { "false" }, ONE_YEAR_SECS)
}

pub fn token_cookie(token: &RedditAccessToken) -> String {
    set_cookie(REDDIT_TOKEN_COOKIE, &token.encode(), ONE_YEAR_SECS)
}
