// View models rendered by the HTML view and the JSON endpoint
use crate::domain::dashboard::Dashboard;
use crate::domain::news::News;
use crate::domain::reddit::AuthenticatedUser;
use crate::domain::system_error::SystemError;
use chrono::{DateTime, Utc};
use serde::Serialize;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

#[derive(Debug, Clone, Serialize)]
pub struct DashboardViewModel {
    pub news: Vec<NewsViewModel>,
    pub system_errors: Vec<SystemErrorViewModel>,
    pub reddit_user: Option<RedditUserViewModel>,
    pub settings: SettingsViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsViewModel {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub provider: String,
    pub link: Option<String>,
    pub published: String,
    pub age: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemErrorViewModel {
    pub id: String,
    pub information: String,
    pub details: String,
    pub occurred: String,
    pub age: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RedditUserViewModel {
    pub name: String,
    pub link_karma: i64,
    pub comment_karma: i64,
    pub member_since: String,
    pub has_mail: bool,
    pub inbox_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsViewModel {
    pub number_of_news: i32,
    pub reddit_enabled: bool,
    pub reddit_connected: bool,
}

impl DashboardViewModel {
    pub fn from_dashboard(dashboard: &Dashboard, now: DateTime<Utc>) -> Self {
        let settings = dashboard.settings();

        Self {
            news: dashboard.news().iter().map(|n| NewsViewModel::new(n, now)).collect(),
            system_errors: dashboard
                .system_errors()
                .iter()
                .map(|e| SystemErrorViewModel::new(e, now))
                .collect(),
            reddit_user: dashboard.reddit_user().map(RedditUserViewModel::new),
            settings: SettingsViewModel {
                number_of_news: settings.number_of_news,
                reddit_enabled: settings.reddit_enabled,
                reddit_connected: settings.reddit_access_token.is_some(),
            },
        }
    }
}

impl NewsViewModel {
    fn new(news: &News, now: DateTime<Utc>) -> Self {
        Self {
            id: news.id.clone(),
            title: news.information.clone(),
            summary: news.details.clone(),
            provider: news.provider.clone(),
            link: news.link.clone(),
            published: news.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            age: relative_age(news.timestamp, now),
        }
    }
}

impl SystemErrorViewModel {
    fn new(error: &SystemError, now: DateTime<Utc>) -> Self {
        Self {
            id: error.id.clone(),
            information: error.information.clone(),
            details: error.details.clone(),
            occurred: error.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            age: relative_age(error.timestamp, now),
        }
    }
}

impl RedditUserViewModel {
    fn new(user: &AuthenticatedUser) -> Self {
        Self {
            name: user.name.clone(),
            link_karma: user.link_karma,
            comment_karma: user.comment_karma,
            member_since: user.created.format("%Y-%m-%d").to_string(),
            has_mail: user.has_mail,
            inbox_count: user.inbox_count,
        }
    }
}

/// "just now", "5 minutes ago", "1 hour ago", "3 days ago"
pub fn relative_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);

    let (amount, unit) = if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    } else if elapsed.num_hours() < 1 {
        (elapsed.num_minutes(), "minute")
    } else if elapsed.num_days() < 1 {
        (elapsed.num_hours(), "hour")
    } else {
        (elapsed.num_days(), "day")
    };

    if amount == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", amount, unit)
    }
}
