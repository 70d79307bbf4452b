use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub news: NewsSettings,
    #[serde(default)]
    pub reddit: RedditSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_address")]
    pub address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: default_address(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Upper bound for the number of news a visitor may request
    #[serde(default = "default_max_news")]
    pub max_news: i32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            max_news: default_max_news(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewsSettings {
    #[serde(default = "default_news_count")]
    pub default_count: i32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub feeds: Vec<FeedConfig>,
}

impl Default for NewsSettings {
    fn default() -> Self {
        Self {
            default_count: default_news_count(),
            request_timeout_secs: default_request_timeout_secs(),
            feeds: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedditSettings {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_scope")]
    pub scope: String,
}

impl Default for RedditSettings {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: default_redirect_uri(),
            user_agent: default_user_agent(),
            scope: default_scope(),
        }
    }
}

fn default_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_max_news() -> i32 {
    200
}

fn default_news_count() -> i32 {
    crate::domain::dashboard::DEFAULT_NUMBER_OF_NEWS
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_redirect_uri() -> String {
    "http://localhost:8080/reddit/callback".to_string()
}

fn default_user_agent() -> String {
    concat!("personal-dashboard/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_scope() -> String {
    "identity".to_string()
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from("config/dashboard")
}

/// Load `<path>.{toml,json,yaml,...}` if present, overridden by `DASHBOARD__*` variables
pub fn load_app_config_from(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    anyhow::ensure!(
        config.dashboard.max_news >= 0,
        "dashboard.max_news must not be negative (got {})",
        config.dashboard.max_news
    );
    Ok(config)
}
