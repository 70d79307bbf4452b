// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::content_builder::ContentBuilder;
use crate::application::dashboard_factory::DashboardFactory;
use crate::application::exception_handler::ExceptionHandler;
use crate::application::news_builder::NewsBuilder;
use crate::application::news_logic::NewsLogic;
use crate::application::random_source::RandomSource;
use crate::application::reddit_builder::RedditBuilder;
use crate::application::reddit_logic::RedditLogic;
use crate::application::system_error_logic::SystemErrorLogic;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::in_memory_exception_repository::InMemoryExceptionRepository;
use crate::infrastructure::reddit_api_repository::RedditApiRepository;
use crate::infrastructure::rss_news_repository::RssNewsRepository;
use crate::infrastructure::thread_random_source::ThreadRandomSource;
use crate::presentation::app_state::AppState;
use crate::presentation::cookies::SettingsDefaults;
use crate::presentation::handlers::{
    dashboard_json, health_check, reddit_callback, reddit_login, reddit_logout, show_dashboard,
    update_settings,
};
use crate::presentation::views::DashboardRenderer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;
    tracing::info!("Loaded configuration with {} news feeds", config.news.feeds.len());

    // Create repositories (infrastructure layer)
    let random: Arc<dyn RandomSource> = Arc::new(ThreadRandomSource);
    let exception_repository = Arc::new(InMemoryExceptionRepository::new(random.clone()));
    let news_repository = Arc::new(RssNewsRepository::new(
        config.news.feeds.clone(),
        Duration::from_secs(config.news.request_timeout_secs),
        &config.reddit.user_agent,
    )?);
    let reddit_repository = Arc::new(RedditApiRepository::new(config.reddit.clone())?);

    // Create logic and builders (application layer)
    let exception_handler = ExceptionHandler::new(exception_repository.clone());
    let reddit_logic = RedditLogic::new(reddit_repository);
    let builders: Vec<Arc<dyn ContentBuilder>> = vec![
        Arc::new(NewsBuilder::new(
            NewsLogic::new(news_repository),
            exception_handler.clone(),
        )),
        Arc::new(RedditBuilder::new(reddit_logic.clone(), exception_handler.clone())),
    ];
    let dashboard_factory = DashboardFactory::new(
        builders,
        exception_handler.clone(),
        SystemErrorLogic::new(exception_repository),
    );

    // Create application state
    let state = Arc::new(AppState {
        dashboard_factory,
        reddit_logic,
        exception_handler,
        random,
        renderer: Arc::new(DashboardRenderer::new()?),
        settings_defaults: SettingsDefaults {
            number_of_news: config.news.default_count,
            max_news: config.dashboard.max_news,
        },
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(show_dashboard))
        .route("/healthz", get(health_check))
        .route("/api/dashboard", get(dashboard_json))
        .route("/settings", post(update_settings))
        .route("/reddit/login", get(reddit_login))
        .route("/reddit/callback", get(reddit_callback))
        .route("/reddit/logout", get(reddit_logout))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.address.parse()?;
    tracing::info!("Starting personal-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
