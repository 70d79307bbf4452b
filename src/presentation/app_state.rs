// Application state for HTTP handlers
use crate::application::dashboard_factory::DashboardFactory;
use crate::application::exception_handler::ExceptionHandler;
use crate::application::random_source::RandomSource;
use crate::application::reddit_logic::RedditLogic;
use crate::presentation::cookies::SettingsDefaults;
use crate::presentation::views::DashboardRenderer;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_factory: DashboardFactory,
    pub reddit_logic: RedditLogic,
    pub exception_handler: ExceptionHandler,
    pub random: Arc<dyn RandomSource>,
    pub renderer: Arc<DashboardRenderer>,
    pub settings_defaults: SettingsDefaults,
}
