// HTTP request handlers
use crate::domain::reddit::RedditAccessToken;
use crate::infrastructure::http_response::{accepts_brotli, html_response, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::cookies::{
    REDDIT_STATE_COOKIE, REDDIT_TOKEN_COOKIE, clear_cookie, read_cookies, reddit_enabled_cookie,
    settings_cookies, settings_from_cookies, state_cookie, token_cookie,
};
use crate::presentation::view_model::DashboardViewModel;
use axum::{
    Form,
    extract::{Query, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    pub number_of_news: i32,
    #[serde(default)]
    pub reddit_enabled: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Build the dashboard; the second value reissues the Reddit token cookie after a refresh
async fn build_view_model(headers: &HeaderMap, state: &AppState) -> (DashboardViewModel, Option<String>) {
    let settings = settings_from_cookies(headers, state.settings_defaults);
    let dashboard = state.dashboard_factory.build(&settings).await;
    let cookie = dashboard.refreshed_reddit_token().map(token_cookie);
    (DashboardViewModel::from_dashboard(&dashboard, Utc::now()), cookie)
}

fn with_cookie(mut response: Response, cookie: Option<String>) -> Response {
    if let Some(cookie) = cookie {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::warn!("Dropping unrepresentable cookie: {}", e),
        }
    }
    response
}

/// Render the dashboard page
pub async fn show_dashboard(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let compress = accepts_brotli(&headers);
    let (view_model, cookie) = build_view_model(&headers, &state).await;

    let html = match state.renderer.render(&view_model) {
        Ok(html) => html,
        Err(e) => {
            tracing::error!("Failed to render dashboard: {:#}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match html_response(html, compress).await {
        Ok(response) => with_cookie(response, cookie),
        Err(status) => status.into_response(),
    }
}

/// The same dashboard as JSON
pub async fn dashboard_json(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let compress = accepts_brotli(&headers);
    let (view_model, cookie) = build_view_model(&headers, &state).await;

    match json_response(&view_model, compress).await {
        Ok(response) => with_cookie(response, cookie),
        Err(status) => status.into_response(),
    }
}

/// Persist the settings form in cookies
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SettingsForm>,
) -> impl IntoResponse {
    let number_of_news = form.number_of_news.min(state.settings_defaults.max_news).max(0);
    let reddit_enabled = form
        .reddit_enabled
        .is_some_and(|v| v == "true" || v == "on");

    tracing::info!(
        "Updating settings: {} news, reddit {}",
        number_of_news,
        if reddit_enabled { "enabled" } else { "disabled" }
    );

    let cookies: Vec<(HeaderName, String)> = settings_cookies(number_of_news, reddit_enabled)
        .into_iter()
        .map(|c| (header::SET_COOKIE, c))
        .collect();

    (AppendHeaders(cookies), Redirect::to("/"))
}

/// Start the Reddit OAuth flow
pub async fn reddit_login(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let csrf_state = state.random.unique_token();
    let url = state.reddit_logic.authorization_url(&csrf_state);

    (
        AppendHeaders([(header::SET_COOKIE, state_cookie(&csrf_state))]),
        Redirect::to(&url),
    )
}

/// Finish the Reddit OAuth flow. Failures are recorded and shown on the dashboard.
pub async fn reddit_callback(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Query(query): Query<CallbackQuery>,
) -> impl IntoResponse {
    let expected_state = read_cookies(&headers).remove(REDDIT_STATE_COOKIE);
    let mut cookies = vec![(header::SET_COOKIE, clear_cookie(REDDIT_STATE_COOKIE))];

    match authorize(&state, &query, expected_state.as_deref()).await {
        Ok(token) => {
            tracing::info!("Reddit account connected");
            cookies.push((header::SET_COOKIE, token_cookie(&token)));
            cookies.push((header::SET_COOKIE, reddit_enabled_cookie(true)));
        }
        Err(e) => state.exception_handler.handle(e).await,
    }

    (AppendHeaders(cookies), Redirect::to("/"))
}

async fn authorize(
    state: &AppState,
    query: &CallbackQuery,
    expected_state: Option<&str>,
) -> anyhow::Result<RedditAccessToken> {
    if let Some(error) = &query.error {
        anyhow::bail!("Reddit authorization was declined: {}", error);
    }

    match (query.state.as_deref(), expected_state) {
        (Some(received), Some(expected)) if received == expected => {}
        _ => anyhow::bail!("Reddit authorization state did not match"),
    }

    state
        .reddit_logic
        .exchange_code(query.code.as_deref().unwrap_or_default())
        .await
}

/// Forget the Reddit token
pub async fn reddit_logout() -> impl IntoResponse {
    (
        AppendHeaders([
            (header::SET_COOKIE, clear_cookie(REDDIT_TOKEN_COOKIE)),
            (header::SET_COOKIE, reddit_enabled_cookie(false)),
        ]),
        Redirect::to("/"),
    )
}
