// Dashboard factory - Runs eligible content builders concurrently and collects their failures
use crate::application::content_builder::ContentBuilder;
use crate::application::exception_handler::ExceptionHandler;
use crate::application::system_error_logic::SystemErrorLogic;
use crate::domain::dashboard::{Dashboard, DashboardSettings, SharedDashboard};
use crate::domain::error::AggregateError;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct DashboardFactory {
    builders: Vec<Arc<dyn ContentBuilder>>,
    exception_handler: ExceptionHandler,
    system_error_logic: SystemErrorLogic,
}

impl DashboardFactory {
    pub fn new(
        builders: Vec<Arc<dyn ContentBuilder>>,
        exception_handler: ExceptionHandler,
        system_error_logic: SystemErrorLogic,
    ) -> Self {
        Self {
            builders,
            exception_handler,
            system_error_logic,
        }
    }

    /// Build a dashboard for the given settings.
    ///
    /// Never fails. Content whose builder failed is simply absent, and the
    /// failures show up as system errors, newest first.
    pub async fn build(&self, settings: &DashboardSettings) -> Dashboard {
        let start_time = Instant::now();

        let mut dashboard = Dashboard::new();
        dashboard.replace_settings(settings.clone());
        let dashboard = SharedDashboard::new(dashboard);

        // 1. Spawn every eligible builder
        let eligible: Vec<Arc<dyn ContentBuilder>> = self
            .builders
            .iter()
            .filter(|b| b.should_build(settings))
            .cloned()
            .collect();

        tracing::debug!(
            "Building dashboard with {} of {} content builders",
            eligible.len(),
            self.builders.len()
        );

        let handles = eligible.iter().map(|builder| {
            let builder = Arc::clone(builder);
            let settings = settings.clone();
            let dashboard = dashboard.clone();
            tokio::spawn(async move { builder.build(&settings, &dashboard).await })
        });

        // 2. Wait for all of them; builders record their own failures, so only
        // a panicked or cancelled task ends up here
        let mut failures = AggregateError::default();
        for (builder, result) in eligible.iter().zip(join_all(handles).await) {
            if let Err(e) = result {
                failures.push(
                    anyhow::Error::new(e)
                        .context(format!("Content builder '{}' did not complete", builder.name())),
                );
            }
        }

        if !failures.is_empty() {
            self.exception_handler.handle_aggregate(failures).await;
        }

        // 3. Attach everything captured so far
        let mut dashboard = dashboard.into_inner();
        match self.system_error_logic.get_system_errors().await {
            Ok(errors) => dashboard.replace_system_errors(errors),
            Err(e) => tracing::error!("Failed to read system errors: {:#}", e),
        }

        tracing::info!(
            "Dashboard built in {}ms: {} news, {} system errors, reddit user {}",
            start_time.elapsed().as_millis(),
            dashboard.news().len(),
            dashboard.system_errors().len(),
            if dashboard.reddit_user().is_some() { "present" } else { "absent" }
        );

        dashboard
    }
}
