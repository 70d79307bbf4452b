// Content builder contract - One dashboard facet per builder
use crate::domain::dashboard::{DashboardSettings, SharedDashboard};
use async_trait::async_trait;

/// Populates one facet of the dashboard from an external source.
///
/// Eligibility is checked separately so the factory can skip a builder
/// without paying for its I/O. `build` never fails: builders hand their
/// errors to the exception handler and leave their facet untouched.
#[async_trait]
pub trait ContentBuilder: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn should_build(&self, settings: &DashboardSettings) -> bool;

    async fn build(&self, settings: &DashboardSettings, dashboard: &SharedDashboard);
}
