// HTML views
use crate::presentation::view_model::DashboardViewModel;
use minijinja::{Environment, context};

const DASHBOARD_TEMPLATE: &str = "dashboard.html";

pub struct DashboardRenderer {
    env: Environment<'static>,
}

impl DashboardRenderer {
    pub fn new() -> anyhow::Result<Self> {
        let mut env = Environment::new();
        // `.html` names get HTML auto-escaping
        env.add_template(
            DASHBOARD_TEMPLATE,
            include_str!("../../templates/dashboard.html"),
        )?;
        Ok(Self { env })
    }

    pub fn render(&self, dashboard: &DashboardViewModel) -> anyhow::Result<String> {
        let template = self.env.get_template(DASHBOARD_TEMPLATE)?;
        Ok(template.render(context! { dashboard => dashboard })?)
    }
}
