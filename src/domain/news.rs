// News domain model
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Anything shown on the dashboard as a timestamped, identifiable entry.
pub trait DashboardItem {
    fn id(&self) -> &str;
    fn timestamp(&self) -> DateTime<Utc>;
    fn information(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct News {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub information: String,
    pub details: String,
    pub provider: String,
    pub link: Option<String>,
}

impl News {
    pub fn new(
        id: String,
        timestamp: DateTime<Utc>,
        information: String,
        details: String,
        provider: String,
        link: Option<String>,
    ) -> Self {
        Self {
            id,
            timestamp,
            information,
            details,
            provider,
            link,
        }
    }
}

impl DashboardItem for News {
    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn information(&self) -> &str {
        &self.information
    }
}
