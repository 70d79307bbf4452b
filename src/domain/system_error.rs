// System error domain model
use super::news::DashboardItem;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A captured failure, shown to the user once and then forgotten.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemError {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub information: String,
    pub details: String,
}

impl SystemError {
    pub fn new(id: String, timestamp: DateTime<Utc>, information: String, details: String) -> Self {
        Self {
            id,
            timestamp,
            information,
            details,
        }
    }
}

impl DashboardItem for SystemError {
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

/// Sort newest first; ties keep their relative order.
pub fn sort_newest_first(errors: &mut [SystemError]) {
    errors.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn error_at(id: &str, hour: u32) -> SystemError {
        SystemError::new(
            id.to_string(),
            Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap(),
            format!("error {}", id),
            String::new(),
        )
    }

    #[test]
    fn test_sort_newest_first() {
        let mut errors = vec![error_at("a", 8), error_at("b", 12), error_at("c", 10)];
        sort_newest_first(&mut errors);
        let ids: Vec<&str> = errors.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }
}
