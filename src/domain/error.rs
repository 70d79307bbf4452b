// Domain errors
use std::fmt;
use thiserror::Error;

/// Errors raised synchronously by domain and parsing operations.
///
/// Provider failures are not represented here; they travel as `anyhow::Error`
/// and end up on the dashboard as system errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// A required input was blank or out of range
    #[error("Invalid argument '{parameter}': {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: String,
    },

    /// Text could not be parsed into the expected shape
    #[error("Invalid format in '{input}': {reason}")]
    Format { input: String, reason: String },

    /// An encoded access token could not be decoded
    #[error("Invalid access token: {0}")]
    Token(String),
}

impl DashboardError {
    pub fn invalid_argument(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }

    pub fn format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter for invalid-argument errors
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { parameter, .. } => Some(*parameter),
            _ => None,
        }
    }
}

/// Several independent failures collected into one error.
///
/// Inner errors may themselves be aggregates; consumers that care about the
/// individual failures should flatten them.
#[derive(Debug, Default)]
pub struct AggregateError {
    errors: Vec<anyhow::Error>,
}

impl AggregateError {
    pub fn new(errors: Vec<anyhow::Error>) -> Self {
        Self { errors }
    }

    pub fn push(&mut self, error: anyhow::Error) {
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_inner(self) -> Vec<anyhow::Error> {
        self.errors
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "One or more errors occurred ({} total)", self.errors.len())?;
        for error in &self.errors {
            write!(f, "; {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_names_parameter() {
        let err = DashboardError::invalid_argument("text", "must not be blank");
        assert_eq!(err.parameter(), Some("text"));
        assert_eq!(err.to_string(), "Invalid argument 'text': must not be blank");
    }

    #[test]
    fn test_aggregate_display_lists_inner_messages() {
        let aggregate = AggregateError::new(vec![
            anyhow::anyhow!("feed timed out"),
            anyhow::anyhow!("reddit returned 503"),
        ]);
        assert_eq!(aggregate.len(), 2);
        assert_eq!(
            aggregate.to_string(),
            "One or more errors occurred (2 total); feed timed out; reddit returned 503"
        );
    }
}
