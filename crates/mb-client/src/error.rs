//! Error types for building imposters and talking to the control plane.

use thiserror::Error;

/// Raised by a builder when the value it is about to produce would violate
/// one of the model's invariants. Never reaches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{operator} predicate needs a field selector")]
    MissingSelector { operator: &'static str },
    #[error("{operator} predicate takes exactly one field selector, got {count}")]
    MultipleSelectors { operator: &'static str, count: usize },
    #[error("{operator} predicate names field '{field}' more than once")]
    DuplicateSelector {
        operator: &'static str,
        field: String,
    },
    #[error("{operator} predicate needs {expected} child predicate(s), got {actual}")]
    ChildCount {
        operator: &'static str,
        expected: &'static str,
        actual: usize,
    },
    #[error("invalid regex pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("stub must define at least one response")]
    EmptyResponses,
    #[error("status code {0} is outside 100..600")]
    InvalidStatusCode(u16),
    #[error("imposter protocol is not set")]
    MissingProtocol,
    #[error("unknown imposter protocol: {0}")]
    UnknownProtocol(String),
}

/// Errors returned by [`Client`](crate::Client) operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected imposter (status {status}): {body}")]
    Installation { status: u16, body: String },
    #[error("no imposter installed on port {port}")]
    NotFound { port: u16 },
    #[error("failed to decode server response: {0}")]
    Decoding(#[source] serde_json::Error),
    #[error("server returned unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl Error {
    /// True when the error is a 404 on a single-imposter fetch.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Result alias for client operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_converts() {
        let err: Error = ConfigurationError::EmptyResponses.into();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::EmptyResponses)
        ));
        assert_eq!(
            err.to_string(),
            "invalid configuration: stub must define at least one response"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = Error::NotFound { port: 4545 };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "no imposter installed on port 4545");
    }
}
