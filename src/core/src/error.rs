//! Unified error types for the Gatewarden platform

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type shared by authenticators and the rule engine
#[derive(Debug, Error)]
pub enum CoreError {
    /// An authentication backend could not be consulted (network outage,
    /// timeout, protocol error). Distinct from a clean "not authenticated"
    /// probe result, which is not an error at all.
    #[error("Authentication backend error: {0}")]
    Backend(String),

    /// The request context is missing data an authenticator requires
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Create a backend error
    pub fn backend<S: Into<String>>(msg: S) -> Self {
        CoreError::Backend(msg.into())
    }

    /// Create an invalid request error
    pub fn invalid_request<S: Into<String>>(msg: S) -> Self {
        CoreError::InvalidRequest(msg.into())
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        CoreError::Configuration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let err = CoreError::backend("ldap unreachable");
        assert!(matches!(err, CoreError::Backend(_)));

        let err = CoreError::invalid_request("no credentials");
        assert!(matches!(err, CoreError::InvalidRequest(_)));
    }

    #[test]
    fn test_error_display() {
        let err = CoreError::backend("ldap unreachable");
        assert_eq!(err.to_string(), "Authentication backend error: ldap unreachable");

        let err = CoreError::configuration("empty rule name");
        assert_eq!(err.to_string(), "Configuration error: empty rule name");
    }
}
