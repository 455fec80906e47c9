//! Error types for the authorization engine

use thiserror::Error;

/// Authorization engine errors
#[derive(Debug, Error)]
pub enum AuthzError {
    /// Rule settings that cannot produce a usable rule
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// The candidate list could not be inspected; surfaced to the caller so
    /// the pipeline fails closed instead of reporting a false NO_MATCH
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] gatewarden_core::CoreError),
}

/// Result type for authorization operations
pub type Result<T> = std::result::Result<T, AuthzError>;
