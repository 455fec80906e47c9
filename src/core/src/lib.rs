//! # Gatewarden Core
//!
//! Shared types, traits, and error handling for the Gatewarden authorization
//! engine. This package holds the request-side view and the authentication
//! probe seam so host integrations and the rule engine do not depend on each
//! other.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use traits::{Authenticator, ProbeResult};
pub use types::RequestContext;

/// User identifier, as configured or as reported by an authenticator
pub type UserId = String;

/// Group identifier asserted by configuration or a request
pub type GroupId = String;
