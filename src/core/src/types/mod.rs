//! Shared types for the Gatewarden platform

pub mod request;

// Re-export commonly used types
pub use request::RequestContext;
