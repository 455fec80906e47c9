//! Shared traits for the Gatewarden platform

pub mod authenticator;

// Re-export commonly used traits
pub use authenticator::{Authenticator, ProbeResult};
