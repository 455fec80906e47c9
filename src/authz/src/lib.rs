//! # Gatewarden Authorization Engine
//!
//! Group-based request authorization: a rule grants access when at least one
//! configured user both authenticates the request and belongs to a group the
//! request is allowed to use.
//!
//! ## Design
//!
//! - **Async-first** using the Tokio runtime; authentication probes are
//!   awaited, never polled on a blocked thread
//! - **Ordered short-circuit evaluation**: candidates are probed strictly
//!   one at a time in configuration order, and evaluation stops at the first
//!   acceptance — later probes are never started
//! - **Immutable configuration**: a rule is built once from settings and is
//!   safe to share read-only across concurrent requests
//!
//! ## Example
//!
//! ```rust
//! use gatewarden_authz::{GroupsRule, GroupsRuleSettings, StaticKeyFactory};
//! use gatewarden_core::RequestContext;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings: GroupsRuleSettings = serde_json::from_str(
//!         r#"{
//!             "name": "ops_only",
//!             "groups": ["ops"],
//!             "users": [
//!                 { "username": "alice", "groups": ["ops"], "auth_key": "alice:secret" }
//!             ]
//!         }"#,
//!     )?;
//!
//!     let rule = GroupsRule::from_settings(settings, &StaticKeyFactory)?;
//!
//!     let ctx = RequestContext::new()
//!         .with_header("Authorization", "Basic YWxpY2U6c2VjcmV0");
//!
//!     let outcome = rule.match_request(&ctx).await?;
//!     assert!(outcome.is_match());
//!     Ok(())
//! }
//! ```

pub mod authenticators;
pub mod error;
pub mod resolver;
pub mod rule;
pub mod sequencer;
pub mod settings;

// Re-export commonly used types
pub use authenticators::AuthKeyAuthenticator;
pub use error::{AuthzError, Result};
pub use resolver::{resolve_groups, GroupExpression};
pub use rule::{GroupsRule, MatchOutcome, UserCandidate};
pub use settings::{AuthenticatorFactory, GroupsRuleSettings, StaticKeyFactory, UserSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
