//! Authentication probe seam
//!
//! The rule engine never authenticates anything itself; each configured user
//! carries an [`Authenticator`] implementation (static key, LDAP, JWT, ...)
//! that the engine probes on demand.

use crate::error::Result;
use crate::types::RequestContext;
use crate::UserId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome of one authentication probe for one candidate
///
/// Transient: scoped to a single evaluation step. A clean "not
/// authenticated" is a successful probe with `authenticated == false`;
/// backend malfunctions are reported through `Err` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Whether the request's credentials proved the candidate's identity
    pub authenticated: bool,

    /// Identity token reported by the authenticator on success; may differ
    /// from the configured username when the backend canonicalizes names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<UserId>,
}

impl ProbeResult {
    /// Successful authentication carrying the proven identity
    pub fn granted(identity: impl Into<UserId>) -> Self {
        Self {
            authenticated: true,
            identity: Some(identity.into()),
        }
    }

    /// Clean authentication failure (wrong or absent credentials)
    pub fn rejected() -> Self {
        Self {
            authenticated: false,
            identity: None,
        }
    }
}

/// Asynchronous authentication probe
///
/// Implementations must resolve exactly once per call and are responsible
/// for their own timeout handling: a probe that never completes would leave
/// the calling evaluation suspended, and the engine cannot enforce a bound
/// on its behalf.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Check whether the request authenticates as this authenticator's user
    async fn authenticate(&self, ctx: &RequestContext) -> Result<ProbeResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_result_constructors() {
        let granted = ProbeResult::granted("alice");
        assert!(granted.authenticated);
        assert_eq!(granted.identity.as_deref(), Some("alice"));

        let rejected = ProbeResult::rejected();
        assert!(!rejected.authenticated);
        assert!(rejected.identity.is_none());
    }

    struct HeaderEquals(&'static str);

    #[async_trait]
    impl Authenticator for HeaderEquals {
        async fn authenticate(&self, ctx: &RequestContext) -> Result<ProbeResult> {
            match ctx.header("x-api-key") {
                Some(value) if value == self.0 => Ok(ProbeResult::granted("api-client")),
                _ => Ok(ProbeResult::rejected()),
            }
        }
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let probe: Box<dyn Authenticator> = Box::new(HeaderEquals("s3cr3t"));

        let ctx = RequestContext::new().with_header("X-Api-Key", "s3cr3t");
        assert!(probe.authenticate(&ctx).await.unwrap().authenticated);

        let miss = RequestContext::new();
        assert!(!probe.authenticate(&miss).await.unwrap().authenticated);
    }
}
