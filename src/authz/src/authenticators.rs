//! Built-in authenticators
//!
//! The engine is probe-agnostic; host integrations usually supply their own
//! [`Authenticator`] implementations (LDAP, JWT, ...). The static-key
//! authenticator here covers the common configuration-only case: a user
//! proven by an HTTP Basic `Authorization` header matching a configured
//! `user:secret` key.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use gatewarden_core::{Authenticator, CoreError, ProbeResult, RequestContext};
use tracing::debug;

/// Static-key authenticator: compares the request's Basic credentials
/// against a configured `user:secret` pair
///
/// A missing, non-Basic, or undecodable `Authorization` header is a clean
/// "not authenticated" — a garbled client header is not a backend outage.
#[derive(Debug, Clone)]
pub struct AuthKeyAuthenticator {
    username: String,
    key: String,
}

impl AuthKeyAuthenticator {
    /// Create an authenticator for `username` with the literal key
    /// `user:secret`
    pub fn new(
        username: impl Into<String>,
        key: impl Into<String>,
    ) -> gatewarden_core::Result<Self> {
        let username = username.into();
        let key = key.into();
        if !key.contains(':') {
            return Err(CoreError::configuration(format!(
                "auth key for '{username}' must be of the form user:secret"
            )));
        }
        Ok(Self { username, key })
    }

    fn basic_credentials(ctx: &RequestContext) -> Option<String> {
        let header = ctx.header("authorization")?;
        let encoded = header.strip_prefix("Basic ")?;
        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        String::from_utf8(decoded).ok()
    }
}

#[async_trait]
impl Authenticator for AuthKeyAuthenticator {
    async fn authenticate(&self, ctx: &RequestContext) -> gatewarden_core::Result<ProbeResult> {
        match Self::basic_credentials(ctx) {
            Some(credentials) if credentials == self.key => {
                Ok(ProbeResult::granted(self.username.clone()))
            }
            Some(_) => Ok(ProbeResult::rejected()),
            None => {
                debug!(user = %self.username, "no usable basic credentials on request");
                Ok(ProbeResult::rejected())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> AuthKeyAuthenticator {
        AuthKeyAuthenticator::new("alice", "alice:secret").unwrap()
    }

    #[tokio::test]
    async fn test_matching_credentials_authenticate() {
        let ctx = RequestContext::new().with_header("Authorization", "Basic YWxpY2U6c2VjcmV0");

        let result = authenticator().authenticate(&ctx).await.unwrap();
        assert!(result.authenticated);
        assert_eq!(result.identity.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_wrong_secret_is_rejected() {
        // alice:wrong
        let ctx = RequestContext::new().with_header("Authorization", "Basic YWxpY2U6d3Jvbmc=");

        let result = authenticator().authenticate(&ctx).await.unwrap();
        assert!(!result.authenticated);
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected_not_an_error() {
        let result = authenticator().authenticate(&RequestContext::new()).await.unwrap();
        assert!(!result.authenticated);
    }

    #[tokio::test]
    async fn test_undecodable_header_is_rejected_not_an_error() {
        let ctx = RequestContext::new().with_header("Authorization", "Basic !!!not-base64!!!");

        let result = authenticator().authenticate(&ctx).await.unwrap();
        assert!(!result.authenticated);
    }

    #[test]
    fn test_key_without_separator_is_a_configuration_error() {
        assert!(AuthKeyAuthenticator::new("alice", "secret-only").is_err());
    }
}
