//! Rule configuration
//!
//! Settings are plain serde values so the host can load them from whatever
//! configuration source it owns. Building a [`GroupsRule`] from settings is
//! where all validation happens; a constructed rule is immutable, and a
//! configuration reload means constructing a new rule instance.

use crate::authenticators::AuthKeyAuthenticator;
use crate::error::{AuthzError, Result};
use crate::resolver::GroupExpression;
use crate::rule::{GroupsRule, UserCandidate};
use gatewarden_core::Authenticator;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Configuration for one group-authorization rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupsRuleSettings {
    /// Rule name, exposed to the pipeline for audit logging
    pub name: String,

    /// Permitted-group expressions; may contain `@{name}` placeholders
    #[serde(default)]
    pub groups: Vec<String>,

    /// User candidates, tried in this order
    #[serde(default)]
    pub users: Vec<UserSettings>,
}

/// Configuration for one user candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    /// Configured username
    pub username: String,

    /// Static group memberships
    #[serde(default)]
    pub groups: Vec<String>,

    /// Static `user:secret` key for the built-in Basic-auth probe;
    /// absent when a custom factory supplies the authenticator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_key: Option<String>,
}

/// Binds user settings to authentication probes
///
/// Host integrations implement this to hand users to LDAP, JWT, or any
/// other backend without the rule engine knowing the difference.
pub trait AuthenticatorFactory: Send + Sync {
    /// Produce the probe for one configured user
    fn authenticator_for(&self, user: &UserSettings) -> Result<Arc<dyn Authenticator>>;
}

/// Default factory: every user authenticates through its static `auth_key`
pub struct StaticKeyFactory;

impl AuthenticatorFactory for StaticKeyFactory {
    fn authenticator_for(&self, user: &UserSettings) -> Result<Arc<dyn Authenticator>> {
        let key = user.auth_key.as_deref().ok_or_else(|| {
            AuthzError::InvalidSettings(format!("user '{}' has no auth_key", user.username))
        })?;
        let authenticator = AuthKeyAuthenticator::new(user.username.clone(), key)?;
        Ok(Arc::new(authenticator))
    }
}

impl GroupsRule {
    /// Build an immutable rule from settings
    ///
    /// Parses every group expression and asks `factory` for every user's
    /// probe; any failure aborts construction, so a rule that exists is
    /// fully usable.
    pub fn from_settings(
        settings: GroupsRuleSettings,
        factory: &dyn AuthenticatorFactory,
    ) -> Result<Self> {
        let groups = settings
            .groups
            .into_iter()
            .map(|expression| GroupExpression::parse(expression))
            .collect::<Result<Vec<_>>>()?;

        let users = settings
            .users
            .into_iter()
            .map(|user| {
                let authenticator = factory.authenticator_for(&user)?;
                Ok(UserCandidate::new(user.username, user.groups, authenticator))
            })
            .collect::<Result<Vec<_>>>()?;

        GroupsRule::new(settings.name, groups, users)
    }
}
