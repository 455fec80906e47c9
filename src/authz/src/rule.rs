//! The group authorization rule
//!
//! Binds the [`sequencer`](crate::sequencer) to the domain: candidates are
//! the rule's configured users in configuration order, the probe is each
//! user's authenticator, and acceptance requires both a successful
//! authentication and a non-empty intersection between the user's static
//! groups and the group set resolved for the request.

use crate::error::{AuthzError, Result};
use crate::resolver::{resolve_groups, GroupExpression};
use crate::sequencer;
use gatewarden_core::{Authenticator, GroupId, ProbeResult, RequestContext, UserId};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One configured user entry, tried in turn during a match attempt
///
/// Immutable after construction and shared read-only across concurrent
/// requests; per-request state never leaks into the candidate.
#[derive(Clone)]
pub struct UserCandidate {
    username: UserId,
    groups: HashSet<GroupId>,
    authenticator: Arc<dyn Authenticator>,
}

impl UserCandidate {
    /// Create a candidate from a username, its static groups, and its probe
    pub fn new(
        username: impl Into<UserId>,
        groups: impl IntoIterator<Item = GroupId>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            username: username.into(),
            groups: groups.into_iter().collect(),
            authenticator,
        }
    }

    /// The configured username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The candidate's static group memberships
    pub fn groups(&self) -> &HashSet<GroupId> {
        &self.groups
    }
}

impl fmt::Debug for UserCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCandidate")
            .field("username", &self.username)
            .field("groups", &self.groups)
            .finish_non_exhaustive()
    }
}

/// Terminal result of one match attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A candidate authenticated and shares a permitted group
    Match {
        /// The winning identity: the authenticator's token when it reports
        /// one, the configured username otherwise
        user: UserId,
    },
    /// Every candidate was tried and none was accepted
    NoMatch,
}

impl MatchOutcome {
    /// Whether the rule matched
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Match { .. })
    }

    /// The matched identity, if any
    pub fn user(&self) -> Option<&str> {
        match self {
            MatchOutcome::Match { user } => Some(user),
            MatchOutcome::NoMatch => None,
        }
    }
}

/// Group-based authorization rule
///
/// Configuration (name, permitted-group expressions, user candidates) is
/// fixed at construction; reloading configuration means building a new rule
/// instance. A single rule value is safe to evaluate from many requests
/// concurrently — each call to [`GroupsRule::match_request`] owns all of its
/// transient state.
pub struct GroupsRule {
    name: String,
    groups: Vec<GroupExpression>,
    users: Vec<UserCandidate>,
}

impl GroupsRule {
    /// Create a rule from already-built parts
    ///
    /// `users` are tried in the order given. An empty user list is legal
    /// and simply never matches.
    pub fn new(
        name: impl Into<String>,
        groups: Vec<GroupExpression>,
        users: Vec<UserCandidate>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(AuthzError::InvalidSettings("rule name must not be empty".into()));
        }
        Ok(Self { name, groups, users })
    }

    /// The rule's configured name, used by the pipeline for audit logging
    pub fn key(&self) -> &str {
        &self.name
    }

    /// Evaluate the rule against a request
    ///
    /// Resolves the request's group set once, then probes candidates
    /// strictly in configuration order, stopping at the first acceptance.
    /// A probe error is absorbed as "not authenticated" for that candidate
    /// and evaluation moves on; only a failure that prevents a trustworthy
    /// decision is surfaced as `Err`, which the pipeline must treat as
    /// undecided, never as a match.
    pub async fn match_request(&self, ctx: &RequestContext) -> Result<MatchOutcome> {
        let resolved = resolve_groups(&self.groups, ctx);
        debug!(rule = %self.name, groups = ?resolved, "resolved request group set");

        let outcome = sequencer::run_until_accepted(
            self.users.iter(),
            |user| {
                let user = *user;
                async move {
                    match user.authenticator.authenticate(ctx).await {
                        Ok(result) => result,
                        Err(err) => {
                            // Absorbed at the control-flow layer, but logged
                            // louder than a clean credential mismatch so a
                            // broken backend stays visible.
                            warn!(
                                rule = %self.name,
                                user = %user.username,
                                error = %err,
                                "authentication probe failed, skipping candidate"
                            );
                            ProbeResult::rejected()
                        }
                    }
                }
            },
            |user, result| {
                if !result.authenticated {
                    debug!(rule = %self.name, user = %user.username, "candidate not authenticated");
                    return false;
                }
                let shares_group = user.groups.iter().any(|g| resolved.contains(g));
                if !shares_group {
                    debug!(
                        rule = %self.name,
                        user = %user.username,
                        "candidate authenticated but shares no permitted group"
                    );
                }
                shares_group
            },
            |user, result| {
                let identity = result.identity.unwrap_or_else(|| user.username.clone());
                MatchOutcome::Match { user: identity }
            },
            || MatchOutcome::NoMatch,
        )
        .await;

        match &outcome {
            MatchOutcome::Match { user } => {
                info!(rule = %self.name, user = %user, "request matched group rule");
            }
            MatchOutcome::NoMatch => {
                debug!(rule = %self.name, "no candidate matched");
            }
        }

        Ok(outcome)
    }
}

impl fmt::Debug for GroupsRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupsRule")
            .field("name", &self.name)
            .field("groups", &self.groups)
            .field("users", &self.users)
            .finish()
    }
}
