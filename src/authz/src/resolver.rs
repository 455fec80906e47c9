//! Group expression resolution
//!
//! A rule's permitted groups are configured as expressions: literal group
//! identifiers, optionally containing `@{name}` placeholders that are filled
//! in from the request at match time (e.g. `"team_@{x-tenant}"`). An
//! expression whose placeholders cannot all be resolved for a given request
//! simply contributes nothing; it is dropped, not an error.

use crate::error::{AuthzError, Result};
use gatewarden_core::{GroupId, RequestContext};
use std::collections::HashSet;
use tracing::debug;

/// One parsed piece of an expression
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Literal text, copied through verbatim
    Text(String),
    /// `@{name}` placeholder, resolved from the request context
    Var(String),
}

/// A configured group-id pattern
///
/// Parsed once at rule construction; resolution against a request never
/// fails, it either yields a concrete group identifier or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupExpression {
    /// The configured text, kept for diagnostics
    raw: String,
    segments: Vec<Segment>,
}

impl GroupExpression {
    /// Parse a configured expression
    ///
    /// Fails only on malformed syntax (an unterminated or empty `@{}`
    /// placeholder); a plain literal is always valid.
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let mut segments = Vec::new();
        let mut rest = raw.as_str();

        while let Some(start) = rest.find("@{") {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }
            let after = &rest[start + 2..];
            let end = after.find('}').ok_or_else(|| {
                AuthzError::InvalidSettings(format!("unterminated placeholder in '{raw}'"))
            })?;
            let name = &after[..end];
            if name.is_empty() {
                return Err(AuthzError::InvalidSettings(format!(
                    "empty placeholder in '{raw}'"
                )));
            }
            segments.push(Segment::Var(name.to_string()));
            rest = &after[end + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self { raw, segments })
    }

    /// The configured text of this expression
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Resolve this expression against a request
    ///
    /// Returns `None` when any placeholder has no value for this request,
    /// or when the expression resolves to the empty string.
    pub fn resolve(&self, ctx: &RequestContext) -> Option<GroupId> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Var(name) => match ctx.variable(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        debug!(expression = %self.raw, variable = %name, "group expression unresolved");
                        return None;
                    }
                },
            }
        }
        if out.is_empty() {
            return None;
        }
        Some(out)
    }
}

/// Resolve the group set asserted by a request
///
/// Folds the configured expressions, in order, into a duplicate-free set.
/// Computed once per match attempt; unresolvable expressions are skipped.
pub fn resolve_groups(expressions: &[GroupExpression], ctx: &RequestContext) -> HashSet<GroupId> {
    expressions
        .iter()
        .filter_map(|expr| expr.resolve(ctx))
        .collect()
}
