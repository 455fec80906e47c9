//! Read-only view of an inbound request
//!
//! The host pipeline builds a [`RequestContext`] once per request and hands
//! it to the rule engine by shared reference. The engine never mutates it;
//! all construction happens up front through the builder methods.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable request-side data consulted during a match attempt
///
/// Two namespaces are exposed:
///
/// - **headers**: transport headers, looked up case-insensitively
/// - **attributes**: values resolved earlier in the pipeline (e.g. an
///   authenticated username or identity claims)
///
/// Variable lookups used by group expressions consult attributes first and
/// fall back to headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Transport headers, keyed by lowercase header name
    #[serde(default)]
    headers: HashMap<String, String>,

    /// Pipeline-resolved attributes (identity claims, routing metadata)
    #[serde(default)]
    attributes: HashMap<String, String>,
}

impl RequestContext {
    /// Create an empty request context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header; names are stored lowercased
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Add a pipeline-resolved attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Look up a header by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Look up a pipeline-resolved attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Resolve a variable name: attributes first, then headers
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.attribute(name).or_else(|| self.header(name))
    }
}
