//! Newtype wrapper for node identifiers.
//!
//! Identifiers are identity-only: they never participate in structural
//! comparisons or fingerprints, so keeping them behind a distinct type makes
//! accidental mixing with content strings a compile error.

use std::fmt;
use std::sync::Arc;

/// The stable identifier a design node carries in its source document.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Creates a new NodeId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this node ID
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
