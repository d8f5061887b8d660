//! Identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A vertex identifier.
///
/// Ids are caller-assigned and never recycled by the store. Any `u64`
/// value is valid; nothing in the engine assumes a dense or bounded id
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(u64);

impl VertexId {
    /// Creates a new vertex id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id_roundtrip() {
        let id = VertexId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id, VertexId::from(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_vertex_id_ordering() {
        assert!(VertexId::new(1) < VertexId::new(2));
    }
}
