//! Edge query results.

use graphika_common::types::VertexId;
use serde::{Deserialize, Serialize};

/// An undirected edge as reported by queries and algorithm results.
///
/// Internally the store keeps two symmetric adjacency entries; an `Edge`
/// value only exists in query results, with arbitrary orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge<W> {
    /// One endpoint.
    pub from: VertexId,
    /// The other endpoint.
    pub to: VertexId,
    /// Edge weight.
    pub weight: W,
}

impl<W> Edge<W> {
    /// Creates a new edge value.
    pub fn new(from: VertexId, to: VertexId, weight: W) -> Self {
        Self { from, to, weight }
    }
}
