//! Vertex metadata.

use graphika_common::types::VertexId;
use serde::{Deserialize, Serialize};

/// A graph vertex.
///
/// Identity lives in `id`; everything else is display/layout metadata
/// that no algorithm reads. The `color` tag is where a client can record
/// a coloring result; algorithms themselves never write it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Caller-assigned identifier.
    pub id: VertexId,
    /// Optional display label.
    pub label: Option<String>,
    /// Layout x coordinate.
    pub x: f64,
    /// Layout y coordinate.
    pub y: f64,
    /// Color tag, `None` until set.
    pub color: Option<u32>,
}

impl Vertex {
    /// Creates an unlabeled vertex.
    #[must_use]
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            label: None,
            x: 0.0,
            y: 0.0,
            color: None,
        }
    }

    /// Creates a labeled vertex.
    #[must_use]
    pub fn with_label(id: VertexId, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(id)
        }
    }
}
