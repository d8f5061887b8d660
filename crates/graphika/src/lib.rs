//! # Graphika
//!
//! An in-memory graph-algorithms computation engine.
//!
//! If you're new here, start with [`UndirectedGraph`] - that's your entry
//! point for building graphs. The algorithm functions in [`algorithms`]
//! all borrow a graph immutably and return self-describing result structs.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphika::{UndirectedGraph, VertexId};
//! use graphika::algorithms::find_path;
//!
//! let mut graph = UndirectedGraph::new();
//! graph.add_vertex(VertexId::new(0));
//! graph.add_vertex(VertexId::new(1));
//! graph.add_vertex(VertexId::new(2));
//! graph.add_edge(VertexId::new(0), VertexId::new(1), 2.0);
//! graph.add_edge(VertexId::new(1), VertexId::new(2), 3.0);
//!
//! let result = find_path(&graph, VertexId::new(0), VertexId::new(2));
//! assert!(result.found);
//! assert_eq!(result.distance, 5.0);
//! ```

// Re-export the graph store and the algorithm suite
pub use graphika_core::algorithms;
pub use graphika_core::{Edge, UndirectedGraph, Vertex};

// Re-export core types - you'll need these for IDs, weights, and errors
pub use graphika_common::types::{VertexId, Weight};
pub use graphika_common::utils::error::{Error, Result};
pub use graphika_common::utils::timer::Timer;
