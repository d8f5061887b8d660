//! Graph model: vertices, edges, and the undirected adjacency-list store.

mod edge;
mod store;
mod vertex;

pub use edge::Edge;
pub use store::UndirectedGraph;
pub use vertex::Vertex;
