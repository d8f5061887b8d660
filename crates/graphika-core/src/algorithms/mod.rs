//! Graph algorithms for Graphika.
//!
//! Every entry point takes a `&UndirectedGraph<W>` plus its parameters
//! and returns a plain result value. Nothing here mutates the graph, and
//! nothing panics on bad input: missing vertices, unreachable targets,
//! and infeasible instances all come back through result fields
//! (`found`, `is_valid`, or a `Weight::infinity()` distance).
//!
//! ## Algorithm Categories
//!
//! - Shortest paths: [`dijkstra`], [`find_path`], [`bfs_path`]
//! - Spanning trees: [`kruskal`] (via [`UnionFind`]) and [`prim`]
//! - Connectivity: [`dfs_components`], [`bfs_components`]
//! - Coloring: [`greedy_coloring`], [`welsh_powell_coloring`]
//! - Tours: [`brute_force`], [`nearest_neighbor`], [`two_opt`], [`hybrid_solver`]
//! - Facility location: [`dominating_set_greedy`], [`k_centers`]
//!
//! ## Usage
//!
//! ```
//! use graphika_core::UndirectedGraph;
//! use graphika_core::algorithms::{dijkstra, kruskal};
//! use graphika_common::types::VertexId;
//!
//! let mut g: UndirectedGraph<f64> = UndirectedGraph::new();
//! g.add_vertex(VertexId::new(0));
//! g.add_vertex(VertexId::new(1));
//! g.add_edge(VertexId::new(0), VertexId::new(1), 2.0);
//!
//! let paths = dijkstra(&g, VertexId::new(0));
//! assert_eq!(paths.distance(VertexId::new(1)), 2.0);
//!
//! let mst = kruskal(&g);
//! assert!(mst.is_connected);
//! ```

mod coloring;
mod components;
mod facility;
mod mst;
mod shortest_path;
mod traits;
mod tsp;
mod union_find;

pub use traits::MinScored;

pub use union_find::UnionFind;

pub use shortest_path::{bfs_path, dijkstra, find_path, BfsPathResult, DijkstraResult, PathResult};

pub use mst::{kruskal, prim, MstResult};

pub use components::{
    bfs_components, dfs_components, is_connected, largest_component_size, ComponentsResult,
};

pub use coloring::{greedy_coloring, validate_coloring, welsh_powell_coloring, ColoringResult};

pub use tsp::{brute_force, hybrid_solver, nearest_neighbor, two_opt, TspResult};

pub use facility::{dominating_set_greedy, k_centers, FacilityResult};
