//! # graphika-core
//!
//! Core layer for Graphika: the undirected graph store and the algorithm
//! suite built on it. It depends only on `graphika-common`.
//!
//! Control flow is always the same: a client builds or mutates an
//! [`UndirectedGraph`], calls one algorithm entry point, and reads the
//! returned result value. Algorithms read the graph and never mutate it;
//! results are immutable snapshots with no back-reference to the graph.
//!
//! ## Modules
//!
//! - [`graph`] - Vertex/edge storage and adjacency queries
//! - [`algorithms`] - Shortest paths, MST, connectivity, coloring, TSP,
//!   facility location

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod graph;

// Re-export commonly used types
pub use graph::{Edge, UndirectedGraph, Vertex};
