//! Minimum spanning tree: Kruskal and Prim.

use std::cmp::Ordering;

use graphika_common::types::{VertexId, Weight};
use graphika_common::utils::hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::debug;

use crate::graph::{Edge, UndirectedGraph};

use super::UnionFind;

/// A minimum spanning tree (or forest, when the graph is disconnected).
#[derive(Debug, Clone, Serialize)]
pub struct MstResult<W> {
    /// The selected edges.
    pub edges: Vec<Edge<W>>,
    /// Sum of selected edge weights.
    pub total_weight: W,
    /// Number of vertices in the graph at computation time.
    pub vertex_count: usize,
    /// True iff exactly `V - 1` edges were selected, i.e. the selected
    /// edges span every vertex the algorithm could reach.
    pub is_connected: bool,
}

impl<W: Weight> MstResult<W> {
    fn empty(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            total_weight: W::zero(),
            vertex_count,
            is_connected: false,
        }
    }

    fn finish(mut self) -> Self {
        self.is_connected = self.vertex_count > 0 && self.edges.len() == self.vertex_count - 1;
        self
    }
}

/// Kruskal's algorithm. O(E log E).
///
/// Distinct edges are sorted ascending by weight with a stable sort, so
/// weight ties keep the ordering of
/// [`all_edges`](UndirectedGraph::all_edges). Each edge is accepted only
/// if it joins two previously separate components; the scan stops early
/// once `V - 1` edges are in.
pub fn kruskal<W: Weight>(graph: &UndirectedGraph<W>) -> MstResult<W> {
    let mut result = MstResult::empty(graph.vertex_count());
    if graph.vertex_count() == 0 {
        return result;
    }

    let mut edges = graph.all_edges();
    edges.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

    let mut uf = UnionFind::new();

    for edge in edges {
        if uf.union(edge.from, edge.to) {
            result.total_weight = result.total_weight + edge.weight;
            result.edges.push(edge);

            if result.edges.len() == graph.vertex_count() - 1 {
                break;
            }
        }
    }

    debug!(
        selected = result.edges.len(),
        vertices = result.vertex_count,
        "kruskal finished"
    );

    result.finish()
}

/// Prim's algorithm, grown from `start`. O(V²).
///
/// Each step scans for the unattached vertex with the minimum known
/// connection cost (vertices in insertion order, so cost ties go to the
/// earliest-inserted vertex), attaches it, and relaxes its neighbors.
/// Returns an empty result when `start` is absent or the graph is empty;
/// on a disconnected graph the tree stops at the component of `start`
/// and `is_connected` is false.
pub fn prim<W: Weight>(graph: &UndirectedGraph<W>, start: VertexId) -> MstResult<W> {
    let mut result = MstResult::empty(graph.vertex_count());
    if graph.vertex_count() == 0 || !graph.has_vertex(start) {
        return result;
    }

    let vertices = graph.vertices();
    let mut in_tree: FxHashSet<VertexId> = FxHashSet::default();
    let mut min_cost: FxHashMap<VertexId, W> = FxHashMap::default();
    let mut parent: FxHashMap<VertexId, VertexId> = FxHashMap::default();

    min_cost.insert(start, W::zero());

    for _ in 0..graph.vertex_count() {
        // Nearest unattached vertex.
        let mut u = None;
        let mut best = W::infinity();

        for &v in &vertices {
            if in_tree.contains(&v) {
                continue;
            }
            if let Some(&cost) = min_cost.get(&v) {
                if cost < best {
                    best = cost;
                    u = Some(v);
                }
            }
        }

        // No reachable vertex left: the remainder is a separate component.
        let Some(u) = u else { break };
        in_tree.insert(u);

        if let Some(&p) = parent.get(&u) {
            result.edges.push(Edge::new(p, u, best));
            result.total_weight = result.total_weight + best;
        }

        for &(v, weight) in graph.adjacency(u) {
            let improves = !in_tree.contains(&v)
                && min_cost.get(&v).is_none_or(|current| weight < *current);
            if improves {
                min_cost.insert(v, weight);
                parent.insert(v, u);
            }
        }
    }

    debug!(
        selected = result.edges.len(),
        vertices = result.vertex_count,
        "prim finished"
    );

    result.finish()
}
