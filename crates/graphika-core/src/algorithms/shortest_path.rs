//! Shortest-path algorithms: Dijkstra and unweighted BFS.

use std::collections::{BinaryHeap, VecDeque};

use graphika_common::types::{VertexId, Weight};
use graphika_common::utils::hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::debug;

use crate::graph::UndirectedGraph;

use super::MinScored;

/// Single-source shortest-path distances and predecessor links.
///
/// Vertices absent from the tables are unreachable (or nonexistent):
/// [`distance`](Self::distance) reports `Weight::infinity()` and
/// [`predecessor`](Self::predecessor) reports `None` for them.
#[derive(Debug, Clone, Serialize)]
pub struct DijkstraResult<W> {
    distances: FxHashMap<VertexId, W>,
    predecessors: FxHashMap<VertexId, VertexId>,
}

impl<W: Weight> DijkstraResult<W> {
    /// The shortest distance from the source to `v`, or
    /// `Weight::infinity()` if `v` is unreachable or does not exist.
    pub fn distance(&self, v: VertexId) -> W {
        self.distances.get(&v).copied().unwrap_or_else(W::infinity)
    }

    /// The vertex preceding `v` on its shortest path, if any.
    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.predecessors.get(&v).copied()
    }

    /// The reachable vertices and their distances.
    pub fn distances(&self) -> &FxHashMap<VertexId, W> {
        &self.distances
    }
}

/// A reconstructed weighted path between two vertices.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult<W> {
    /// Vertex ids visited in order, inclusive of source and target.
    pub path: Vec<VertexId>,
    /// Total weight along the path; `Weight::infinity()` when not found.
    pub distance: W,
    /// Whether a path exists.
    pub found: bool,
}

/// An unweighted (hop-count) path between two vertices.
#[derive(Debug, Clone, Serialize)]
pub struct BfsPathResult {
    /// Vertex ids visited in order, inclusive of source and target.
    pub path: Vec<VertexId>,
    /// Number of edges along the path.
    pub distance: usize,
    /// Whether a path exists.
    pub found: bool,
}

/// Classical single-source Dijkstra over non-negative weights.
///
/// Ties between equal tentative distances break arbitrarily (first
/// extraction from the heap). Returns empty tables when the source is
/// absent. O((V + E) log V).
pub fn dijkstra<W: Weight>(graph: &UndirectedGraph<W>, source: VertexId) -> DijkstraResult<W> {
    let mut result = DijkstraResult {
        distances: FxHashMap::default(),
        predecessors: FxHashMap::default(),
    };

    if !graph.has_vertex(source) {
        return result;
    }

    let mut heap = BinaryHeap::new();
    result.distances.insert(source, W::zero());
    heap.push(MinScored(W::zero(), source));

    while let Some(MinScored(dist, u)) = heap.pop() {
        // Stale entry: a shorter route to u was already settled.
        if result.distances.get(&u).is_some_and(|best| dist > *best) {
            continue;
        }

        for &(v, weight) in graph.adjacency(u) {
            let candidate = dist + weight;
            let improves = result
                .distances
                .get(&v)
                .is_none_or(|current| candidate < *current);

            if improves {
                result.distances.insert(v, candidate);
                result.predecessors.insert(v, u);
                heap.push(MinScored(candidate, v));
            }
        }
    }

    debug!(
        source = %source,
        reached = result.distances.len(),
        "dijkstra finished"
    );

    result
}

/// Finds the minimum-weight path from `source` to `target` by running
/// [`dijkstra`] and walking predecessor links backwards.
///
/// Reports `found = false` (with `Weight::infinity()` distance) when
/// either endpoint is absent or the target is unreachable.
pub fn find_path<W: Weight>(
    graph: &UndirectedGraph<W>,
    source: VertexId,
    target: VertexId,
) -> PathResult<W> {
    let mut result = PathResult {
        path: Vec::new(),
        distance: W::infinity(),
        found: false,
    };

    if !graph.has_vertex(source) || !graph.has_vertex(target) {
        return result;
    }

    let paths = dijkstra(graph, source);
    if paths.distance(target).is_infinite() {
        return result;
    }

    let mut current = Some(target);
    while let Some(v) = current {
        result.path.push(v);
        current = paths.predecessor(v);
    }
    result.path.reverse();

    result.distance = paths.distance(target);
    result.found = true;
    result
}

/// Unweighted hop-count shortest path via breadth-first search.
///
/// `distance` counts edges, not weights. Reports `found = false` when
/// either endpoint is absent or the target is unreachable. O(V + E).
pub fn bfs_path<W: Weight>(
    graph: &UndirectedGraph<W>,
    source: VertexId,
    target: VertexId,
) -> BfsPathResult {
    let mut result = BfsPathResult {
        path: Vec::new(),
        distance: 0,
        found: false,
    };

    if !graph.has_vertex(source) || !graph.has_vertex(target) {
        return result;
    }

    let mut visited: FxHashSet<VertexId> = FxHashSet::default();
    let mut parent: FxHashMap<VertexId, VertexId> = FxHashMap::default();
    let mut queue = VecDeque::new();

    queue.push_back(source);
    visited.insert(source);

    while let Some(u) = queue.pop_front() {
        if u == target {
            break;
        }

        for v in graph.neighbors(u) {
            if visited.insert(v) {
                parent.insert(v, u);
                queue.push_back(v);
            }
        }
    }

    if !visited.contains(&target) {
        return result;
    }

    let mut current = Some(target);
    while let Some(v) = current {
        result.path.push(v);
        current = parent.get(&v).copied();
    }
    result.path.reverse();

    result.distance = result.path.len() - 1;
    result.found = true;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    fn chain() -> UndirectedGraph<f64> {
        // 0 -1- 1 -2- 2 -3- 3
        let mut g = UndirectedGraph::new();
        for i in 0..4 {
            g.add_vertex(v(i));
        }
        g.add_edge(v(0), v(1), 1.0);
        g.add_edge(v(1), v(2), 2.0);
        g.add_edge(v(2), v(3), 3.0);
        g
    }

    #[test]
    fn test_dijkstra_distances() {
        let g = chain();
        let paths = dijkstra(&g, v(0));
        assert_eq!(paths.distance(v(0)), 0.0);
        assert_eq!(paths.distance(v(1)), 1.0);
        assert_eq!(paths.distance(v(2)), 3.0);
        assert_eq!(paths.distance(v(3)), 6.0);
    }

    #[test]
    fn test_dijkstra_prefers_cheaper_detour() {
        let mut g = chain();
        g.add_edge(v(0), v(2), 2.5);
        let paths = dijkstra(&g, v(0));
        assert_eq!(paths.distance(v(2)), 2.5);
        assert_eq!(paths.predecessor(v(2)), Some(v(0)));
    }

    #[test]
    fn test_dijkstra_missing_source() {
        let g = chain();
        let paths = dijkstra(&g, v(99));
        assert!(paths.distance(v(0)).is_infinite());
        assert!(paths.distances().is_empty());
    }

    #[test]
    fn test_find_path_orders_vertices() {
        let g = chain();
        let path = find_path(&g, v(0), v(3));
        assert!(path.found);
        assert_eq!(path.path, vec![v(0), v(1), v(2), v(3)]);
        assert_eq!(path.distance, 6.0);
    }

    #[test]
    fn test_find_path_unreachable() {
        let mut g = chain();
        g.add_vertex(v(10));
        let path = find_path(&g, v(0), v(10));
        assert!(!path.found);
        assert!(path.distance.is_infinite());
        assert!(path.path.is_empty());
    }

    #[test]
    fn test_find_path_missing_endpoint() {
        let g = chain();
        assert!(!find_path(&g, v(0), v(42)).found);
        assert!(!find_path(&g, v(42), v(0)).found);
    }

    #[test]
    fn test_bfs_counts_hops_not_weight() {
        let g = chain();
        let path = bfs_path(&g, v(0), v(3));
        assert!(path.found);
        assert_eq!(path.distance, 3);
        assert_eq!(path.path, vec![v(0), v(1), v(2), v(3)]);
    }

    #[test]
    fn test_bfs_source_equals_target() {
        let g = chain();
        let path = bfs_path(&g, v(2), v(2));
        assert!(path.found);
        assert_eq!(path.distance, 0);
        assert_eq!(path.path, vec![v(2)]);
    }

    #[test]
    fn test_bfs_unreachable() {
        let mut g = chain();
        g.add_vertex(v(10));
        assert!(!bfs_path(&g, v(0), v(10)).found);
    }
}
