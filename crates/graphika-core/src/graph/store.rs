//! The undirected adjacency-list graph store.

use graphika_common::types::{VertexId, Weight};
use graphika_common::utils::hash::{FxHashSet, FxIndexMap};
use smallvec::SmallVec;

use super::{Edge, Vertex};

/// Adjacency entries for one vertex: `(neighbor, weight)` pairs.
type AdjacencyEntries<W> = SmallVec<[(VertexId, W); 4]>;

/// An in-memory weighted undirected graph.
///
/// Vertices are keyed by caller-assigned [`VertexId`]s; each undirected
/// edge is stored as two symmetric adjacency entries. Iteration over
/// vertices ([`vertices`](Self::vertices)) follows insertion order, and
/// every iteration-order-dependent algorithm in the suite inherits that
/// ordering, so results are reproducible across runs and platforms.
///
/// Invariants maintained by the mutation methods:
///
/// - symmetry: `(v, w)` is in `adj[u]` iff `(u, w)` is in `adj[v]`
/// - no self-loops
/// - at most one entry per neighbor; re-adding an edge updates its weight
/// - `edge_count` equals the number of distinct undirected edges
/// - vertex map and adjacency map always have the same key set
///
/// Operations on missing ids never panic; they degrade to no-ops or
/// empty/sentinel results.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph<W = f64> {
    /// Vertices in insertion order.
    vertices: FxIndexMap<VertexId, Vertex>,
    /// Adjacency lists, keyed identically to `vertices`.
    adj: FxIndexMap<VertexId, AdjacencyEntries<W>>,
    /// Number of distinct undirected edges.
    edge_count: usize,
}

impl<W: Weight> UndirectedGraph<W> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertices: FxIndexMap::default(),
            adj: FxIndexMap::default(),
            edge_count: 0,
        }
    }

    // === Mutation ===

    /// Adds an unlabeled vertex. No-op if the id is already present.
    pub fn add_vertex(&mut self, id: VertexId) {
        if self.vertices.contains_key(&id) {
            return;
        }
        self.vertices.insert(id, Vertex::new(id));
        self.adj.insert(id, AdjacencyEntries::new());
    }

    /// Adds a labeled vertex. No-op if the id is already present
    /// (first write wins, including the label).
    pub fn add_vertex_with_label(&mut self, id: VertexId, label: impl Into<String>) {
        if self.vertices.contains_key(&id) {
            return;
        }
        self.vertices.insert(id, Vertex::with_label(id, label));
        self.adj.insert(id, AdjacencyEntries::new());
    }

    /// Removes a vertex and every edge incident to it. No-op if absent.
    pub fn remove_vertex(&mut self, id: VertexId) {
        let Some(entries) = self.adj.shift_remove(&id) else {
            return;
        };

        for (neighbor, _) in entries {
            if let Some(list) = self.adj.get_mut(&neighbor) {
                list.retain(|(v, _)| *v != id);
            }
            self.edge_count -= 1;
        }

        self.vertices.shift_remove(&id);
    }

    /// Adds or updates the undirected edge `from -- to`.
    ///
    /// No-op if either endpoint is absent or `from == to`. Re-adding an
    /// existing edge updates the weight on both directions instead of
    /// duplicating the entry; the edge counter only moves on first
    /// insertion.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) {
        if from == to || !self.vertices.contains_key(&from) || !self.vertices.contains_key(&to) {
            return;
        }

        let existing = self
            .adj
            .get_mut(&from)
            .and_then(|list| list.iter_mut().find(|(v, _)| *v == to));
        if let Some((_, w)) = existing {
            *w = weight;
            if let Some((_, w)) = self
                .adj
                .get_mut(&to)
                .and_then(|list| list.iter_mut().find(|(v, _)| *v == from))
            {
                *w = weight;
            }
            return;
        }

        if let Some(list) = self.adj.get_mut(&from) {
            list.push((to, weight));
        }
        if let Some(list) = self.adj.get_mut(&to) {
            list.push((from, weight));
        }
        self.edge_count += 1;
    }

    /// Removes the undirected edge `from -- to` if present.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) {
        let mut removed = false;
        if let Some(list) = self.adj.get_mut(&from) {
            let before = list.len();
            list.retain(|(v, _)| *v != to);
            removed = list.len() < before;
        }
        if let Some(list) = self.adj.get_mut(&to) {
            list.retain(|(v, _)| *v != from);
        }
        if removed {
            self.edge_count -= 1;
        }
    }

    /// Removes every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.adj.clear();
        self.edge_count = 0;
    }

    /// Sets the color tag on a vertex. No-op if absent.
    pub fn set_color(&mut self, id: VertexId, color: u32) {
        if let Some(vertex) = self.vertices.get_mut(&id) {
            vertex.color = Some(color);
        }
    }

    /// Sets the layout coordinates on a vertex. No-op if absent.
    pub fn set_position(&mut self, id: VertexId, x: f64, y: f64) {
        if let Some(vertex) = self.vertices.get_mut(&id) {
            vertex.x = x;
            vertex.y = y;
        }
    }

    // === Queries ===

    /// Whether a vertex with this id exists.
    #[must_use]
    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Whether the undirected edge `from -- to` exists.
    #[must_use]
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.adj
            .get(&from)
            .is_some_and(|list| list.iter().any(|(v, _)| *v == to))
    }

    /// The weight of edge `from -- to`, or `W::zero()` if the edge is
    /// absent. Callers that need to distinguish a zero-weight edge from
    /// a missing one must check [`has_edge`](Self::has_edge) first.
    #[must_use]
    pub fn edge_weight(&self, from: VertexId, to: VertexId) -> W {
        self.adj
            .get(&from)
            .and_then(|list| list.iter().find(|(v, _)| *v == to))
            .map_or_else(W::zero, |(_, w)| *w)
    }

    /// The vertex record for an id.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Neighbor ids of a vertex, in adjacency insertion order.
    /// Empty if the vertex is absent.
    #[must_use]
    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.adj
            .get(&id)
            .map(|list| list.iter().map(|(v, _)| *v).collect())
            .unwrap_or_default()
    }

    /// The degree of a vertex, 0 if absent.
    #[must_use]
    pub fn degree(&self, id: VertexId) -> usize {
        self.adj.get(&id).map_or(0, SmallVec::len)
    }

    /// The `(neighbor, weight)` adjacency entries of a vertex, by
    /// reference. Empty if the vertex is absent. The slice is
    /// invalidated by any mutation of the graph.
    #[must_use]
    pub fn adjacency(&self, id: VertexId) -> &[(VertexId, W)] {
        self.adj.get(&id).map_or(&[], |list| list.as_slice())
    }

    /// All vertex ids, in insertion order.
    #[must_use]
    pub fn vertices(&self) -> Vec<VertexId> {
        self.vertices.keys().copied().collect()
    }

    /// All distinct undirected edges, exactly one entry per pair, with
    /// arbitrary orientation. Ordering follows the adjacency map, so it
    /// is stable for a fixed graph but not across unrelated mutations.
    #[must_use]
    pub fn all_edges(&self) -> Vec<Edge<W>> {
        let mut seen: FxHashSet<(VertexId, VertexId)> = FxHashSet::default();
        let mut result = Vec::with_capacity(self.edge_count);

        for (&from, list) in &self.adj {
            for &(to, weight) in list {
                let key = if from < to { (from, to) } else { (to, from) };
                if seen.insert(key) {
                    result.push(Edge::new(from, to, weight));
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_add_vertex() {
        let mut g: UndirectedGraph = UndirectedGraph::new();
        g.add_vertex_with_label(v(0), "A");
        assert!(g.has_vertex(v(0)));
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.vertex(v(0)).unwrap().label.as_deref(), Some("A"));
    }

    #[test]
    fn test_duplicate_vertex_first_write_wins() {
        let mut g: UndirectedGraph = UndirectedGraph::new();
        g.add_vertex_with_label(v(0), "A");
        g.add_vertex_with_label(v(0), "B");
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.vertex(v(0)).unwrap().label.as_deref(), Some("A"));
    }

    #[test]
    fn test_add_edge_symmetric() {
        let mut g: UndirectedGraph = UndirectedGraph::new();
        g.add_vertex(v(0));
        g.add_vertex(v(1));
        g.add_edge(v(0), v(1), 5.0);

        assert!(g.has_edge(v(0), v(1)));
        assert!(g.has_edge(v(1), v(0)));
        assert_eq!(g.edge_weight(v(0), v(1)), 5.0);
        assert_eq!(g.edge_weight(v(1), v(0)), 5.0);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_readd_edge_updates_weight_both_directions() {
        let mut g: UndirectedGraph = UndirectedGraph::new();
        g.add_vertex(v(0));
        g.add_vertex(v(1));
        g.add_edge(v(0), v(1), 5.0);
        g.add_edge(v(1), v(0), 10.0);

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edge_weight(v(0), v(1)), 10.0);
        assert_eq!(g.edge_weight(v(1), v(0)), 10.0);
    }

    #[test]
    fn test_no_self_loops() {
        let mut g: UndirectedGraph = UndirectedGraph::new();
        g.add_vertex(v(0));
        g.add_edge(v(0), v(0), 1.0);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.has_edge(v(0), v(0)));
    }

    #[test]
    fn test_edge_to_missing_vertex_is_noop() {
        let mut g: UndirectedGraph = UndirectedGraph::new();
        g.add_vertex(v(0));
        g.add_edge(v(0), v(9), 1.0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_remove_edge() {
        let mut g: UndirectedGraph = UndirectedGraph::new();
        for i in 0..3 {
            g.add_vertex(v(i));
        }
        g.add_edge(v(0), v(1), 1.0);
        g.add_edge(v(1), v(2), 2.0);
        g.remove_edge(v(0), v(1));

        assert!(!g.has_edge(v(0), v(1)));
        assert!(!g.has_edge(v(1), v(0)));
        assert!(g.has_edge(v(1), v(2)));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_remove_vertex_cascades_edges() {
        let mut g: UndirectedGraph = UndirectedGraph::new();
        for i in 0..3 {
            g.add_vertex(v(i));
        }
        g.add_edge(v(0), v(1), 1.0);
        g.add_edge(v(1), v(2), 2.0);
        g.add_edge(v(0), v(2), 3.0);
        g.remove_vertex(v(1));

        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(!g.has_edge(v(0), v(1)));
        assert!(!g.has_edge(v(1), v(2)));
        assert!(g.has_edge(v(0), v(2)));
    }

    #[test]
    fn test_remove_missing_vertex_is_noop() {
        let mut g: UndirectedGraph = UndirectedGraph::new();
        g.add_vertex(v(0));
        g.remove_vertex(v(7));
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn test_missing_edge_weight_is_zero() {
        let g: UndirectedGraph<i64> = UndirectedGraph::new();
        assert_eq!(g.edge_weight(v(0), v(1)), 0);
    }

    #[test]
    fn test_vertices_insertion_order() {
        let mut g: UndirectedGraph = UndirectedGraph::new();
        for id in [5, 2, 9, 0] {
            g.add_vertex(v(id));
        }
        assert_eq!(g.vertices(), vec![v(5), v(2), v(9), v(0)]);
    }

    #[test]
    fn test_all_edges_deduplicated() {
        let mut g: UndirectedGraph = UndirectedGraph::new();
        for i in 0..3 {
            g.add_vertex(v(i));
        }
        g.add_edge(v(0), v(1), 1.0);
        g.add_edge(v(1), v(2), 2.0);

        let edges = g.all_edges();
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_adjacency_of_missing_vertex_is_empty() {
        let g: UndirectedGraph = UndirectedGraph::new();
        assert!(g.adjacency(v(3)).is_empty());
        assert!(g.neighbors(v(3)).is_empty());
    }

    #[test]
    fn test_clear() {
        let mut g: UndirectedGraph = UndirectedGraph::new();
        g.add_vertex(v(0));
        g.add_vertex(v(1));
        g.add_edge(v(0), v(1), 1.0);
        g.clear();
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.vertices().is_empty());
        assert!(g.all_edges().is_empty());
    }
}
