//! Facility location: greedy dominating set and k-centers.

use std::collections::{BTreeSet, VecDeque};

use graphika_common::types::{VertexId, Weight};
use graphika_common::utils::hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::debug;

use crate::graph::UndirectedGraph;

/// Chosen centers and the per-vertex assignment to them.
#[derive(Debug, Clone, Serialize)]
pub struct FacilityResult<W> {
    /// The chosen center vertices, in selection order.
    pub centers: Vec<VertexId>,
    /// Nearest chosen center per vertex (ties go to the
    /// earliest-selected center).
    pub assignment: FxHashMap<VertexId, VertexId>,
    /// Largest assignment distance; `Weight::infinity()` if some vertex
    /// cannot reach any center.
    pub max_distance: W,
    /// Mean assignment distance.
    pub mean_distance: f64,
    /// False when the instance was invalid (empty graph, `k` out of
    /// range).
    pub is_valid: bool,
}

impl<W: Weight> FacilityResult<W> {
    fn invalid() -> Self {
        Self {
            centers: Vec::new(),
            assignment: FxHashMap::default(),
            max_distance: W::zero(),
            mean_distance: 0.0,
            is_valid: false,
        }
    }
}

/// Accumulated-weight distance between two vertices, traversed in BFS
/// order: each vertex gets its distance fixed at first visit. Cheap and
/// good enough for center spreading; it equals true shortest-path
/// distance on unit weights but only approximates it on general ones.
fn bfs_weighted_distance<W: Weight>(graph: &UndirectedGraph<W>, from: VertexId, to: VertexId) -> W {
    if from == to {
        return W::zero();
    }

    let mut visited: FxHashSet<VertexId> = FxHashSet::default();
    let mut dist: FxHashMap<VertexId, W> = FxHashMap::default();
    let mut queue = VecDeque::new();

    visited.insert(from);
    dist.insert(from, W::zero());
    queue.push_back(from);

    while let Some(u) = queue.pop_front() {
        if u == to {
            return dist[&u];
        }

        for &(v, weight) in graph.adjacency(u) {
            if visited.insert(v) {
                dist.insert(v, dist[&u] + weight);
                queue.push_back(v);
            }
        }
    }

    W::infinity()
}

/// Assigns every vertex to its nearest center and fills the distance
/// aggregates. The mean accumulates in `f64` so an unreachable vertex
/// (infinite distance) cannot overflow integer weights.
fn assign_to_nearest<W: Weight>(graph: &UndirectedGraph<W>, result: &mut FacilityResult<W>) {
    let vertices = graph.vertices();
    let mut total = 0.0;

    for &v in &vertices {
        let mut nearest = result.centers[0];
        let mut min_dist = bfs_weighted_distance(graph, v, nearest);

        for &center in &result.centers[1..] {
            let d = bfs_weighted_distance(graph, v, center);
            if d < min_dist {
                min_dist = d;
                nearest = center;
            }
        }

        result.assignment.insert(v, nearest);
        if min_dist > result.max_distance {
            result.max_distance = min_dist;
        }
        total += min_dist.to_f64();
    }

    if !vertices.is_empty() {
        result.mean_distance = total / vertices.len() as f64;
    }
    result.is_valid = true;
}

/// Greedy dominating-set cover. O(V² + E).
///
/// Repeatedly selects, among the still-uncovered vertices (scanned in
/// ascending id order), the one whose closed neighborhood covers the
/// most uncovered vertices, then marks it and its neighbors covered.
/// The produced set is greedy-approximate, not minimum.
pub fn dominating_set_greedy<W: Weight>(graph: &UndirectedGraph<W>) -> FacilityResult<W> {
    let mut result = FacilityResult::invalid();

    if graph.vertex_count() == 0 {
        return result;
    }

    let mut uncovered: BTreeSet<VertexId> = graph.vertices().into_iter().collect();

    while !uncovered.is_empty() {
        let mut best = None;
        let mut best_score = 0usize;

        for &v in &uncovered {
            let score = 1 + graph
                .neighbors(v)
                .iter()
                .filter(|n| uncovered.contains(n))
                .count();
            if score > best_score {
                best_score = score;
                best = Some(v);
            }
        }

        let Some(chosen) = best else { break };
        result.centers.push(chosen);

        uncovered.remove(&chosen);
        for neighbor in graph.neighbors(chosen) {
            uncovered.remove(&neighbor);
        }
    }

    debug!(centers = result.centers.len(), "dominating set finished");

    assign_to_nearest(graph, &mut result);
    result
}

/// Greedy k-centers (farthest-point heuristic).
///
/// Seeds with the first vertex in insertion order, then `k - 1` times
/// adds the vertex maximizing its minimum distance to the centers chosen
/// so far. Returns an invalid result when `k <= 0`, `k` exceeds the
/// vertex count, or the graph is empty.
pub fn k_centers<W: Weight>(graph: &UndirectedGraph<W>, k: usize) -> FacilityResult<W> {
    let mut result = FacilityResult::invalid();

    let vertices = graph.vertices();
    if vertices.is_empty() || k == 0 || k > vertices.len() {
        return result;
    }

    result.centers.push(vertices[0]);

    for _ in 1..k {
        let mut farthest = None;
        let mut best_spread: Option<W> = None;

        for &v in &vertices {
            if result.centers.contains(&v) {
                continue;
            }

            let mut min_dist = W::infinity();
            for &center in &result.centers {
                let d = bfs_weighted_distance(graph, v, center);
                if d < min_dist {
                    min_dist = d;
                }
            }

            if best_spread.is_none_or(|spread| min_dist > spread) {
                best_spread = Some(min_dist);
                farthest = Some(v);
            }
        }

        if let Some(chosen) = farthest {
            result.centers.push(chosen);
        }
    }

    debug!(k, centers = result.centers.len(), "k-centers finished");

    assign_to_nearest(graph, &mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    fn star_plus_leaf() -> UndirectedGraph<f64> {
        // 0 is the hub of 1..=3; 4 hangs off 3.
        let mut g = UndirectedGraph::new();
        for i in 0..5 {
            g.add_vertex(v(i));
        }
        g.add_edge(v(0), v(1), 1.0);
        g.add_edge(v(0), v(2), 1.0);
        g.add_edge(v(0), v(3), 1.0);
        g.add_edge(v(3), v(4), 1.0);
        g
    }

    #[test]
    fn test_dominating_set_covers_everything() {
        let g = star_plus_leaf();
        let result = dominating_set_greedy(&g);
        assert!(result.is_valid);
        // Hub covers {0,1,2,3}; 4 still needs a center.
        assert_eq!(result.centers[0], v(0));
        assert!(result.centers.len() >= 2);

        for vertex in g.vertices() {
            let center = result.assignment[&vertex];
            assert!(result.centers.contains(&center));
        }
    }

    #[test]
    fn test_dominating_set_distance_aggregates() {
        let g = star_plus_leaf();
        let result = dominating_set_greedy(&g);
        assert!(!result.max_distance.is_infinite());
        assert!(result.mean_distance <= result.max_distance.to_f64());
    }

    #[test]
    fn test_k_centers_seeds_first_vertex() {
        let g = star_plus_leaf();
        let result = k_centers(&g, 2);
        assert!(result.is_valid);
        assert_eq!(result.centers.len(), 2);
        assert_eq!(result.centers[0], v(0));
        // Farthest from the hub is the leaf behind 3.
        assert_eq!(result.centers[1], v(4));
    }

    #[test]
    fn test_k_centers_invalid_k() {
        let g = star_plus_leaf();
        assert!(!k_centers(&g, 0).is_valid);
        assert!(!k_centers(&g, 6).is_valid);
    }

    #[test]
    fn test_k_centers_empty_graph() {
        let g: UndirectedGraph<f64> = UndirectedGraph::new();
        assert!(!k_centers(&g, 1).is_valid);
        assert!(!dominating_set_greedy(&g).is_valid);
    }

    #[test]
    fn test_k_equals_vertex_count() {
        let g = star_plus_leaf();
        let result = k_centers(&g, 5);
        assert!(result.is_valid);
        assert_eq!(result.centers.len(), 5);
        assert_eq!(result.max_distance, 0.0);
        assert_eq!(result.mean_distance, 0.0);
    }

    #[test]
    fn test_unreachable_vertex_reports_infinite_max() {
        let mut g = star_plus_leaf();
        g.add_vertex(v(9)); // isolated
        let result = k_centers(&g, 1);
        assert!(result.is_valid);
        assert!(result.max_distance.is_infinite());
    }

    #[test]
    fn test_assignment_tie_breaks_to_earlier_center() {
        // 0 -1- 1 -1- 2: with centers {0, 2}, vertex 1 ties and goes to 0.
        let mut g: UndirectedGraph<f64> = UndirectedGraph::new();
        for i in 0..3 {
            g.add_vertex(v(i));
        }
        g.add_edge(v(0), v(1), 1.0);
        g.add_edge(v(1), v(2), 1.0);

        let result = k_centers(&g, 2);
        assert_eq!(result.centers, vec![v(0), v(2)]);
        assert_eq!(result.assignment[&v(1)], v(0));
    }
}
