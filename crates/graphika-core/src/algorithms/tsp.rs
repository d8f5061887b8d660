//! Traveling-salesman tours: exact brute force, nearest-neighbor
//! heuristic, 2-opt local search, and the hybrid pipeline.

use graphika_common::types::{VertexId, Weight};
use graphika_common::utils::hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

use crate::graph::UndirectedGraph;

/// A closed tour and how it was obtained.
#[derive(Debug, Clone, Serialize)]
pub struct TspResult<W> {
    /// Vertex sequence, starting and ending at the start vertex.
    /// Empty when the instance was invalid.
    pub tour: Vec<VertexId>,
    /// Total tour distance; `Weight::infinity()` when no tour using the
    /// existing edges exists.
    pub total_distance: W,
    /// Candidate tours / improvement steps examined.
    pub iterations: u64,
    /// Whether the result is provably optimal (brute force only).
    pub is_optimal: bool,
}

impl<W: Weight> TspResult<W> {
    fn invalid(is_optimal: bool) -> Self {
        Self {
            tour: Vec::new(),
            total_distance: W::infinity(),
            iterations: 0,
            is_optimal,
        }
    }
}

/// Advances `items` to its next lexicographic permutation, returning
/// `false` once the ordering wraps around.
fn next_permutation(items: &mut [VertexId]) -> bool {
    if items.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix.
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    // Rightmost element exceeding the pivot.
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }

    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

/// Scores one candidate ordering; `None` when an edge is missing.
fn tour_distance<W: Weight>(
    graph: &UndirectedGraph<W>,
    start: VertexId,
    order: &[VertexId],
) -> Option<W> {
    let mut distance = W::zero();
    let mut current = start;

    for &next in order {
        if !graph.has_edge(current, next) {
            return None;
        }
        distance = distance + graph.edge_weight(current, next);
        current = next;
    }

    if !graph.has_edge(current, start) {
        return None;
    }
    Some(distance + graph.edge_weight(current, start))
}

/// Exhaustive search over all permutations of the non-start vertices.
/// O(n!) — only usable for small vertex counts (≤ ~12).
///
/// Permutations missing a required edge score as infinite and are
/// discarded. Guarantees the optimal tour whenever one exists under the
/// current edge set; reports an infinite distance when none does, and an
/// empty tour when `start` is absent or the graph is empty.
pub fn brute_force<W: Weight>(graph: &UndirectedGraph<W>, start: VertexId) -> TspResult<W> {
    let mut result = TspResult::invalid(true);

    if graph.vertex_count() == 0 || !graph.has_vertex(start) {
        return result;
    }

    let mut rest: Vec<VertexId> = graph.vertices().into_iter().filter(|&v| v != start).collect();
    rest.sort_unstable();

    let mut best_order: Vec<VertexId> = Vec::new();
    let mut best_distance = W::infinity();

    loop {
        result.iterations += 1;

        if let Some(distance) = tour_distance(graph, start, &rest) {
            if distance < best_distance {
                best_distance = distance;
                best_order = rest.clone();
            }
        }

        if !next_permutation(&mut rest) {
            break;
        }
    }

    debug!(
        iterations = result.iterations,
        feasible = !best_distance.is_infinite(),
        "brute force finished"
    );

    result.tour.push(start);
    result.tour.extend(best_order);
    result.tour.push(start);
    result.total_distance = best_distance;
    result
}

/// Nearest-neighbor heuristic: repeatedly takes the cheapest edge to an
/// unvisited vertex. Not optimal; O(V²).
///
/// If at some point no edge leads to an unvisited vertex, or no edge
/// closes the tour back to `start`, the distance is set to
/// `Weight::infinity()` and the partial tour is returned as-is.
pub fn nearest_neighbor<W: Weight>(graph: &UndirectedGraph<W>, start: VertexId) -> TspResult<W> {
    let mut result = TspResult::invalid(false);

    if !graph.has_vertex(start) {
        return result;
    }

    let vertices = graph.vertices();
    let mut visited: FxHashSet<VertexId> = FxHashSet::default();

    result.total_distance = W::zero();
    result.tour.push(start);
    visited.insert(start);

    let mut current = start;
    let mut remaining = graph.vertex_count() - 1;

    while remaining > 0 {
        result.iterations += 1;

        let mut nearest = None;
        let mut min_weight = W::infinity();

        for &v in &vertices {
            if visited.contains(&v) || !graph.has_edge(current, v) {
                continue;
            }
            let w = graph.edge_weight(current, v);
            if w < min_weight {
                min_weight = w;
                nearest = Some(v);
            }
        }

        let Some(next) = nearest else {
            // Stranded: no edge into the unvisited remainder.
            result.total_distance = W::infinity();
            return result;
        };

        result.tour.push(next);
        visited.insert(next);
        result.total_distance = result.total_distance + min_weight;
        current = next;
        remaining -= 1;
    }

    if graph.has_edge(current, start) {
        result.total_distance = result.total_distance + graph.edge_weight(current, start);
        result.tour.push(start);
    } else {
        result.total_distance = W::infinity();
    }

    result
}

/// 2-opt local search: keeps reversing tour segments while doing so
/// strictly shortens the tour; stops at a local optimum.
///
/// The incoming tour must only reference existing edges; behavior on
/// incomplete graphs is degenerate (missing edges weigh zero). An input
/// with fewer than four stops or an already-infinite distance is
/// returned unchanged.
pub fn two_opt<W: Weight>(graph: &UndirectedGraph<W>, initial: TspResult<W>) -> TspResult<W> {
    let mut result = initial;

    if result.tour.len() < 4 || result.total_distance.is_infinite() {
        return result;
    }

    let mut improved = true;
    while improved {
        improved = false;

        for i in 1..result.tour.len() - 2 {
            for j in i + 1..result.tour.len() - 1 {
                result.iterations += 1;

                let a = result.tour[i - 1];
                let b = result.tour[i];
                let c = result.tour[j];
                let d = result.tour[j + 1];

                let removed = graph.edge_weight(a, b) + graph.edge_weight(c, d);
                let added = graph.edge_weight(a, c) + graph.edge_weight(b, d);

                if added < removed {
                    result.tour[i..=j].reverse();
                    result.total_distance = result.total_distance - (removed - added);
                    improved = true;
                }
            }
        }
    }

    result
}

/// Nearest-neighbor construction followed by 2-opt improvement.
pub fn hybrid_solver<W: Weight>(graph: &UndirectedGraph<W>, start: VertexId) -> TspResult<W> {
    let initial = nearest_neighbor(graph, start);
    two_opt(graph, initial)
}
