//! Greedy vertex coloring.

use graphika_common::types::{VertexId, Weight};
use graphika_common::utils::hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::graph::UndirectedGraph;

/// A vertex coloring.
#[derive(Debug, Clone, Serialize)]
pub struct ColoringResult {
    /// Color index per vertex.
    pub colors: FxHashMap<VertexId, u32>,
    /// Upper-bound estimate: one more than the largest color used.
    pub chromatic_number: u32,
    /// Whether [`validate_coloring`] accepted the assignment.
    pub is_valid: bool,
}

/// Assigns `vertex` the smallest color not used by an already-colored
/// neighbor.
fn smallest_free_color<W: Weight>(
    graph: &UndirectedGraph<W>,
    colors: &FxHashMap<VertexId, u32>,
    vertex: VertexId,
) -> u32 {
    let taken: FxHashSet<u32> = graph
        .neighbors(vertex)
        .into_iter()
        .filter_map(|n| colors.get(&n).copied())
        .collect();

    (0..).find(|c| !taken.contains(c)).unwrap_or(0)
}

fn color_in_order<W: Weight>(graph: &UndirectedGraph<W>, order: &[VertexId]) -> ColoringResult {
    let mut colors: FxHashMap<VertexId, u32> = FxHashMap::default();

    for &vertex in order {
        let color = smallest_free_color(graph, &colors, vertex);
        colors.insert(vertex, color);
    }

    let chromatic_number = colors.values().max().map_or(0, |max| max + 1);

    let mut result = ColoringResult {
        colors,
        chromatic_number,
        is_valid: false,
    };
    result.is_valid = validate_coloring(graph, &result);
    result
}

/// Greedy coloring over vertices in insertion order. O(V² + E).
///
/// A polynomial heuristic with no optimality guarantee; the result is
/// validated before being returned.
pub fn greedy_coloring<W: Weight>(graph: &UndirectedGraph<W>) -> ColoringResult {
    color_in_order(graph, &graph.vertices())
}

/// Welsh-Powell coloring: the same greedy rule, over vertices pre-sorted
/// descending by degree. Degree ties keep insertion order (stable sort).
/// Often uses fewer colors than plain greedy. O(V log V + V² + E).
pub fn welsh_powell_coloring<W: Weight>(graph: &UndirectedGraph<W>) -> ColoringResult {
    let mut order = graph.vertices();
    order.sort_by(|a, b| graph.degree(*b).cmp(&graph.degree(*a)));
    color_in_order(graph, &order)
}

/// Checks that the coloring is complete and proper: every vertex has a
/// color and no edge connects two same-colored vertices.
pub fn validate_coloring<W: Weight>(graph: &UndirectedGraph<W>, result: &ColoringResult) -> bool {
    for vertex in graph.vertices() {
        let Some(color) = result.colors.get(&vertex) else {
            return false;
        };
        for neighbor in graph.neighbors(vertex) {
            if result.colors.get(&neighbor) == Some(color) {
                return false;
            }
        }
    }
    true
}
