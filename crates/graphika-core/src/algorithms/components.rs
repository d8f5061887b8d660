//! Connected-component labeling via DFS and BFS.

use std::collections::VecDeque;

use graphika_common::types::VertexId;
use graphika_common::utils::hash::FxHashMap;
use graphika_common::Weight;
use serde::Serialize;

use crate::graph::UndirectedGraph;

/// Connected components of an undirected graph.
///
/// DFS and BFS labeling always agree on membership and component count
/// for a fixed graph; only the discovery order inside a component may
/// differ.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentsResult {
    /// Each component's vertices, ordered by discovery.
    pub components: Vec<Vec<VertexId>>,
    /// Number of components.
    pub component_count: usize,
    /// Component index per vertex.
    pub component_id: FxHashMap<VertexId, usize>,
}

impl ComponentsResult {
    fn new() -> Self {
        Self {
            components: Vec::new(),
            component_count: 0,
            component_id: FxHashMap::default(),
        }
    }
}

/// Labels components with an iterative depth-first traversal. O(V + E).
///
/// Unvisited vertices are taken in insertion order; a new component
/// starts whenever an unlabeled vertex is found. Neighbors are pushed in
/// reverse adjacency order so the discovery order matches a recursive
/// DFS, without the unbounded call stack.
pub fn dfs_components<W: Weight>(graph: &UndirectedGraph<W>) -> ComponentsResult {
    let mut result = ComponentsResult::new();
    let mut stack = Vec::new();

    for root in graph.vertices() {
        if result.component_id.contains_key(&root) {
            continue;
        }

        let comp_id = result.component_count;
        let mut component = Vec::new();

        stack.push(root);
        while let Some(u) = stack.pop() {
            if result.component_id.contains_key(&u) {
                continue;
            }
            result.component_id.insert(u, comp_id);
            component.push(u);

            for &(v, _) in graph.adjacency(u).iter().rev() {
                if !result.component_id.contains_key(&v) {
                    stack.push(v);
                }
            }
        }

        result.components.push(component);
        result.component_count += 1;
    }

    result
}

/// Labels components with a breadth-first traversal. O(V + E).
///
/// Same contract as [`dfs_components`]; only the discovery order within
/// a component differs.
pub fn bfs_components<W: Weight>(graph: &UndirectedGraph<W>) -> ComponentsResult {
    let mut result = ComponentsResult::new();
    let mut queue = VecDeque::new();

    for root in graph.vertices() {
        if result.component_id.contains_key(&root) {
            continue;
        }

        let comp_id = result.component_count;
        let mut component = Vec::new();

        result.component_id.insert(root, comp_id);
        queue.push_back(root);

        while let Some(u) = queue.pop_front() {
            component.push(u);

            for v in graph.neighbors(u) {
                if !result.component_id.contains_key(&v) {
                    result.component_id.insert(v, comp_id);
                    queue.push_back(v);
                }
            }
        }

        result.components.push(component);
        result.component_count += 1;
    }

    result
}

/// Whether the graph has at most one component. An empty graph counts
/// as connected.
pub fn is_connected<W: Weight>(graph: &UndirectedGraph<W>) -> bool {
    dfs_components(graph).component_count <= 1
}

/// Size of the largest component, 0 for an empty graph.
pub fn largest_component_size<W: Weight>(graph: &UndirectedGraph<W>) -> usize {
    dfs_components(graph)
        .components
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
}
