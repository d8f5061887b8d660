//! Graph generators for the benchmark driver.

use graphika_common::types::VertexId;
use graphika_core::UndirectedGraph;
use rand::prelude::*;

/// Random graph on `n` vertices. Each pair gets an edge with probability
/// `density`; weights fall in 1.0..=10.9.
pub fn random_graph(n: u64, density: f64, seed: u64) -> UndirectedGraph<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = UndirectedGraph::new();

    for i in 0..n {
        g.add_vertex_with_label(VertexId::new(i), format!("V{i}"));
    }

    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen::<f64>() < density {
                let weight = 1.0 + f64::from(rng.gen_range(0..100u32)) / 10.0;
                g.add_edge(VertexId::new(i), VertexId::new(j), weight);
            }
        }
    }

    g
}

/// Complete graph on `n` vertices with deterministic weights
/// `1 + (i + j) % 10`.
pub fn complete_graph(n: u64) -> UndirectedGraph<f64> {
    let mut g = UndirectedGraph::new();

    for i in 0..n {
        g.add_vertex(VertexId::new(i));
    }

    for i in 0..n {
        for j in (i + 1)..n {
            g.add_edge(VertexId::new(i), VertexId::new(j), (1 + (i + j) % 10) as f64);
        }
    }

    g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_graph_is_deterministic_per_seed() {
        let a = random_graph(20, 0.3, 7);
        let b = random_graph(20, 0.3, 7);
        assert_eq!(a.edge_count(), b.edge_count());

        let c = random_graph(20, 0.3, 8);
        // Different seeds almost surely differ; edge counts may tie, so
        // compare the edge sets.
        let edges = |g: &UndirectedGraph<f64>| {
            let mut e: Vec<_> = g
                .all_edges()
                .iter()
                .map(|edge| (edge.from, edge.to))
                .collect();
            e.sort_unstable();
            e
        };
        assert_eq!(edges(&a), edges(&b));
        assert_ne!(edges(&a), edges(&c));
    }

    #[test]
    fn test_complete_graph_edge_count() {
        let g = complete_graph(10);
        assert_eq!(g.vertex_count(), 10);
        assert_eq!(g.edge_count(), 45);
    }

    #[test]
    fn test_density_extremes() {
        assert_eq!(random_graph(10, 0.0, 1).edge_count(), 0);
        assert_eq!(random_graph(10, 1.1, 1).edge_count(), 45);
    }
}
