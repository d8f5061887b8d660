//! Disjoint-set structure with path compression and union by rank.

use graphika_common::types::VertexId;
use graphika_common::utils::hash::FxHashMap;

/// A disjoint-set forest over vertex ids.
///
/// Elements are registered lazily on first touch, so the structure works
/// for any id value without a pre-declared capacity. `find` is
/// amortized near-constant thanks to path compression; `union` keeps
/// trees shallow by rank.
#[derive(Debug, Default)]
pub struct UnionFind {
    parent: FxHashMap<VertexId, VertexId>,
    rank: FxHashMap<VertexId, u32>,
}

impl UnionFind {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the representative of the set containing `x`,
    /// registering `x` as a singleton if it was never seen.
    pub fn find(&mut self, x: VertexId) -> VertexId {
        if !self.parent.contains_key(&x) {
            self.parent.insert(x, x);
            return x;
        }

        // First pass: walk to the root.
        let mut root = x;
        while self.parent[&root] != root {
            root = self.parent[&root];
        }

        // Second pass: compress the path.
        let mut current = x;
        while current != root {
            let next = self.parent[&current];
            self.parent.insert(current, root);
            current = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `true` if the sets were separate, `false` if `x` and `y`
    /// were already connected.
    pub fn union(&mut self, x: VertexId, y: VertexId) -> bool {
        let px = self.find(x);
        let py = self.find(y);

        if px == py {
            return false;
        }

        let rx = self.rank.get(&px).copied().unwrap_or(0);
        let ry = self.rank.get(&py).copied().unwrap_or(0);

        match rx.cmp(&ry) {
            std::cmp::Ordering::Less => {
                self.parent.insert(px, py);
            }
            std::cmp::Ordering::Greater => {
                self.parent.insert(py, px);
            }
            std::cmp::Ordering::Equal => {
                self.parent.insert(py, px);
                self.rank.insert(px, rx + 1);
            }
        }

        true
    }

    /// Whether `x` and `y` are in the same set.
    pub fn connected(&mut self, x: VertexId, y: VertexId) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_singletons_are_own_roots() {
        let mut uf = UnionFind::new();
        assert_eq!(uf.find(v(3)), v(3));
        assert!(!uf.connected(v(1), v(2)));
    }

    #[test]
    fn test_union_merges() {
        let mut uf = UnionFind::new();
        assert!(uf.union(v(1), v(2)));
        assert!(uf.connected(v(1), v(2)));
        assert!(!uf.union(v(1), v(2)));
    }

    #[test]
    fn test_transitive_connectivity() {
        let mut uf = UnionFind::new();
        uf.union(v(1), v(2));
        uf.union(v(2), v(3));
        uf.union(v(10), v(11));

        assert!(uf.connected(v(1), v(3)));
        assert!(!uf.connected(v(3), v(10)));
    }

    #[test]
    fn test_large_sparse_ids() {
        let mut uf = UnionFind::new();
        assert!(uf.union(v(0), v(u64::MAX)));
        assert!(uf.connected(v(u64::MAX), v(0)));
    }
}
