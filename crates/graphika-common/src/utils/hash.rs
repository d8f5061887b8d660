//! Hash map and set type aliases.
//!
//! The algorithm suite builds per-call scratch tables (distances,
//! predecessors, visited sets) keyed by `VertexId`. These aliases pin a
//! fast non-cryptographic hasher for all of them.

/// A fast hash map keyed with ahash.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// A fast hash set keyed with ahash.
pub type FxHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;

/// A hash map that iterates in insertion order.
///
/// The graph store uses this for its vertex and adjacency maps so that
/// every iteration-order-dependent algorithm sees one documented,
/// reproducible ordering.
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, ahash::RandomState>;
