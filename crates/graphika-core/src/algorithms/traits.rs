//! Shared pieces for the algorithm implementations.

use std::cmp::Ordering;

/// A score/value pair ordered by score, with the ordering reversed so a
/// `BinaryHeap<MinScored<..>>` pops the minimum score first.
///
/// Scores only need `PartialOrd` (edge weights may be floats); an
/// incomparable score (NaN) sorts as greater than everything so it never
/// wins extraction.
#[derive(Copy, Clone, Debug)]
pub struct MinScored<K, T>(pub K, pub T);

impl<K: PartialOrd, T> PartialEq for MinScored<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: PartialOrd, T> Eq for MinScored<K, T> {}

impl<K: PartialOrd, T> PartialOrd for MinScored<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd, T> Ord for MinScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = &self.0;
        let b = &other.0;
        if a == b {
            Ordering::Equal
        } else if a < b {
            Ordering::Greater
        } else if a > b {
            Ordering::Less
        } else if a != a && b != b {
            // Both NaN: treat as equal
            Ordering::Equal
        } else if a != a {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}
