//! The numeric edge-weight abstraction.

use std::fmt::Debug;
use std::ops::{Add, Sub};

/// An ordered, summable numeric type usable as an edge weight.
///
/// The trait pins down the two sentinel values the algorithms rely on:
/// [`zero`](Weight::zero) (the additive identity, also what
/// `UndirectedGraph::edge_weight` returns for a missing edge) and
/// [`infinity`](Weight::infinity) (the library-wide "unreachable"
/// marker). For floating-point types `infinity()` is the IEEE infinity;
/// for integer types it is the maximum representable value. Algorithms
/// never add anything to an infinite weight, so integer summation stays
/// well-defined.
pub trait Weight:
    Copy + PartialOrd + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The "unreachable" sentinel.
    fn infinity() -> Self;

    /// Whether this value is the unreachable sentinel.
    fn is_infinite(self) -> bool {
        self == Self::infinity()
    }

    /// Lossy conversion for averaging and display.
    fn to_f64(self) -> f64;
}

macro_rules! impl_weight_float {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0.0
                }

                fn infinity() -> Self {
                    <$t>::INFINITY
                }

                fn to_f64(self) -> f64 {
                    f64::from(self)
                }
            }
        )*
    };
}

macro_rules! impl_weight_int {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }

                fn infinity() -> Self {
                    <$t>::MAX
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_weight_float!(f32, f64);
impl_weight_int!(i32, i64, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_sentinels() {
        assert_eq!(f64::zero(), 0.0);
        assert!(f64::infinity().is_infinite());
        assert!(!1.5f64.is_infinite());
    }

    #[test]
    fn test_int_sentinels() {
        assert_eq!(u32::zero(), 0);
        assert_eq!(u32::infinity(), u32::MAX);
        assert!(u32::MAX.is_infinite());
        assert!(!7u32.is_infinite());
    }

    #[test]
    fn test_ordering_against_infinity() {
        assert!(1_000_000i64 < i64::infinity());
        assert!(1e300f64 < f64::infinity());
    }
}
