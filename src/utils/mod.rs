/*!
# Utilities

- abstractions over [`Set`]s of nodes used for visited markers and bipartitions,
- [`FromCapacity`] to let algorithms allocate the set type chosen by the caller,
- [`VertexLabels`] to build graphs from edges between arbitrary labels and to translate
  matchings back to these labels.
*/

use std::{collections::HashSet, hash::RandomState};

use fxhash::{FxBuildHasher, FxHashSet};
use stream_bitset::{PrimIndex, bitset::BitSetImpl};

pub mod labels;
pub mod set;

pub use labels::*;
pub use set::Set;

/// Helper trait for datastructures that can be initialized with capacity.
///
/// `total` is the largest element plus one, `used` the number of elements expected to be
/// stored. Dense sets size themselves by the former, hash sets by the latter.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value for example) and the actual
    /// capacity that will be used (space-wise).
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl<I> FromCapacity for BitSetImpl<I>
where
    I: PrimIndex,
{
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // callers pass the number of nodes, which always fits into the index type
        Self::new(I::from_usize(total).unwrap())
    }
}

impl<T> FromCapacity for HashSet<T, RandomState> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity(used)
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity_and_hasher(used, FxBuildHasher::default())
    }
}
