/*!
# Node Sets

[`Set<T>`] abstracts over the set types the algorithms of this crate use for visited markers
and bipartitions: dense [`NodeBitSet`]s for per-vertex flags and hash sets for sparse
candidates supplied by a caller.
*/

use std::{
    collections::{HashSet, hash_set::Iter},
    hash::{BuildHasher, Hash},
    iter::Cloned,
};

use num::ToPrimitive;
use stream_bitset::{
    PrimIndex,
    bitset::BitSetImpl,
    prelude::{BitmaskSliceStream, BitmaskStreamConsumer, BitmaskStreamToIndices, ToBitmaskStream},
};

/// Minimalist trait for a set-like collection.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Iterator over elements in set.
    type SetIter<'a>: Iterator<Item = T>
    where
        Self: 'a,
        T: Clone;

    /// Returns an iterator over all elements in the set
    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone;

    /// Returns `true` if the set contains `value`
    fn contains(&self, value: &T) -> bool;

    /// Clears all elements from the set
    fn clear(&mut self);

    /// Returns the number of elements in the set
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        !HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    type SetIter<'a>
        = Cloned<Iter<'a, T>>
    where
        Self: 'a,
        T: Clone;

    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone,
    {
        HashSet::iter(self).cloned()
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<I> Set<I> for BitSetImpl<I>
where
    I: PrimIndex,
{
    fn insert(&mut self, value: I) -> bool {
        self.set_bit(value)
    }

    fn remove(&mut self, value: &I) -> bool {
        self.clear_bit(*value)
    }

    type SetIter<'a>
        = BitmaskStreamToIndices<BitmaskSliceStream<'a>, I, true>
    where
        Self: 'a,
        I: Clone;

    fn iter(&self) -> Self::SetIter<'_> {
        self.bitmask_stream().iter_set_bits()
    }

    fn contains(&self, value: &I) -> bool {
        self.get_bit(*value)
    }

    fn clear(&mut self) {
        self.clear_all();
    }

    fn len(&self) -> usize {
        self.cardinality().to_usize().unwrap()
    }
}
