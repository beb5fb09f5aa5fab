/*!
# Node Representation

We choose `Node = u32` as matching instances practically never exceed `2^32` vertices.
Vertices of a graph with `n` nodes are always the consecutive integers `0..n`.
*/

use std::num::NonZero;

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Dense set of nodes `0..n`, used for visited markers and bipartitions
pub type NodeBitSet = BitSetImpl<Node>;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need to use `Vec<Option<Node>>` (mate arrays for example).
/// This instead uses the `NonZero`-Wrapper to assign a constant value as the niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}
