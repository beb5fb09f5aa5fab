/*!
# Graph Representations

- [`Graph`]: a general undirected graph stored as adjacency arrays,
- [`Bigraph`]: a [`Graph`] that is guaranteed to be 2-colorable,
- [`Weighted`]: attaches edge weights to either of them, see [`WeightedGraph`] and
  [`WeightedBigraph`].

All representations are built once (typically via [`GraphFromScratch`]) and are not mutated
by the matching algorithms.
*/

use crate::{error::*, ops::*, *};

mod bigraph;
mod undirected;
mod weighted;

pub use bigraph::*;
pub use undirected::*;
pub use weighted::*;

pub(crate) mod macros {
    /// Implements the read-only graph traits of a wrapper type by forwarding them to the
    /// wrapped graph stored in field `$inner`.
    macro_rules! impl_forwarded_graph_ops {
        ([$($generics:tt)*] $struct:ty => $inner:ident) => {
            impl<$($generics)*> GraphNodeOrder for $struct {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$inner.number_of_nodes()
                }
            }

            impl<$($generics)*> GraphEdgeOrder for $struct {
                fn number_of_edges(&self) -> NumEdges {
                    self.$inner.number_of_edges()
                }
            }

            impl<$($generics)*> AdjacencyList for $struct {
                fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
                    self.$inner.neighbors_of(u)
                }

                fn degree_of(&self, u: Node) -> NumNodes {
                    self.$inner.degree_of(u)
                }
            }

            impl<$($generics)*> AdjacencyTest for $struct {
                fn has_edge(&self, u: Node, v: Node) -> bool {
                    self.$inner.has_edge(u, v)
                }
            }
        };
    }

    pub(super) use impl_forwarded_graph_ops;
}
