/*!
`graph-matching` computes **maximum cardinality** and **maximum weighted** matchings in
undirected graphs, both bipartite and general.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Vertices are always consecutive integers starting at `0`; constructors reject other numberings.
Graphs over arbitrary vertex labels are relabeled with
[`GraphFromLabeledEdges`](crate::utils::GraphFromLabeledEdges).
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

See the [`repr`] module for the available graph types:

- [`Graph`](crate::repr::Graph): a general undirected graph
- [`Bigraph`](crate::repr::Bigraph): a graph verified to be bipartite
- [`WeightedGraph`](crate::repr::WeightedGraph) / [`WeightedBigraph`](crate::repr::WeightedBigraph):
  the former with a weight on every edge

# Algorithms

| Problem | Bipartite graphs | General graphs |
|---------|------------------|----------------|
| maximum cardinality | [`BipartiteMatching`](crate::algo::BipartiteMatching) (alternating BFS) | [`GabowMatching`](crate::algo::GabowMatching) (Gabow 1976) |
| maximum weight | [`BipartiteWeightedMatching`](crate::algo::BipartiteWeightedMatching) (primal-dual) | [`BlossomMatching`](crate::algo::BlossomMatching) (Edmonds / Galil / Van Rantwijk) |

All algorithms are provided as configurable structs that one can alter using the *Builder*
pattern before running them on a graph. The common cases are also available as traits on the
graph types themselves:

```
use graph_matching::{prelude::*, algo::*};

let graph = WeightedGraph::try_from_weighted_edges(
    [(0, 1, 9), (0, 2, 8), (1, 2, 10), (0, 3, 5), (3, 4, 4), (0, 5, 3)],
).unwrap();

let matching = graph.maximum_weighted_matching(false).unwrap();
assert_eq!(matching.edges(), vec![Edge(0, 5), Edge(1, 2), Edge(3, 4)]);
assert_eq!(matching.weight(&graph), Ok(17));
```

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, matchings, graph operations and
  all graph representations,
- [`algo`] includes the matching algorithms and the traversal/bipartiteness helpers they
  build upon,
- [`gens`] includes random graph generators and deterministic substructures,
- [`io`] writes graphs (and matchings) in the Dot-Format of GraphViz,
- [`utils`] includes node sets and [`VertexLabels`](crate::utils::VertexLabels), which builds
  graphs from edges between arbitrary labels and translates matchings back to them.

In most use-cases, `use graph_matching::{prelude::*, algo::*};` suffices.

# Logging

Algorithms report their progress through the [`log`](https://docs.rs/log) facade: `debug`
per stage and `trace` per labeling, blossom and augmentation event. No logger is installed by
this crate.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod matching;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `graph_matching::prelude` includes definitions for nodes and edges, errors, matchings, all
/// basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, matching::*, node::*, ops::*, repr::*};
}
