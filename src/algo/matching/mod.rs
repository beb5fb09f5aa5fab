/*!
# Matching Algorithms

A *matching* is a set of edges without shared endpoints.

- A **maximum cardinality matching** contains as many edges as possible.
- A **maximum weighted matching** maximizes the sum of its edge weights (and may therefore
  be smaller than a maximum cardinality matching). Optionally, the weight can be maximized
  among all matchings of maximum cardinality only.

| struct | graphs | problem |
|--------|--------|---------|
| [`BipartiteMatching`] | bipartite | maximum cardinality |
| [`GabowMatching`] | general | maximum cardinality |
| [`BipartiteWeightedMatching`] | bipartite | maximum weight |
| [`BlossomMatching`] | general | maximum weight, optionally of maximum cardinality |

All of them find augmenting paths in *stages*: each stage labels vertices along alternating
paths starting at free vertices until an augmenting path is found (and applied) or no further
labeling is possible. The vertex order within a stage is deterministic (FIFO/LIFO queues);
it influences *which* optimal matching is returned, never its size or weight.

The traits [`MaximumCardinalityMatching`] and [`MaximumWeightedMatching`] select the
appropriate algorithm for the graph types in [`crate::repr`].
*/

mod mcm_bipartite;
mod mcm_general;
mod mwm_bipartite;
mod mwm_general;
mod verify;

use super::*;

pub use mcm_bipartite::*;
pub use mcm_general::*;
pub use mwm_bipartite::*;
pub use mwm_general::*;

/// Computes a matching of maximum cardinality
pub trait MaximumCardinalityMatching {
    /// Computes a maximum cardinality matching using the default configuration of the
    /// algorithm best suited for the graph type.
    ///
    /// # Examples
    /// ```
    /// use graph_matching::{prelude::*, algo::*};
    ///
    /// // a stem 0 - 1 attached to a triangle 1, 2, 3 followed by the path 3 - 4 - 5
    /// let graph = Graph::try_from_edges([(0, 1), (1, 2), (1, 3), (2, 3), (3, 4), (4, 5)]).unwrap();
    /// assert_eq!(graph.maximum_cardinality_matching().unwrap().size(), 3);
    /// ```
    fn maximum_cardinality_matching(&self) -> Result<Matching>;
}

/// Computes a matching of maximum weight
pub trait MaximumWeightedMatching {
    /// Computes a maximum weighted matching.
    /// If `max_cardinality`, only matchings of maximum cardinality are considered.
    ///
    /// # Examples
    /// ```
    /// use graph_matching::{prelude::*, algo::*};
    ///
    /// let graph = WeightedBigraph::try_from_weighted_edges([(0, 1, 1), (0, 2, 2)]).unwrap();
    /// let matching = graph.maximum_weighted_matching(false).unwrap();
    /// assert_eq!(matching.edges(), vec![Edge(0, 2)]);
    /// assert_eq!(matching.weight(&graph), Ok(2));
    /// ```
    fn maximum_weighted_matching(&self, max_cardinality: bool) -> Result<Matching>;
}

impl MaximumCardinalityMatching for Graph {
    fn maximum_cardinality_matching(&self) -> Result<Matching> {
        GabowMatching::new().compute(self)
    }
}

impl MaximumCardinalityMatching for Bigraph {
    fn maximum_cardinality_matching(&self) -> Result<Matching> {
        BipartiteMatching::new().compute(self)
    }
}

impl<W: Weight> MaximumCardinalityMatching for WeightedGraph<W> {
    fn maximum_cardinality_matching(&self) -> Result<Matching> {
        GabowMatching::new().compute(self)
    }
}

impl<W: Weight> MaximumCardinalityMatching for WeightedBigraph<W> {
    fn maximum_cardinality_matching(&self) -> Result<Matching> {
        BipartiteMatching::new().compute(self)
    }
}

impl<W: Weight> MaximumWeightedMatching for WeightedGraph<W> {
    fn maximum_weighted_matching(&self, max_cardinality: bool) -> Result<Matching> {
        BlossomMatching::new()
            .max_cardinality(max_cardinality)
            .compute(self)
    }
}

impl<W: Weight> MaximumWeightedMatching for WeightedBigraph<W> {
    fn maximum_weighted_matching(&self, max_cardinality: bool) -> Result<Matching> {
        if max_cardinality {
            // the bipartite primal-dual method does not enforce maximum cardinality
            BlossomMatching::new().max_cardinality(true).compute(self)
        } else {
            BipartiteWeightedMatching::new().compute(self)
        }
    }
}
