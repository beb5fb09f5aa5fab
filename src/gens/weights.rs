use std::ops::Range;

use rand::distr::uniform::SampleUniform;

use super::*;

/// Attaches a weight drawn uniformly from `range` to every edge of `graph`.
///
/// Edges are visited in the order of [`AdjacencyList::edges`], so the result is
/// reproducible for a seeded `rng`.
///
/// # Example
/// ```rust
/// use graph_matching::{prelude::*, gens::*};
/// use rand::SeedableRng;
///
/// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(1);
/// let graph = Graph::try_from_edges([(0, 1), (1, 2)]).unwrap();
/// let weighted = random_weights(rng, graph, -5..5);
/// assert!((-5..5).contains(&weighted.w(1, 2).unwrap()));
/// ```
pub fn random_weights<R, G, W>(rng: &mut R, graph: G, range: Range<W>) -> Weighted<G, W>
where
    R: Rng,
    G: AdjacencyList + AdjacencyTest,
    W: Weight + SampleUniform,
{
    Weighted::from_graph(graph, |_| rng.random_range(range.clone()))
}
