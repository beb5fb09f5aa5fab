/*!
# Graph Generators

Random graph models and deterministic substructures used to build matching instances,
mostly for tests and experiments.

Generators follow a builder pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

The [`RandomGraph`] trait wraps the edge generators into constructors for every graph type
implementing [`GraphFromScratch`], and [`random_weights`] attaches uniformly drawn weights to
an existing graph.

Supported models:
- G(n,m): uniform random graphs with a fixed number of nodes and edges
- G(n,p): Erdős–Rényi model with independent edge probability
*/

use rand::Rng;

use crate::prelude::*;

mod gnm;
mod gnp;
mod substructures;
mod weights;

pub use gnm::*;
pub use gnp::*;
pub use substructures::*;
pub use weights::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen {
    /// Sets the number of edges in the graph generator.
    fn edges(self, m: NumEdges) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// All generated edges are normalized, loop-free and distinct.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from common random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph using edge probability `p`.
    ///
    /// # Errors
    /// Everything the construction of the graph type rejects, e.g. odd cycles for bipartite
    /// graph types.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng;

    /// Creates a random `G(n,m)` graph with exactly `m` edges.
    ///
    /// # Errors
    /// As [`RandomGraph::gnp`].
    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Result<Self>
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng,
    {
        Self::with_vertices(n, Gnp::new().nodes(n).prob(p).stream(rng))
    }

    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Result<Self>
    where
        R: Rng,
    {
        Self::with_vertices(n, Gnm::new().nodes(n).edges(m).stream(rng))
    }
}

/// Number of vertex pairs `{u, v}` with `u != v` among `n` nodes
fn number_of_pairs(n: u64) -> u64 {
    n * n.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        let graph = Graph::gnm(rng, 20, 37).unwrap();
        assert_eq!(graph.number_of_nodes(), 20);
        assert_eq!(graph.number_of_edges(), 37);

        let graph = Graph::gnp(rng, 20, 1.0).unwrap();
        assert_eq!(graph.number_of_edges(), 190);

        let graph = Graph::gnp(rng, 20, 0.0).unwrap();
        assert!(graph.is_singleton_graph());
    }

    #[test]
    fn pairs() {
        assert_eq!(number_of_pairs(0), 0);
        assert_eq!(number_of_pairs(1), 0);
        assert_eq!(number_of_pairs(5), 10);
    }
}
