use super::{macros::impl_forwarded_graph_ops, *};
use crate::algo::BipartiteTest;

/// A [`Graph`] without odd cycles.
///
/// Bipartiteness is verified once at construction, so [`Bipartite::partition`] never fails
/// on a `Bigraph`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bigraph {
    graph: Graph,
}

impl_forwarded_graph_ops!([] Bigraph => graph);

impl Bigraph {
    /// Wraps a graph after checking that it is bipartite.
    ///
    /// # Errors
    /// [`MatchingError::NotBipartite`] if `graph` contains an odd cycle.
    pub fn try_from_graph(graph: Graph) -> Result<Self> {
        raise_error_unless!(graph.is_bipartite(), MatchingError::NotBipartite);
        Ok(Self { graph })
    }

    /// Returns the underlying general graph
    pub fn as_graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the bigraph and returns the underlying general graph
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

impl GraphFromScratch for Bigraph {
    fn with_vertices(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        Self::try_from_graph(Graph::with_vertices(n, edges)?)
    }
}

impl Bipartite for Bigraph {
    fn partition(&self) -> Result<(Vec<Node>, Vec<Node>)> {
        self.graph.partition_into_sides()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn rejects_odd_cycles() {
        assert_eq!(
            Bigraph::try_from_edges([(0, 1), (1, 2), (2, 0)]),
            Err(MatchingError::NotBipartite)
        );
        assert!(Bigraph::try_from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]).is_ok());
    }

    #[test]
    fn partition_of_complete_bigraph() {
        let graph = Bigraph::try_from_edges([(0, 2), (0, 3), (1, 2), (1, 3)]).unwrap();
        assert_eq!(graph.partition(), Ok((vec![0, 1], vec![2, 3])));
    }

    #[test]
    fn partition_is_idempotent() {
        let graph =
            Bigraph::try_from_edges([(0, 1), (1, 2), (3, 4), (4, 5), (5, 6), (2, 7)]).unwrap();
        let first = graph.partition().unwrap();
        let second = graph.partition().unwrap();
        assert_eq!(first, second);

        // smallest vertex of each component is on the left side
        assert!(first.0.contains(&0));
        assert!(first.0.contains(&3));

        let (left, right) = first;
        assert_eq!(
            left.iter().chain(right.iter()).copied().sorted().collect_vec(),
            (0..8).collect_vec()
        );
        for Edge(u, v) in graph.edges(true) {
            assert_ne!(left.contains(&u), left.contains(&v));
        }
    }

    #[test]
    fn forwards_adjacency() {
        let graph = Bigraph::try_from_edges([(0, 1), (1, 2)]).unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.has_edge(2, 1));
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![0, 2]);
        assert_eq!(graph.as_graph().degree_of(1), 2);
    }
}
