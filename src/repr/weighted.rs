use itertools::Itertools;

use super::{macros::impl_forwarded_graph_ops, *};

/// A graph `G` with a weight of type `W` attached to every edge.
///
/// Weights live in a dense symmetric `n x n` matrix which gives `O(1)` lookups at the cost of
/// quadratic memory. Matching instances are small enough for this to be the better trade-off.
#[derive(Debug, Clone, PartialEq)]
pub struct Weighted<G, W> {
    graph: G,
    weights: Vec<Option<W>>,
}

/// A general graph with edge weights
pub type WeightedGraph<W> = Weighted<Graph, W>;

/// A bipartite graph with edge weights
pub type WeightedBigraph<W> = Weighted<Bigraph, W>;

impl_forwarded_graph_ops!([G: AdjacencyList + AdjacencyTest + GraphEdgeOrder, W] Weighted<G, W> => graph);

impl<G, W> Weighted<G, W>
where
    G: AdjacencyList + AdjacencyTest,
    W: Weight,
{
    /// Attaches weights to all edges of `graph`, computing the weight of each (normalized)
    /// edge with `weight_of`.
    pub fn from_graph<F>(graph: G, mut weight_of: F) -> Self
    where
        F: FnMut(Edge) -> W,
    {
        let n = graph.len();
        let mut weights = vec![None; n * n];
        for e in graph.edges(true).collect_vec() {
            let w = weight_of(e);
            weights[e.0 as usize * n + e.1 as usize] = Some(w);
            weights[e.1 as usize * n + e.0 as usize] = Some(w);
        }

        Self { graph, weights }
    }

    /// Returns the unweighted graph
    pub fn as_graph(&self) -> &G {
        &self.graph
    }

    /// Consumes `self` and returns the unweighted graph
    pub fn into_graph(self) -> G {
        self.graph
    }

    fn index_of(&self, u: Node, v: Node) -> Result<usize> {
        raise_error_unless!(
            self.graph.has_edge(u, v),
            MatchingError::EdgeNotFound(Edge(u, v))
        );
        Ok(u as usize * self.graph.len() + v as usize)
    }
}

impl<G, W> Weighted<G, W>
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphFromScratch,
    W: Weight,
{
    /// Creates a weighted graph from `(u, v, weight)` triples.
    /// As with [`GraphFromScratch::try_from_edges`], the endpoints must form `0..n`.
    ///
    /// # Errors
    /// Everything the construction of `G` rejects.
    pub fn try_from_weighted_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Node, Node, W)>,
    {
        let edges = edges.into_iter().collect_vec();
        let graph = G::try_from_edges(edges.iter().map(|&(u, v, _)| Edge(u, v)))?;
        Self::with_weights(graph, edges)
    }

    /// Creates a weighted graph on the vertices `0..n` (possibly isolated) from
    /// `(u, v, weight)` triples.
    ///
    /// # Errors
    /// Everything the construction of `G` rejects.
    pub fn with_vertices<I>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Node, Node, W)>,
    {
        let edges = edges.into_iter().collect_vec();
        let graph = G::with_vertices(n, edges.iter().map(|&(u, v, _)| Edge(u, v)))?;
        Self::with_weights(graph, edges)
    }

    fn with_weights(graph: G, edges: Vec<(Node, Node, W)>) -> Result<Self> {
        let mut weighted = Self::from_graph(graph, |_| W::zero());
        for (u, v, w) in edges {
            weighted.set_w(u, v, w)?;
        }
        Ok(weighted)
    }
}

impl<G, W> EdgeWeights for Weighted<G, W>
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeOrder,
    W: Weight,
{
    type Weight = W;

    fn w(&self, u: Node, v: Node) -> Result<W> {
        let idx = self.index_of(u, v)?;
        self.weights[idx].ok_or(MatchingError::EdgeNotFound(Edge(u, v)))
    }

    fn weighted_edges(&self) -> impl Iterator<Item = (Edge, W)> + '_ {
        let n = self.graph.len();
        self.graph
            .edges(true)
            .filter_map(move |e| Some((e, self.weights[e.0 as usize * n + e.1 as usize]?)))
    }
}

impl<G, W> GraphWeightEditing for Weighted<G, W>
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeOrder,
    W: Weight,
{
    fn set_w(&mut self, u: Node, v: Node, weight: W) -> Result<()> {
        let idx = self.index_of(u, v)?;
        self.weights[idx] = Some(weight);
        let idx = self.index_of(v, u)?;
        self.weights[idx] = Some(weight);
        Ok(())
    }
}

impl<W: Weight> Bipartite for WeightedBigraph<W> {
    fn partition(&self) -> Result<(Vec<Node>, Vec<Node>)> {
        self.graph.partition()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_symmetric() {
        let mut graph =
            WeightedGraph::try_from_weighted_edges([(0, 1, 3), (1, 2, -4), (2, 0, 7)]).unwrap();

        assert_eq!(graph.w(0, 1), Ok(3));
        assert_eq!(graph.w(1, 0), Ok(3));
        assert_eq!(graph.w(2, 1), Ok(-4));
        assert_eq!(graph.max_w(), Some(7));

        graph.set_w(1, 2, 10).unwrap();
        assert_eq!(graph.w(2, 1), Ok(10));
        assert_eq!(graph.max_w(), Some(10));
    }

    #[test]
    fn missing_edges() {
        let mut graph =
            WeightedGraph::<i64>::with_vertices(4, [(0, 1, 1), (2, 3, 2)]).unwrap();

        assert_eq!(graph.w(0, 2), Err(MatchingError::EdgeNotFound(Edge(0, 2))));
        assert_eq!(graph.w(0, 9), Err(MatchingError::EdgeNotFound(Edge(0, 9))));
        assert_eq!(
            graph.set_w(1, 2, 5),
            Err(MatchingError::EdgeNotFound(Edge(1, 2)))
        );

        let empty = WeightedGraph::<i64>::with_vertices(3, []).unwrap();
        assert_eq!(empty.max_w(), None);
    }

    #[test]
    fn weighted_bigraph() {
        let graph =
            WeightedBigraph::try_from_weighted_edges([(0, 1, 1.5), (0, 2, 2.5)]).unwrap();
        assert_eq!(graph.partition(), Ok((vec![0], vec![1, 2])));
        assert_eq!(graph.max_w(), Some(2.5));
        assert_eq!(
            graph.weighted_edges().collect_vec(),
            vec![(Edge(0, 1), 1.5), (Edge(0, 2), 2.5)]
        );

        assert_eq!(
            WeightedBigraph::try_from_weighted_edges([(0, 1, 1), (1, 2, 1), (2, 0, 1)]),
            Err(MatchingError::NotBipartite)
        );
    }

    #[test]
    fn from_graph_assigns_all_weights() {
        let graph = Graph::try_from_edges([(0, 1), (1, 2), (2, 3)]).unwrap();
        let weighted = Weighted::from_graph(graph, |Edge(u, v)| (u + v) as i32);
        assert_eq!(weighted.w(2, 3), Ok(5));
        assert_eq!(weighted.number_of_edges(), 3);
    }
}
