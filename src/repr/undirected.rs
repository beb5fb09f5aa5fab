use super::*;

/// An undirected simple graph using one adjacency array per node.
///
/// Neighbors are kept in insertion order which makes all traversals (and thus all matching
/// algorithms) deterministic for a fixed sequence of `add_edge` calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for Graph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for Graph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs
            .get(u as usize)
            .is_some_and(|nbs| nbs.contains(&v))
    }
}

impl GraphNew for Graph {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphEdgeEditing for Graph {
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        let n = self.number_of_nodes();
        raise_error_unless!(
            u < n && v < n,
            MatchingError::InvalidVertexNumbering(format!(
                "edge {} leaves the vertex set 0..{n}",
                Edge(u, v)
            ))
        );
        raise_error_unless!(u != v, MatchingError::SelfLoop(u));

        if self.has_edge(u, v) {
            return Ok(true);
        }

        self.nbs[u as usize].push(v);
        self.nbs[v as usize].push(u);
        self.num_edges += 1;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_graph_ops;

    test_graph_ops!(graph_ops, Graph);

    #[test]
    fn rejects_invalid_edges() {
        let mut graph = Graph::new(3);
        assert_eq!(graph.add_edge(0, 0), Err(MatchingError::SelfLoop(0)));
        assert!(matches!(
            graph.add_edge(0, 3),
            Err(MatchingError::InvalidVertexNumbering(_))
        ));

        graph.add_edge(0, 1).unwrap();
        assert_eq!(
            graph.add_edge(1, 0),
            Err(MatchingError::DuplicateEdge(Edge(1, 0)))
        );
        assert_eq!(graph.try_add_edge(0, 1), Ok(true));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn from_edges_requires_consecutive_vertices() {
        let graph = Graph::try_from_edges([(0, 1), (1, 2)]).unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 2);

        assert!(matches!(
            Graph::try_from_edges([(1, 2), (2, 3)]),
            Err(MatchingError::InvalidVertexNumbering(_))
        ));

        let graph = Graph::with_vertices(5, [(1, 2), (2, 3)]).unwrap();
        assert_eq!(graph.number_of_nodes(), 5);
        assert_eq!(graph.degree_of(0), 0);
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::try_from_edges(Vec::<Edge>::new()).unwrap();
        assert!(graph.is_empty());
        assert!(graph.is_singleton_graph());
        assert_eq!(graph.edges(true).count(), 0);
    }
}
