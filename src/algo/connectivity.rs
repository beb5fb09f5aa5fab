use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

/// Connected components of undirected graphs
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns an iterator over the connected components; each component is a sorted list
    /// of its vertices and components are ordered by their smallest vertex.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns *true* if the graph has at most one connected component.
    /// The empty graph is considered connected.
    fn is_connected(&self) -> bool {
        self.connected_components().nth(1).is_none()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over connected components, see [`Connectivity::connected_components`]
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(0)),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;

        let component = bfs.by_ref().sorted().collect_vec();
        if !bfs.try_restart_at_unvisited() {
            self.bfs = None;
        }

        Some(component)
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components() {
        let graph = Graph::with_vertices(7, [(0, 4), (4, 2), (1, 3), (5, 6)]).unwrap();
        assert_eq!(
            graph.connected_components().collect_vec(),
            vec![vec![0, 2, 4], vec![1, 3], vec![5, 6]]
        );
        assert!(!graph.is_connected());
    }

    #[test]
    fn connected() {
        assert!(Graph::new(0).is_connected());
        assert!(Graph::new(1).is_connected());
        assert!(!Graph::new(2).is_connected());
        assert!(
            Graph::try_from_edges([(0, 1), (1, 2), (2, 3)])
                .unwrap()
                .is_connected()
        );
    }

    #[test]
    fn isolated_vertices_are_components() {
        let graph = Graph::with_vertices(3, [(1, 2)]).unwrap();
        assert_eq!(
            graph.connected_components().collect_vec(),
            vec![vec![0], vec![1, 2]]
        );
    }
}
