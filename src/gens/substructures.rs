/*!
# Substructure Generators

Adds common motifs (paths, cycles, cliques and complete bipartite graphs) to an already
existing graph. Useful to build instances whose maximum matching is known in advance.

# Example

```rust
use graph_matching::{prelude::*, gens::*};

let mut g = Graph::new(5);
g.connect_path([0, 1, 2]).unwrap();
g.connect_cycle([2, 3, 4]).unwrap();

assert_eq!(
    g.ordered_edges(true).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** inside an already existing graph.
///
/// All methods fail on the first edge that cannot be added (see
/// [`GraphEdgeEditing::add_edge`]); edges added before remain in the graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// # Example
    /// ```rust
    /// use graph_matching::{prelude::*, gens::*};
    ///
    /// let mut g = Graph::new(4);
    /// g.connect_path([0, 1, 2, 3]).unwrap();
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(1, 2));
    /// assert!(g.has_edge(2, 3));
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**, i.e. a path closed by an edge from the last
    /// node back to the first. Cycles need at least three nodes.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes pairwise into a **clique**.
    fn connect_clique<C>(&mut self, nodes: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>;

    /// Connects every node of `left` with every node of `right`.
    /// The two collections must be disjoint.
    fn connect_biclique<L, R>(&mut self, left: L, right: R) -> Result<()>
    where
        L: IntoIterator<Item = Node>,
        R: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur)?;
                prev = cur;
            }

            self.add_edge(prev, first)?;
        }
        Ok(())
    }

    fn connect_clique<C>(&mut self, nodes: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes.into_iter().collect_vec().into_iter().tuple_combinations() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    fn connect_biclique<L, R>(&mut self, left: L, right: R) -> Result<()>
    where
        L: IntoIterator<Item = Node>,
        R: IntoIterator<Item = Node>,
    {
        let right = right.into_iter().collect_vec();
        for u in left {
            for &v in &right {
                self.add_edge(u, v)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::BipartiteTest;

    #[test]
    fn connect_path() {
        {
            let mut g = Graph::new(6);
            g.connect_path([]).unwrap();
            g.connect_path([1]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = Graph::new(6);
            g.connect_path([0, 3, 1, 4]).unwrap();
            assert_eq!(
                g.ordered_edges(true).collect_vec(),
                vec![Edge(0, 3), Edge(1, 3), Edge(1, 4)]
            );
        }

        {
            let mut g = Graph::new(3);
            assert_eq!(g.connect_path([0, 1, 0]), Err(MatchingError::DuplicateEdge(Edge(1, 0))));
        }
    }

    #[test]
    fn connect_cycle() {
        {
            let mut g = Graph::new(6);
            g.connect_cycle([]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = Graph::new(6);
            assert_eq!(g.connect_cycle([1]), Err(MatchingError::SelfLoop(1)));
        }

        {
            let mut g = Graph::new(6);
            g.connect_cycle([0, 3, 1, 4]).unwrap();
            assert_eq!(
                g.ordered_edges(true).collect_vec(),
                vec![Edge(0, 3), Edge(0, 4), Edge(1, 3), Edge(1, 4)]
            );
        }
    }

    #[test]
    fn connect_clique() {
        let mut g = Graph::new(6);
        g.connect_clique([]).unwrap();
        g.connect_clique([2]).unwrap();
        assert_eq!(g.number_of_edges(), 0);

        g.connect_clique([1, 2, 4, 5]).unwrap();
        assert_eq!(g.number_of_edges(), 6);
        assert!(g.has_edge(5, 1));
    }

    #[test]
    fn connect_biclique() {
        let mut g = Graph::new(5);
        g.connect_biclique([0, 1], [2, 3, 4]).unwrap();
        assert_eq!(g.number_of_edges(), 6);
        assert_eq!(g.partition_into_sides(), Ok((vec![0, 1], vec![2, 3, 4])));
    }
}
