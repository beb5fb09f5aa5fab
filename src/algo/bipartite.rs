/*!
# Bipartite Graph Algorithms

Testing whether a graph is bipartite and computing its two color classes.

A bipartition is any [`Set`] of nodes: nodes in the set are on the **right** side, all
other nodes on the **left** side. [`NodeBitSet`] is the default representation.
*/

use crate::utils::{FromCapacity, Set};

use super::*;

/// A bipartition of the node set.
///
/// - Nodes in the set are considered to be on the **right** (1) side
/// - Nodes not in the set are considered to be on the **left** (0) side
pub trait Bipartition: Set<Node> {
    /// Returns `true` if the node is on the left (0) side of the partition.
    fn is_on_left_side(&self, u: Node) -> bool;

    /// Returns `true` if the node is on the right (1) side of the partition.
    fn is_on_right_side(&self, u: Node) -> bool;
}

impl<B> Bipartition for B
where
    B: Set<Node>,
{
    #[inline]
    fn is_on_left_side(&self, u: Node) -> bool {
        !self.contains(&u)
    }

    #[inline]
    fn is_on_right_side(&self, u: Node) -> bool {
        self.contains(&u)
    }
}

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest {
    /// Tests whether the given candidate partition is a valid bipartition, i.e. whether every
    /// edge connects both sides.
    ///
    /// # Examples
    /// ```
    /// use graph_matching::{prelude::*, algo::*};
    ///
    /// let graph = Graph::try_from_edges([(0, 1), (1, 2), (2, 3)]).unwrap();
    /// assert!(graph.is_bipartition(&NodeBitSet::new_with_bits_set(4, [1 as Node, 3])));
    /// assert!(!graph.is_bipartition(&NodeBitSet::new_with_bits_set(4, [1 as Node, 2])));
    /// ```
    fn is_bipartition<B>(&self, bipartition: &B) -> bool
    where
        B: Bipartition;

    /// Computes a valid bipartition of the graph, if one exists.
    /// The smallest vertex of each connected component is put on the left side.
    /// Returns `None` if the graph is not bipartite.
    fn compute_bipartition<B>(&self) -> Option<B>
    where
        B: Bipartition + FromCapacity;

    /// Tests whether the graph is bipartite
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition::<NodeBitSet>().is_some()
    }

    /// Returns the left and right side of [`BipartiteTest::compute_bipartition`] as sorted
    /// vertex lists.
    ///
    /// # Errors
    /// [`MatchingError::NotBipartite`] if the graph contains an odd cycle.
    fn partition_into_sides(&self) -> Result<(Vec<Node>, Vec<Node>)>
    where
        Self: GraphNodeOrder,
    {
        let bipartition = self
            .compute_bipartition::<NodeBitSet>()
            .ok_or(MatchingError::NotBipartite)?;

        Ok(self
            .vertices_range()
            .partition(|&u| bipartition.is_on_left_side(u)))
    }
}

impl<G> BipartiteTest for G
where
    G: AdjacencyList,
{
    fn is_bipartition<B>(&self, bipartition: &B) -> bool
    where
        B: Bipartition,
    {
        self.edges(true)
            .all(|Edge(u, v)| bipartition.is_on_left_side(u) != bipartition.is_on_left_side(v))
    }

    fn compute_bipartition<B>(&self) -> Option<B>
    where
        B: Bipartition + FromCapacity,
    {
        let bipartition = propose_possibly_illegal_bipartition(self);
        self.is_bipartition(&bipartition).then_some(bipartition)
    }
}

/// Computes a candidate bipartition of the graph using BFS traversal.
///
/// - If the graph is bipartite, the returned partition is valid
/// - If the graph is not bipartite, the returned partition may be invalid
fn propose_possibly_illegal_bipartition<G, B>(graph: &G) -> B
where
    G: AdjacencyList,
    B: Bipartition + FromCapacity,
{
    let mut bipartition = B::from_total_used_capacity(graph.len(), graph.len());
    if graph.is_empty() {
        return bipartition;
    }

    let mut bfs = graph.bfs_with_predecessor(0);
    loop {
        for (node, pred) in bfs
            .by_ref()
            .filter_map(|x| Some((x.item(), x.predecessor()?)))
        {
            if bipartition.is_on_left_side(pred) {
                bipartition.insert(node);
            }
        }

        if !bfs.try_restart_at_unvisited() {
            break;
        }
    }

    bipartition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use fxhash::FxHashSet;

    #[test]
    fn path() {
        for n in 1..10 {
            let mut graph = Graph::new(n);
            graph.connect_path(0..n).unwrap();
            assert!(graph.is_bipartite());

            if n > 2 {
                let mut graph = graph.clone();
                graph.add_edge(1 - (n % 2), n - 1).unwrap();
                assert!(!graph.is_bipartite());
            }
        }
    }

    #[test]
    fn sides() {
        let mut graph = Graph::new(6);
        graph.connect_cycle([0, 3, 1, 4]).unwrap();
        graph.add_edge(5, 2).unwrap();

        assert_eq!(graph.partition_into_sides(), Ok((vec![0, 1, 2], vec![3, 4, 5])));

        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.partition_into_sides(), Err(MatchingError::NotBipartite));
    }

    #[test]
    fn empty_graph_is_bipartite() {
        assert_eq!(Graph::new(0).partition_into_sides(), Ok((vec![], vec![])));
        assert_eq!(Graph::new(2).partition_into_sides(), Ok((vec![0, 1], vec![])));
    }

    #[test]
    fn bipartition_representations_agree() {
        let mut graph = Graph::new(7);
        graph.connect_cycle([0, 3, 1, 4]).unwrap();
        graph.connect_path([2, 5, 6]).unwrap();

        let dense: NodeBitSet = graph.compute_bipartition().unwrap();
        let sparse: FxHashSet<Node> = graph.compute_bipartition().unwrap();
        assert!(graph.is_bipartition(&dense));
        assert!(graph.is_bipartition(&sparse));

        for u in graph.vertices() {
            assert_eq!(dense.is_on_right_side(u), sparse.is_on_right_side(u));
        }
        assert_eq!(dense.cardinality(), 3);
        assert!(dense.is_on_left_side(0) && dense.is_on_left_side(2) && dense.is_on_left_side(6));

        // moving a single vertex across breaks the bipartition
        let mut broken = dense.clone();
        broken.clear_bit(3);
        assert!(!graph.is_bipartition(&broken));

        graph.add_edge(0, 1).unwrap();
        assert!(graph.compute_bipartition::<NodeBitSet>().is_none());
    }
}
