/*!
Breadth-first traversal.

[`BFS`] visits the vertices reachable from a start vertex in breadth-first order and can be
restarted at the smallest unvisited vertex to sweep the whole graph component by component.
Items are either plain [`Node`]s or [`PredecessorOfNode`] pairs carrying the BFS-tree parent.
*/

use std::{collections::VecDeque, marker::PhantomData};

use super::*;

/// Items yielded by a traversal: the visited node and possibly its predecessor
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// `(predecessor, node)`; a root is encoded by equal entries
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Breadth-first search over an [`AdjacencyList`]
pub struct BreadthFirstSearch<'a, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<I>,
    _item: PhantomData<I>,
}

/// BFS yielding plain nodes
pub type BFS<'a, G> = BreadthFirstSearch<'a, G, Node>;

/// BFS yielding `(predecessor, node)` pairs
pub type BFSWithPredecessor<'a, G> = BreadthFirstSearch<'a, G, PredecessorOfNode>;

impl<'a, G, I> BreadthFirstSearch<'a, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    /// Creates a new search starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = NodeBitSet::new(graph.number_of_nodes());
        visited.set_bit(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![I::new_without_predecessor(start)]),
            _item: PhantomData,
        }
    }

    /// Tries to restart the search at the smallest unvisited node and returns
    /// *true* iff successful. Requires that the search came to a hold earlier,
    /// i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());
        let unvisited = self
            .graph
            .vertices_range()
            .find(|&u| !self.visited.get_bit(u));
        match unvisited {
            None => false,
            Some(u) => {
                self.visited.set_bit(u);
                self.queue.push_back(I::new_without_predecessor(u));
                true
            }
        }
    }

    /// Returns *true* if `u` was already discovered
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }
}

impl<G, I> Iterator for BreadthFirstSearch<'_, G, I>
where
    G: AdjacencyList,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.queue.pop_front()?;
        let u = popped.item();

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.queue.push_back(I::new_with_predecessor(u, v));
            }
        }

        Some(popped)
    }
}

/// Traversal algorithms available on every graph
pub trait Traversal: AdjacencyList + Sized {
    /// Returns a BFS iterator starting at `start`
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BreadthFirstSearch::new(self, start)
    }

    /// Returns a BFS iterator starting at `start` that also reports the BFS-tree parent of
    /// every node
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BreadthFirstSearch::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
