/*!
# Vertex Labels

The algorithms of this crate require the vertex set `0..n`. [`VertexLabels`] assigns these
ids to arbitrary (hashable) vertex labels in order of first appearance and translates ids,
edges and matchings back to the labels.

```
use graph_matching::{prelude::*, algo::*, utils::*};

let (graph, labels) = WeightedGraph::from_labeled_weighted_edges(
    [("ann", "bob", 4), ("bob", "cid", 5), ("cid", "dan", 4)],
).unwrap();
let matching = graph.maximum_weighted_matching(false).unwrap();

assert_eq!(labels.labeled_edges(&matching).unwrap(), vec![("ann", "bob"), ("cid", "dan")]);
```
*/

use std::hash::Hash;

use fxhash::FxHashMap;
use log::debug;

use crate::{error::*, matching::Matching, ops::*, repr::Weighted, *};

/// Bidirectional mapping between vertex labels of type `T` and the nodes `0..n`
#[derive(Debug, Clone)]
pub struct VertexLabels<T> {
    labels: Vec<T>,
    ids: FxHashMap<T, Node>,
}

impl<T> Default for VertexLabels<T> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            ids: FxHashMap::default(),
        }
    }
}

impl<T> VertexLabels<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node of `label`, assigning the next unused node if `label` is new.
    ///
    /// # Errors
    /// [`MatchingError::InvalidVertexNumbering`] if all nodes are already taken.
    pub fn id_or_insert(&mut self, label: T) -> Result<Node> {
        if let Some(&u) = self.ids.get(&label) {
            return Ok(u);
        }

        raise_error_unless!(
            self.labels.len() < INVALID_NODE as usize,
            MatchingError::InvalidVertexNumbering(format!(
                "more than {} distinct vertex labels",
                INVALID_NODE - 1
            ))
        );

        let u = self.labels.len() as Node;
        self.ids.insert(label.clone(), u);
        self.labels.push(label);
        Ok(u)
    }

    /// Returns the node assigned to `label`, if any
    pub fn id_of(&self, label: &T) -> Option<Node> {
        self.ids.get(label).copied()
    }

    /// Returns the label of node `u`, if any
    pub fn label_of(&self, u: Node) -> Option<&T> {
        self.labels.get(u as usize)
    }

    /// Returns all labels, the label of node `u` at position `u`
    pub fn labels(&self) -> &[T] {
        &self.labels
    }

    /// Returns the number of labeled nodes
    pub fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    /// Returns *true* if no label was assigned yet
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Translates an edge between nodes back to the labels of its endpoints.
    ///
    /// # Errors
    /// [`MatchingError::InvalidVertexNumbering`] if an endpoint carries no label.
    pub fn labeled_edge(&self, Edge(u, v): Edge) -> Result<(T, T)> {
        let label = |x: Node| {
            self.label_of(x).cloned().ok_or_else(|| {
                MatchingError::InvalidVertexNumbering(format!("vertex {x} has no label"))
            })
        };
        Ok((label(u)?, label(v)?))
    }

    /// Translates the edges of `matching` (sorted as in [`Matching::edges`]) back to labels.
    ///
    /// # Errors
    /// [`MatchingError::InvalidVertexNumbering`] if a matched vertex carries no label.
    pub fn labeled_edges(&self, matching: &Matching) -> Result<Vec<(T, T)>> {
        matching
            .edges()
            .into_iter()
            .map(|e| self.labeled_edge(e))
            .collect()
    }
}

/// Creates graphs from edges between arbitrary vertex labels
pub trait GraphFromLabeledEdges: Sized {
    /// Creates a graph whose vertices are the distinct labels of `edges`, numbered in order
    /// of first appearance. Returns the graph together with the mapping of its nodes to the
    /// labels.
    ///
    /// # Errors
    /// Fails on self-loops and on edges appearing twice.
    fn from_labeled_edges<T, I>(edges: I) -> Result<(Self, VertexLabels<T>)>
    where
        T: Eq + Hash + Clone,
        I: IntoIterator<Item = (T, T)>;
}

impl<G> GraphFromLabeledEdges for G
where
    G: GraphFromScratch,
{
    fn from_labeled_edges<T, I>(edges: I) -> Result<(Self, VertexLabels<T>)>
    where
        T: Eq + Hash + Clone,
        I: IntoIterator<Item = (T, T)>,
    {
        let mut labels = VertexLabels::new();
        let edges = edges
            .into_iter()
            .map(|(u, v)| Ok(Edge(labels.id_or_insert(u)?, labels.id_or_insert(v)?)))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "relabeled {} edges onto {} vertices",
            edges.len(),
            labels.number_of_nodes()
        );
        let graph = G::with_vertices(labels.number_of_nodes(), edges)?;
        Ok((graph, labels))
    }
}

impl<G, W> Weighted<G, W>
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphFromScratch,
    W: Weight,
{
    /// Creates a weighted graph from `(label, label, weight)` triples; vertices are numbered
    /// as in [`GraphFromLabeledEdges::from_labeled_edges`].
    ///
    /// # Errors
    /// Everything the construction of `G` rejects.
    pub fn from_labeled_weighted_edges<T, I>(edges: I) -> Result<(Self, VertexLabels<T>)>
    where
        T: Eq + Hash + Clone,
        I: IntoIterator<Item = (T, T, W)>,
    {
        let mut labels = VertexLabels::new();
        let edges = edges
            .into_iter()
            .map(|(u, v, w)| Ok((labels.id_or_insert(u)?, labels.id_or_insert(v)?, w)))
            .collect::<Result<Vec<_>>>()?;

        let graph = Self::with_vertices(labels.number_of_nodes(), edges)?;
        Ok((graph, labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::*, gens::*, repr::*, testing::*};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn labels_are_numbered_by_first_appearance() {
        let (graph, labels) = Graph::from_labeled_edges([('b', 'a'), ('c', 'b')]).unwrap();

        assert_eq!(labels.labels(), &['b', 'a', 'c']);
        assert_eq!(labels.id_of(&'c'), Some(2));
        assert_eq!(labels.id_of(&'z'), None);
        assert_eq!(labels.label_of(1), Some(&'a'));
        assert_eq!(labels.label_of(3), None);

        assert_eq!(graph.number_of_nodes(), 3);
        assert!(graph.has_edge(0, 1) && graph.has_edge(2, 0));
        assert!(!graph.has_edge(1, 2));
    }

    #[test]
    fn invalid_labeled_edges() {
        assert_eq!(
            Graph::from_labeled_edges([("x", "x")]).map(|(g, _)| g),
            Err(MatchingError::SelfLoop(0))
        );
        assert!(matches!(
            Graph::from_labeled_edges([("x", "y"), ("y", "x")]),
            Err(MatchingError::DuplicateEdge(_))
        ));
        assert_eq!(
            Bigraph::from_labeled_edges([("x", "y"), ("y", "z"), ("z", "x")]).map(|(g, _)| g),
            Err(MatchingError::NotBipartite)
        );

        let labels = VertexLabels::<&str>::new();
        assert!(labels.is_empty());
        assert!(matches!(
            labels.labeled_edge(Edge(0, 1)),
            Err(MatchingError::InvalidVertexNumbering(_))
        ));
    }

    #[test]
    fn bipartite_matching_on_labels() {
        let (graph, labels) = Bigraph::from_labeled_edges([
            ("alice", "tennis"),
            ("bob", "tennis"),
            ("bob", "chess"),
            ("carol", "chess"),
        ])
        .unwrap();

        // "bob" has to take "chess" or either "alice" or "carol" stays alone
        let matching = graph.maximum_cardinality_matching().unwrap();
        let pairs = labels.labeled_edges(&matching).unwrap();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|&(a, b)| graph.has_edge(
            labels.id_of(&a).unwrap(),
            labels.id_of(&b).unwrap()
        )));
    }

    #[test]
    fn matching_round_trips_through_labels() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x1abe1);

        for _ in 0..50 {
            let n = rng.random_range(2..9);
            let unweighted = Graph::gnp(rng, n, 0.5).unwrap();
            let graph = random_weights(rng, unweighted, -5..20);

            // give every vertex a shuffled string label
            let mut names = (0..n).map(|u| format!("v{}", 100 + u)).collect_vec();
            names.shuffle(rng);
            let labeled_edges = graph
                .weighted_edges()
                .map(|(Edge(u, v), w)| (names[u as usize].clone(), names[v as usize].clone(), w))
                .collect_vec();

            let (relabeled, labels) =
                WeightedGraph::from_labeled_weighted_edges(labeled_edges).unwrap();
            let matching = relabeled.maximum_weighted_matching(false).unwrap();

            // translate back to the original nodes and compare with the unlabeled optimum
            let original = Matching::from_edges(
                labels
                    .labeled_edges(&matching)
                    .unwrap()
                    .into_iter()
                    .map(|(a, b)| {
                        let index_of = |x: &String| names.iter().position(|y| y == x).unwrap();
                        (index_of(&a) as Node, index_of(&b) as Node)
                    }),
            )
            .unwrap();

            assert!(original.edges().iter().all(|&Edge(u, v)| graph.has_edge(u, v)));
            assert_eq!(original.weight(&graph), Ok(brute_force_weight(&graph)));
        }
    }
}
