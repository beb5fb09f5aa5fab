/*!
Gabow's `O(n^3)` implementation of Edmonds' cardinality matching algorithm.

> *H. N. Gabow. An Efficient Implementation of Edmonds' Algorithm for Maximum Matching on
> Graphs. Journal of the ACM 23.2 (1976): 221–234.*

Instead of contracting blossoms, the search labels vertices: an *outer* vertex carries either
the start label, a *vertex label* (the outer vertex it was reached from) or an *edge label*
(the edge that closed the blossom it belongs to). Together with `first[v]`, the first nonouter
vertex on the alternating path from `v` back to the root, these labels suffice to rematch an
augmenting path recursively.

Vertex `n` is an artificial *dummy*: `mate[v] == n` means `v` is unmatched.
*/

use std::collections::VecDeque;

use itertools::Itertools;
use log::{debug, trace};

use super::*;

/// Maximum cardinality matching in general graphs (Gabow's algorithm E).
///
/// Every unmatched vertex is used as search root once, in increasing order. Disconnected
/// graphs are therefore handled as well; [`GabowMatching::require_connected`] rejects them
/// instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct GabowMatching {
    require_connected: bool,
}

impl GabowMatching {
    /// Creates the algorithm with its default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// If set, [`GabowMatching::compute`] fails on graphs with more than one connected
    /// component
    pub fn require_connected(mut self, require: bool) -> Self {
        self.require_connected = require;
        self
    }

    /// Computes a maximum cardinality matching of `graph`.
    ///
    /// # Errors
    /// [`MatchingError::DisconnectedGraph`] if configured via
    /// [`GabowMatching::require_connected`] and the graph is not connected.
    pub fn compute<G: AdjacencyList>(&self, graph: &G) -> Result<Matching> {
        raise_error_unless!(
            !self.require_connected || graph.is_connected(),
            MatchingError::DisconnectedGraph
        );

        let mut search = LabelSearch::new(graph);
        for u in graph.vertices_with_neighbors() {
            if search.is_unmatched(u) && search.search_from(u) {
                trace!("augmented from root {u}");
            }
        }

        let matching = search.into_matching();
        debug!("gabow matching of size {}", matching.size());
        Ok(matching)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    /// nonouter
    Free,
    /// the root of the current search
    Start,
    /// reached via a matched edge from the outer vertex
    Vertex(Node),
    /// part of the blossom closed by this edge
    Edge(Node, Node),
    /// visited while tracing for the join of the blossom closed by this edge
    Flag(Node, Node),
}

impl Label {
    fn is_outer(self) -> bool {
        matches!(self, Label::Start | Label::Vertex(_) | Label::Edge(..))
    }
}

struct LabelSearch<'a, G> {
    graph: &'a G,
    dummy: Node,
    mate: Vec<Node>,
    label: Vec<Label>,
    first: Vec<Node>,
    queue: VecDeque<Node>,
    /// every vertex whose label was changed in the current search
    touched: Vec<Node>,
}

impl<'a, G: AdjacencyList> LabelSearch<'a, G> {
    fn new(graph: &'a G) -> Self {
        let n = graph.len();
        let dummy = graph.number_of_nodes();
        Self {
            graph,
            dummy,
            mate: vec![dummy; n + 1],
            label: vec![Label::Free; n + 1],
            first: vec![dummy; n + 1],
            queue: VecDeque::new(),
            touched: Vec::new(),
        }
    }

    fn is_unmatched(&self, u: Node) -> bool {
        self.mate[u as usize] == self.dummy
    }

    fn is_outer(&self, u: Node) -> bool {
        self.label[u as usize].is_outer()
    }

    fn set_label(&mut self, u: Node, label: Label) {
        self.label[u as usize] = label;
        self.touched.push(u);
    }

    /// The outer vertex that labeled `u`; `u` has to carry a vertex label
    fn labeling_vertex(&self, u: Node) -> Node {
        match self.label[u as usize] {
            Label::Vertex(x) => x,
            other => panic!("vertex {u} should carry a vertex label but has {other:?}"),
        }
    }

    /// Searches for an augmenting path starting at the unmatched vertex `u` and applies it.
    /// Returns *true* if the matching grew.
    fn search_from(&mut self, u: Node) -> bool {
        let graph = self.graph;

        self.set_label(u, Label::Start);
        self.first[u as usize] = self.dummy;
        self.queue.push_back(u);

        let mut augmented = false;
        'search: while let Some(x) = self.queue.pop_front() {
            for y in graph.neighbors_of(x) {
                if self.is_unmatched(y) && y != u {
                    self.mate[y as usize] = x;
                    self.rematch(x, y);
                    augmented = true;
                    break 'search;
                }

                if self.is_outer(y) {
                    self.assign_edge_labels(x, y);
                } else {
                    let v = self.mate[y as usize];
                    if !self.is_outer(v) {
                        self.set_label(v, Label::Vertex(x));
                        self.first[v as usize] = y;
                        self.queue.push_back(v);
                    }
                }
            }
        }

        for v in self.touched.drain(..) {
            self.label[v as usize] = Label::Free;
        }
        self.label[self.dummy as usize] = Label::Free;
        self.queue.clear();

        augmented
    }

    /// Procedure L: both `x` and `y` are outer, so the edge `{x, y}` closes a blossom. All
    /// nonouter vertices on the two paths up to their first common nonouter vertex (`join`)
    /// become outer with edge label `{x, y}`.
    fn assign_edge_labels(&mut self, x: Node, y: Node) {
        let flag = Label::Flag(x, y);
        let mut r = self.first[x as usize];
        let mut s = self.first[y as usize];
        if r == s {
            return;
        }

        self.set_label(r, flag);
        self.set_label(s, flag);

        // advance both paths alternately until one reaches a vertex flagged by the other
        let join = loop {
            if s != self.dummy {
                std::mem::swap(&mut r, &mut s);
            }

            r = self.first[self.labeling_vertex(self.mate[r as usize]) as usize];
            if self.label[r as usize] == flag {
                break r;
            }
            self.set_label(r, flag);
        };
        trace!("blossom closed by ({x},{y}) joins at {join}");

        for start in [self.first[x as usize], self.first[y as usize]] {
            let mut v = start;
            while v != join {
                self.set_label(v, Label::Edge(x, y));
                self.first[v as usize] = join;
                self.queue.push_back(v);
                v = self.first[self.labeling_vertex(self.mate[v as usize]) as usize];
            }
        }

        for i in self.touched.clone() {
            if self.is_outer(i) && self.is_outer(self.first[i as usize]) {
                self.first[i as usize] = join;
            }
        }
    }

    /// Procedure R: matches `v` with `w` and rematches the alternating path from `v` back to
    /// the search root.
    fn rematch(&mut self, v: Node, w: Node) {
        let t = self.mate[v as usize];
        self.mate[v as usize] = w;
        if self.mate[t as usize] != v {
            return;
        }

        match self.label[v as usize] {
            Label::Vertex(x) => {
                self.mate[t as usize] = x;
                self.rematch(x, t);
            }
            Label::Edge(x, y) => {
                self.rematch(x, y);
                self.rematch(y, x);
            }
            other => panic!("cannot rematch {v} (mate {t}) with label {other:?}"),
        }
    }

    fn into_matching(self) -> Matching {
        let dummy = self.dummy;
        let mates = self.mate[..dummy as usize]
            .iter()
            .map(|&m| (m != dummy).then_some(m))
            .collect_vec();
        Matching::from_mates(&mates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn empty_graph() {
        let matching = GabowMatching::new().compute(&Graph::new(0)).unwrap();
        assert!(matching.is_empty());

        let matching = GabowMatching::new().compute(&Graph::new(4)).unwrap();
        assert!(matching.is_empty());
    }

    #[test]
    fn single_edge() {
        let graph = Graph::try_from_edges([(0, 1)]).unwrap();
        let matching = GabowMatching::new().compute(&graph).unwrap();
        assert_eq!(matching.edges(), vec![Edge(0, 1)]);
    }

    #[test]
    fn stem_and_triangle() {
        let graph =
            Graph::try_from_edges([(0, 1), (1, 2), (1, 3), (2, 3), (3, 4), (4, 5)]).unwrap();
        let matching = GabowMatching::new().compute(&graph).unwrap();
        assert_eq!(matching.size(), 3);
        assert_eq!(matching.edges(), vec![Edge(0, 1), Edge(2, 3), Edge(4, 5)]);
    }

    #[test]
    fn augmenting_through_blossom() {
        // 5-cycle 0..5 with pendants 5 (at 0) and 6 (at 3). After the roots 0 and 2 matched
        // 0 - 1 and 2 - 3, the search from 4 closes the blossom {0, .., 4} and leaves it at 3:
        // the augmenting path 4 - 0 - 1 - 2 - 3 - 6 uses an edge label.
        let mut graph = Graph::new(7);
        graph.connect_cycle([0, 1, 2, 3, 4]).unwrap();
        graph.add_edge(0, 5).unwrap();
        graph.add_edge(3, 6).unwrap();

        let matching = GabowMatching::new().compute(&graph).unwrap();
        assert_eq!(matching.edges(), vec![Edge(0, 4), Edge(1, 2), Edge(3, 6)]);
        matching.validate().unwrap();
    }

    #[test]
    fn odd_cycles_and_cliques() {
        for n in 3..12 {
            let mut cycle = Graph::new(n);
            cycle.connect_cycle(0..n).unwrap();
            assert_eq!(GabowMatching::new().compute(&cycle).unwrap().size(), n / 2);

            let mut clique = Graph::new(n);
            clique.connect_clique(0..n).unwrap();
            assert_eq!(GabowMatching::new().compute(&clique).unwrap().size(), n / 2);
        }
    }

    #[test]
    fn petersen_graph_has_perfect_matching() {
        let mut graph = Graph::new(10);
        graph.connect_cycle([0, 1, 2, 3, 4]).unwrap();
        graph.connect_cycle([5, 7, 9, 6, 8]).unwrap();
        for i in 0..5 {
            graph.add_edge(i, i + 5).unwrap();
        }

        let matching = GabowMatching::new().compute(&graph).unwrap();
        assert_eq!(matching.size(), 5);
    }

    #[test]
    fn disconnected_graphs() {
        let graph = Graph::with_vertices(7, [(0, 1), (1, 2), (3, 4), (4, 5), (5, 3)]).unwrap();

        let matching = GabowMatching::new().compute(&graph).unwrap();
        assert_eq!(matching.size(), 2);

        assert_eq!(
            GabowMatching::new().require_connected(true).compute(&graph),
            Err(MatchingError::DisconnectedGraph)
        );

        let connected = Graph::try_from_edges([(0, 1), (1, 2)]).unwrap();
        assert_eq!(
            GabowMatching::new()
                .require_connected(true)
                .compute(&connected)
                .unwrap()
                .size(),
            1
        );
    }

    #[test]
    fn random_against_brute_force() {
        init_test_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(0x6ab0);

        for _ in 0..300 {
            let n = rng.random_range(1..11);
            let p = rng.random_range(0.1..0.8);
            let graph = Graph::gnp(rng, n, p).unwrap();

            let matching = GabowMatching::new().compute(&graph).unwrap();
            matching.validate().unwrap();
            assert!(matching.edges().iter().all(|&Edge(u, v)| graph.has_edge(u, v)));
            assert_eq!(matching.size(), brute_force_cardinality(&graph), "{graph:?}");
        }
    }

    #[test]
    fn larger_random_graphs_are_valid() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x6ab1);

        for _ in 0..20 {
            let graph = Graph::gnm(rng, 200, 300).unwrap();
            let matching = GabowMatching::new().compute(&graph).unwrap();
            matching.validate().unwrap();

            // maximality: no edge with two free endpoints
            assert!(
                graph
                    .edges(true)
                    .all(|Edge(u, v)| matching.has_vertex(u) || matching.has_vertex(v))
            );
        }
    }
}
