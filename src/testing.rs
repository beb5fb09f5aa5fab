//! Shared test helpers: generic graph-trait tests, random bipartite instances and brute-force
//! reference matchings for small graphs.

use num::Zero;
use rand::Rng;

use crate::{gens::*, prelude::*};

/// Every graph should implement `GraphNew`, `AdjacencyList` and `GraphEdgeEditing`
/// consistently; `$graph` must support all three.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident) => {
        mod $env {
            use crate::prelude::*;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of at most `m_ub` random normalized, loop-free edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges = (0..m_ub)
                    .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized())
                    .filter(|e| !e.is_loop())
                    .collect_vec();
                edges.sort_unstable();
                edges.dedup();
                edges
            }

            #[test]
            fn graph_new() {
                for n in 0..50 {
                    let graph = <$graph>::new(n);

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert_eq!(graph.max_degree(), 0);
                }
            }

            #[test]
            fn adjacency_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    for m_ub in [n * 2, n * 5] {
                        let edges = random_edges(rng, n, m_ub);

                        let mut adj_matrix = vec![vec![false; n as usize]; n as usize];
                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize][v as usize] = true;
                            adj_matrix[v as usize][u as usize] = true;
                        }

                        let graph = <$graph>::with_vertices(n, edges.iter().copied()).unwrap();

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(edges, graph.ordered_edges(true).collect_vec());
                        assert_eq!(graph.edges(false).count(), 2 * edges.len());

                        for u in 0..n {
                            let expected = (0..n).filter(|&v| adj_matrix[u as usize][v as usize]);
                            assert_eq!(
                                graph.neighbors_of(u).sorted().collect_vec(),
                                expected.collect_vec()
                            );
                            for v in 0..n {
                                assert_eq!(graph.has_edge(u, v), adj_matrix[u as usize][v as usize]);
                            }
                        }
                    }
                }
            }

            #[test]
            fn graph_edge_editing() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for n in [10 as NumNodes, 20] {
                    let mut graph = <$graph>::new(n);
                    let mut m = 0;

                    for _ in 0..(3 * n) {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        if u == v {
                            assert_eq!(graph.try_add_edge(u, v), Err(MatchingError::SelfLoop(u)));
                            continue;
                        }

                        let existed = graph.has_edge(u, v);
                        assert_eq!(graph.try_add_edge(u, v), Ok(existed));
                        if !existed {
                            m += 1;
                        }

                        assert!(graph.has_edge(v, u));
                        assert_eq!(graph.number_of_edges(), m);
                        assert_eq!(
                            graph.add_edge(v, u),
                            Err(MatchingError::DuplicateEdge(Edge(v, u)))
                        );
                    }

                    assert!(matches!(
                        graph.try_add_edge(0, n),
                        Err(MatchingError::InvalidVertexNumbering(_))
                    ));
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Installs `env_logger` for the test harness; repeated calls are no-ops
pub(crate) fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a random bipartite graph on `n` nodes: every node picks a side uniformly at random
/// and every pair of nodes on different sides is connected with probability `p`.
pub(crate) fn random_bigraph<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Bigraph {
    let right = NodeBitSet::new_with_bits_set(n, (0..n).filter(|_| rng.random_bool(0.5)));
    let edges: Vec<Edge> = Gnp::new()
        .nodes(n)
        .prob(p)
        .stream(rng)
        .filter(|&Edge(u, v)| right.get_bit(u) != right.get_bit(v))
        .collect();

    Bigraph::with_vertices(n, edges).unwrap()
}

/// Creates the complete bipartite graph with sides `0..n` and `n..2n`
pub(crate) fn complete_bigraph(n: NumNodes) -> Bigraph {
    let mut graph = Graph::new(2 * n);
    graph.connect_biclique(0..n, n..2 * n).unwrap();
    Bigraph::try_from_graph(graph).unwrap()
}

/// Calls `visit` for every matching of `graph` (including the empty one)
fn for_each_matching<G, F>(graph: &G, mut visit: F)
where
    G: AdjacencyList,
    F: FnMut(&[Edge]),
{
    fn recurse<G, F>(
        graph: &G,
        u: Node,
        decided: &mut NodeBitSet,
        chosen: &mut Vec<Edge>,
        visit: &mut F,
    ) where
        G: AdjacencyList,
        F: FnMut(&[Edge]),
    {
        let Some(u) = (u..graph.number_of_nodes()).find(|&x| !decided.get_bit(x)) else {
            visit(chosen);
            return;
        };

        decided.set_bit(u);

        // leave `u` unmatched
        recurse(graph, u + 1, decided, chosen, visit);

        for v in graph.neighbors_of(u) {
            if decided.get_bit(v) {
                continue;
            }

            decided.set_bit(v);
            chosen.push(Edge(u, v).normalized());
            recurse(graph, u + 1, decided, chosen, visit);
            chosen.pop();
            decided.clear_bit(v);
        }

        decided.clear_bit(u);
    }

    let mut decided = NodeBitSet::new(graph.number_of_nodes());
    recurse(graph, 0, &mut decided, &mut Vec::new(), &mut visit);
}

/// Size of a maximum cardinality matching, computed by exhaustive search
pub(crate) fn brute_force_cardinality<G: AdjacencyList>(graph: &G) -> NumNodes {
    let mut best = 0;
    for_each_matching(graph, |m| best = best.max(m.len() as NumNodes));
    best
}

/// Weight of a maximum weighted matching, computed by exhaustive search
pub(crate) fn brute_force_weight<G: EdgeWeights>(graph: &G) -> G::Weight {
    brute_force_best(graph, |_, w| ((), w)).1
}

/// Cardinality and weight of the heaviest matching among all maximum cardinality matchings
pub(crate) fn brute_force_max_cardinality_weight<G: EdgeWeights>(
    graph: &G,
) -> (NumNodes, G::Weight) {
    let (size, weight) = brute_force_best(graph, |size, w| (size, w));
    (size, weight)
}

/// Maximizes `key(size, weight)` (lexicographically) over all matchings
fn brute_force_best<G, K, F>(graph: &G, key: F) -> (K, G::Weight)
where
    G: EdgeWeights,
    K: PartialOrd + Copy,
    F: Fn(NumNodes, G::Weight) -> (K, G::Weight),
{
    let mut best = key(0, G::Weight::zero());
    for_each_matching(graph, |m| {
        let weight = m
            .iter()
            .fold(G::Weight::zero(), |acc, &Edge(u, v)| acc + graph.w(u, v).unwrap());
        let candidate = key(m.len() as NumNodes, weight);
        if candidate > best {
            best = candidate;
        }
    });
    best
}
