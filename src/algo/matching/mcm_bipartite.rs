/*!
Maximum cardinality matching in bipartite graphs.

[`BipartiteMatching`] repeats single stages of `alternating_search` until no augmenting path
is left. The weighted bipartite algorithm reuses the same search restricted to tight edges.
*/

use std::collections::VecDeque;

use log::{debug, trace};

use super::*;

/// Maximum cardinality matching in bipartite graphs via alternating breadth-first search.
///
/// Each stage labels all free vertices of the left side `U` as roots and grows alternating
/// trees from them (unmatched edges from `U` to `V`, matched edges back). The first free
/// vertex of `V` reached closes an augmenting path, which is applied before the next stage
/// starts from scratch. A stage without augmenting path proves maximality.
#[derive(Debug, Clone, Copy, Default)]
pub struct BipartiteMatching;

impl BipartiteMatching {
    /// Creates the algorithm with its default configuration
    pub fn new() -> Self {
        Self
    }

    /// Computes a maximum cardinality matching of `graph`.
    ///
    /// # Errors
    /// [`MatchingError::NotBipartite`] if the graph turns out not to be bipartite.
    pub fn compute<G: Bipartite>(&self, graph: &G) -> Result<Matching> {
        let (left, _) = graph.partition()?;
        let mut matching = Matching::with_capacity(graph.number_of_nodes());

        let mut stage = 0;
        while let SearchOutcome::Augment(path) =
            alternating_search(graph, &left, &matching, |_, _| true)?
        {
            trace!("augmenting along {:?}", path.vertices());
            matching.augment(&path)?;
            stage += 1;
            debug!("stage {stage}: matching has size {}", matching.size());
        }

        debug!(
            "bipartite matching of size {} after {stage} augmentations",
            matching.size()
        );
        Ok(matching)
    }
}

/// Result of a single stage of [`alternating_search`]
pub(super) enum SearchOutcome {
    /// An alternating path between a free left and a free right vertex
    Augment(Path),
    /// No augmenting path exists; `labeled` holds every vertex that was reached
    Exhausted { labeled: NodeBitSet },
}

/// Runs a single stage: grows alternating trees from all free vertices of `left` along
/// unmatched edges accepted by `eligible(left, right)` and matched edges back.
pub(super) fn alternating_search<G, F>(
    graph: &G,
    left: &[Node],
    matching: &Matching,
    mut eligible: F,
) -> Result<SearchOutcome>
where
    G: AdjacencyList,
    F: FnMut(Node, Node) -> bool,
{
    let mut labeled = NodeBitSet::new(graph.number_of_nodes());
    let mut pred = vec![INVALID_NODE; graph.len()];

    let mut queue: VecDeque<Node> = left
        .iter()
        .copied()
        .filter(|&u| !matching.has_vertex(u))
        .collect();
    labeled.set_bits(queue.iter().copied());

    while let Some(u) = queue.pop_front() {
        for v in graph.neighbors_of(u) {
            if labeled.get_bit(v) || matching.mate_of(u) == Some(v) || !eligible(u, v) {
                continue;
            }

            labeled.set_bit(v);
            pred[v as usize] = u;

            match matching.mate_of(v) {
                None => {
                    let mut vertices = vec![v];
                    let mut x = u;
                    while x != INVALID_NODE {
                        vertices.push(x);
                        x = pred[x as usize];
                    }
                    vertices.reverse();
                    return Path::new(vertices).map(SearchOutcome::Augment);
                }
                Some(w) if !labeled.set_bit(w) => {
                    pred[w as usize] = v;
                    queue.push_back(w);
                }
                Some(_) => {}
            }
        }
    }

    Ok(SearchOutcome::Exhausted { labeled })
}
