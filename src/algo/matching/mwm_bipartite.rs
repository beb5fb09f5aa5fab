/*!
Maximum weighted matching in bipartite graphs.

[`BipartiteWeightedMatching`] maintains vertex duals and grows the matching along tight edges
with the alternating search of the cardinality algorithm.
*/

use log::{debug, trace};
use num::Zero;

use super::{
    mcm_bipartite::{SearchOutcome, alternating_search},
    *,
};

/// Maximum weighted matching in bipartite graphs via the primal-dual (Hungarian) method.
///
/// Calling the sides of the bipartition *dogs* (left) and *cats* (right), every vertex `v`
/// carries a dual `u[v]` such that `u[dog] + u[cat] >= w(dog, cat)` for every edge. Dogs
/// start with the maximum edge weight, cats with `0`. Each stage searches an augmenting path
/// from the free dogs that only uses *tight* edges (slack `0`). If there is none, the duals
/// are adjusted by
///
/// - `d1`, the minimum dual of a reached dog, and
/// - `d2`, the minimum slack between a reached dog and an unreached cat,
///
/// which makes at least one more edge tight (`d2 < d1`) or proves optimality (`d1 <= d2`): at
/// that point every free dog could only reach a dual of `0`, so no augmentation can increase
/// the weight.
///
/// The result is a matching of maximum weight, which need not have maximum cardinality.
/// Edges of negative weight are never matched.
#[derive(Debug, Clone, Copy, Default)]
pub struct BipartiteWeightedMatching;

impl BipartiteWeightedMatching {
    /// Creates the algorithm with its default configuration
    pub fn new() -> Self {
        Self
    }

    /// Computes a maximum weighted matching of `graph`.
    ///
    /// # Errors
    /// [`MatchingError::NotBipartite`] if the graph turns out not to be bipartite.
    pub fn compute<G>(&self, graph: &G) -> Result<Matching>
    where
        G: Bipartite + EdgeWeights,
    {
        let (dogs, cats) = graph.partition()?;
        let zero = G::Weight::zero();
        let start = graph.max_w().map_or(zero, |w| w.maximum(zero));

        let mut dual = vec![zero; graph.len()];
        for &dog in &dogs {
            dual[dog as usize] = start;
        }

        let slack = |dual: &[G::Weight], dog: Node, cat: Node| -> Result<G::Weight> {
            Ok(dual[dog as usize] + dual[cat as usize] - graph.w(dog, cat)?)
        };

        let mut matching = Matching::with_capacity(graph.number_of_nodes());
        let mut stage = 0;
        loop {
            stage += 1;

            let mut weight_error = None;
            let outcome = alternating_search(graph, &dogs, &matching, |dog, cat| {
                match slack(&dual, dog, cat) {
                    Ok(s) => s <= zero,
                    Err(e) => {
                        weight_error.get_or_insert(e);
                        false
                    }
                }
            })?;
            if let Some(e) = weight_error {
                return Err(e);
            }

            let labeled = match outcome {
                SearchOutcome::Augment(path) => {
                    trace!("augmenting along {:?}", path.vertices());
                    matching.augment(&path)?;
                    debug!("stage {stage}: matching has size {}", matching.size());
                    continue;
                }
                SearchOutcome::Exhausted { labeled } => labeled,
            };

            let reached_dogs = dogs.iter().copied().filter(|&d| labeled.get_bit(d));

            let Some(d1) = reached_dogs.clone().map(|d| dual[d as usize]).reduce(Weight::minimum)
            else {
                break;
            };

            let mut d2: Option<G::Weight> = None;
            for dog in reached_dogs.clone() {
                for cat in graph.neighbors_of(dog) {
                    if !labeled.get_bit(cat) {
                        let s = slack(&dual, dog, cat)?;
                        d2 = Some(d2.map_or(s, |d| d.minimum(s)));
                    }
                }
            }

            let d = match d2 {
                Some(d2) if d2 < d1 => d2,
                _ => {
                    trace!("stage {stage}: free dogs reached dual {d1}, optimum found");
                    break;
                }
            };

            trace!("stage {stage}: adjusting duals by {d}");
            for dog in reached_dogs {
                dual[dog as usize] = dual[dog as usize] - d;
            }
            for &cat in cats.iter().filter(|&&c| labeled.get_bit(c)) {
                dual[cat as usize] = dual[cat as usize] + d;
            }
        }

        debug!(
            "bipartite weighted matching of size {} after {stage} stages",
            matching.size()
        );
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn weight_dominates() {
        let graph = WeightedBigraph::try_from_weighted_edges([(0, 1, 1), (0, 2, 2)]).unwrap();
        let matching = BipartiteWeightedMatching::new().compute(&graph).unwrap();
        assert_eq!(matching.edges(), vec![Edge(0, 2)]);
        assert_eq!(matching.weight(&graph), Ok(2));
    }

    #[test]
    fn heavy_edge_beats_cardinality() {
        let graph =
            WeightedBigraph::try_from_weighted_edges([(0, 1, 3), (1, 2, 7), (2, 3, 3)]).unwrap();
        let matching = BipartiteWeightedMatching::new().compute(&graph).unwrap();
        assert_eq!(matching.edges(), vec![Edge(1, 2)]);

        let graph =
            WeightedBigraph::try_from_weighted_edges([(0, 1, 4), (1, 2, 7), (2, 3, 4)]).unwrap();
        let matching = BipartiteWeightedMatching::new().compute(&graph).unwrap();
        assert_eq!(matching.edges(), vec![Edge(0, 1), Edge(2, 3)]);
    }

    #[test]
    fn negative_and_empty() {
        let graph =
            WeightedBigraph::try_from_weighted_edges([(0, 1, -2), (1, 2, -1)]).unwrap();
        let matching = BipartiteWeightedMatching::new().compute(&graph).unwrap();
        assert!(matching.is_empty());

        let graph = WeightedBigraph::<i32>::with_vertices(3, []).unwrap();
        let matching = BipartiteWeightedMatching::new().compute(&graph).unwrap();
        assert!(matching.is_empty());
    }

    #[test]
    fn assignment_problem() {
        // dogs 0..3, cats 3..6; the optimal assignment 0-4, 1-3, 2-5 has weight 7 + 6 + 9
        let weights = [[5, 7, 1], [6, 4, 3], [2, 8, 9]];
        let graph = WeightedBigraph::try_from_weighted_edges(
            (0..3).flat_map(|d| (0..3).map(move |c| (d, 3 + c, weights[d as usize][c as usize]))),
        )
        .unwrap();

        let matching = BipartiteWeightedMatching::new().compute(&graph).unwrap();
        assert_eq!(matching.weight(&graph), Ok(22));
        assert_eq!(matching.edges(), vec![Edge(0, 4), Edge(1, 3), Edge(2, 5)]);
    }

    #[test]
    fn float_weights() {
        let graph = WeightedBigraph::try_from_weighted_edges([
            (0, 1, std::f64::consts::PI),
            (1, 2, std::f64::consts::E),
            (2, 3, 3.0),
            (3, 0, std::f64::consts::SQRT_2),
        ])
        .unwrap();

        let matching = BipartiteWeightedMatching::new().compute(&graph).unwrap();
        assert_eq!(matching.edges(), vec![Edge(0, 1), Edge(2, 3)]);
    }

    #[test]
    fn random_against_brute_force() {
        init_test_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(0x77);

        for _ in 0..300 {
            let n = rng.random_range(1..11);
            let p = rng.random_range(0.2..0.9);
            let graph = random_bigraph(rng, n, p);
            let graph = random_weights(rng, graph, -5..20);

            let matching = BipartiteWeightedMatching::new().compute(&graph).unwrap();
            matching.validate().unwrap();
            assert_eq!(matching.weight(&graph).unwrap(), brute_force_weight(&graph));
        }
    }
}
