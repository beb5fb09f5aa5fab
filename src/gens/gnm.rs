use fxhash::FxHashSet;

use super::*;

/// Generator for uniform `G(n,m)` random graphs with `n` nodes and exactly `m` edges.
///
/// Edges are drawn by rejection sampling over the `n choose 2` vertex pairs, which is fast as
/// long as `m` is not close to the number of pairs.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnm {
    n: u64,
    m: u64,
}

impl Gnm {
    /// Creates a new empty `G(n,m)` generator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for Gnm {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n as u64;
        self
    }
}

impl NumEdgesGen for Gnm {
    fn edges(mut self, m: NumEdges) -> Self {
        self.m = m as u64;
        self
    }
}

impl GraphGenerator for Gnm {
    /// Streams `m` distinct uniformly random edges in random order.
    /// ** Panics if `m` exceeds the number of vertex pairs **
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let n = self.n;
        let pairs = number_of_pairs(n);
        assert!(
            self.m <= pairs,
            "cannot place {} edges between {n} nodes",
            self.m
        );

        let mut chosen = FxHashSet::default();
        let mut remaining = self.m;
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }

            loop {
                let x = rng.random_range(0..pairs);
                if chosen.insert(x) {
                    remaining -= 1;
                    return Some(Edge::from_u64_undir(x, n));
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn exact_number_of_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        for (n, m) in [(2, 1), (10, 0), (10, 45), (50, 100)] {
            let edges = Gnm::new().nodes(n).edges(m).generate(rng);
            assert_eq!(edges.len(), m as usize);
            assert_eq!(edges.iter().unique().count(), m as usize);
            assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop() && e.1 < n));
        }
    }

    #[test]
    #[should_panic]
    fn too_many_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        Gnm::new().nodes(4).edges(7).generate(rng);
    }
}
