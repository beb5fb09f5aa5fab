use super::*;

/// `G(n,p)` graphs contain every possible edge between `n` nodes independently with
/// probability `p`.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: u64,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the edge probability.
    /// ** Panics if `prob` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "{prob} is not a probability");
        self.p = Some(prob);
        self
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n as u64;
        self
    }
}

impl GraphGenerator for Gnp {
    /// Streams the edges of a random `G(n,p)` graph in lexicographic order.
    /// ** Panics if the probability was not set **
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let p = self.p.expect("probability of Gnp was not set");
        let n = self.n;

        (0..number_of_pairs(n))
            .filter(move |_| rng.random_bool(p))
            .map(move |x| Edge::from_u64_undir(x, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn edges_are_normalized_and_distinct() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let edges = Gnp::new().nodes(30).prob(0.3).generate(rng);

        assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
        assert!(edges.iter().tuple_windows().all(|(a, b)| a < b));

        // 435 pairs, expect about 130 edges
        assert!((80..180).contains(&edges.len()));
    }

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        assert!(Gnp::new().nodes(10).prob(0.0).generate(rng).is_empty());
        assert_eq!(Gnp::new().nodes(10).prob(1.0).generate(rng).len(), 45);
        assert!(Gnp::new().nodes(1).prob(1.0).generate(rng).is_empty());
    }
}
