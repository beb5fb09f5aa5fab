//! Consistency checks for the internal state of [`BlossomMatching`](super::BlossomMatching).
//!
//! All checks compare weights for exact equality and are therefore only meaningful for integer
//! weights. Violations are bugs and panic.

use super::mwm_general::{BlossomState, Label};
use crate::ops::Weight;

impl<W: Weight> BlossomState<W> {
    /// Checks that the cached least-slack edge of every free vertex towards an S-vertex is
    /// indeed of least slack
    pub(super) fn check_delta2(&self) {
        for v in 0..self.n {
            if self.label[self.in_blossom[v]] != Label::Free {
                continue;
            }

            let mut least: Option<W> = None;
            for &p in &self.neighbor_endpoints[v] {
                let w = self.endpoint[p];
                if self.label[self.in_blossom[w]] == Label::S {
                    let d = self.slack(p / 2);
                    if least.is_none_or(|l| d < l) {
                        least = Some(d);
                    }
                }
            }

            match (least, self.best_edge[v]) {
                (None, None) => {}
                (Some(d), Some(k)) => assert!(
                    d == self.slack(k),
                    "vertex {v}: cached best edge {k} has slack {} but {d} is possible",
                    self.slack(k)
                ),
                (least, cached) => {
                    panic!("vertex {v}: least slack {least:?} but cached best edge {cached:?}")
                }
            }
        }
    }

    /// Checks that the least slack of an edge between two different top-level S-blossoms
    /// equals the minimum over the cached best edges of all S-blossoms
    pub(super) fn check_delta3(&self) {
        let mut brute_force: Option<W> = None;
        let mut cached: Option<W> = None;

        for b in 0..2 * self.n {
            if self.blossom_parent[b].is_some() || self.label[b] != Label::S {
                continue;
            }

            for v in self.blossom_leaves(b) {
                for &p in &self.neighbor_endpoints[v] {
                    let w = self.endpoint[p];
                    if self.in_blossom[w] != b && self.label[self.in_blossom[w]] == Label::S {
                        let d = self.slack(p / 2);
                        if brute_force.is_none_or(|x| d < x) {
                            brute_force = Some(d);
                        }
                    }
                }
            }

            if let Some(k) = self.best_edge[b] {
                let (i, j, _) = self.edges[k];
                let (bi, bj) = (self.in_blossom[i], self.in_blossom[j]);
                assert!(
                    (bi == b) != (bj == b),
                    "best edge {k} of blossom {b} does not leave it"
                );
                assert!(
                    self.label[bi] == Label::S && self.label[bj] == Label::S,
                    "best edge {k} of blossom {b} does not connect two S-blossoms"
                );

                let d = self.slack(k);
                if cached.is_none_or(|x| d < x) {
                    cached = Some(d);
                }
            }
        }

        assert!(
            brute_force == cached,
            "least S-S slack is {brute_force:?} but cached best edges give {cached:?}"
        );
    }

    /// Checks that the final matching and duals form an optimal primal-dual pair
    pub(super) fn verify_optimum(&self) {
        let zero = W::zero();
        let n = self.n;

        let min_vertex_dual = self.dual[..n]
            .iter()
            .copied()
            .reduce(Weight::minimum)
            .unwrap_or(zero);
        // with max_cardinality the vertex duals may become negative; shift them
        let offset = if self.max_cardinality {
            (-min_vertex_dual).maximum(zero)
        } else {
            zero
        };

        assert!(min_vertex_dual + offset >= zero, "negative vertex dual");
        assert!(
            self.dual[n..].iter().all(|&d| d >= zero),
            "negative blossom dual"
        );

        let ancestors = |v: usize| {
            let mut chain = vec![v];
            while let Some(parent) = self.blossom_parent[chain[chain.len() - 1]] {
                chain.push(parent);
            }
            chain.reverse();
            chain
        };

        for (k, &(i, j, w)) in self.edges.iter().enumerate() {
            let mut s = self.dual[i] + self.dual[j] - W::two() * w;
            for (bi, bj) in ancestors(i).into_iter().zip(ancestors(j)) {
                if bi != bj {
                    break;
                }
                s = s + W::two() * self.dual[bi];
            }
            assert!(s >= zero, "edge ({i},{j}) has negative slack {s}");

            let i_matched = self.mate[i].map(|p| p / 2) == Some(k);
            let j_matched = self.mate[j].map(|p| p / 2) == Some(k);
            if i_matched || j_matched {
                assert!(i_matched && j_matched, "edge ({i},{j}) is matched on one side only");
                assert!(s == zero, "matched edge ({i},{j}) has slack {s}");
            }
        }

        for v in 0..n {
            assert!(
                self.mate[v].is_some() || self.dual[v] + offset == zero,
                "free vertex {v} has dual {}",
                self.dual[v]
            );
        }

        for b in n..2 * n {
            if self.blossom_base[b].is_none() || self.dual[b] <= zero {
                continue;
            }

            let endps = &self.blossom_endpoints[b];
            assert!(endps.len() % 2 == 1, "blossom {b} has an even cycle");
            for &p in endps.iter().skip(1).step_by(2) {
                assert_eq!(self.mate[self.endpoint[p]], Some(p ^ 1));
                assert_eq!(self.mate[self.endpoint[p ^ 1]], Some(p));
            }
        }
    }
}
