/*!
Maximum weighted matching in general graphs.

This is the `O(n^3)` primal-dual blossom algorithm of Edmonds as refined by Gabow and Galil,
following the formulation by Joris van Rantwijk:

> *Z. Galil. Efficient Algorithms for Finding Maximum Matching in Graphs. ACM Computing
> Surveys 18.1 (1986): 23–38.*

# Representation

Edge `k = {i, j}` has the two *endpoints* `2k` (pointing to `i`) and `2k + 1` (pointing to `j`);
`p ^ 1` is the remote endpoint of `p`. Indices `0..n` denote vertices (trivial blossoms),
indices `n..2n` are slots for non-trivial blossoms which are recycled through a free list.

Vertex duals are stored doubled, so the slack of an edge is `u_i + u_j - 2 w_ij` and all
duals stay integral for integer weights.
*/

use itertools::Itertools;
use log::{debug, trace};

use super::*;

/// Maximum weighted matching in general graphs (Edmonds' blossom algorithm with duals).
///
/// # Examples
/// ```
/// use graph_matching::{prelude::*, algo::*};
///
/// let graph = WeightedGraph::try_from_weighted_edges([(0, 1, 5), (1, 2, 11), (2, 3, 5)]).unwrap();
///
/// let heaviest = BlossomMatching::new().compute(&graph).unwrap();
/// assert_eq!(heaviest.edges(), vec![Edge(1, 2)]);
///
/// let perfect = BlossomMatching::new().max_cardinality(true).compute(&graph).unwrap();
/// assert_eq!(perfect.edges(), vec![Edge(0, 1), Edge(2, 3)]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BlossomMatching {
    max_cardinality: bool,
    verify_deltas: bool,
    verify_optimum: bool,
}

impl BlossomMatching {
    /// Creates the algorithm with its default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// If set, only matchings of maximum cardinality are considered and the heaviest of them
    /// is returned
    pub fn max_cardinality(mut self, max_cardinality: bool) -> Self {
        self.max_cardinality = max_cardinality;
        self
    }

    /// If set, the cached least-slack edges are compared against a brute-force computation
    /// before every dual update. Expensive; meant for debugging with integer weights.
    pub fn verify_deltas(mut self, verify: bool) -> Self {
        self.verify_deltas = verify;
        self
    }

    /// If set, the final primal and dual solution is checked for optimality (feasibility and
    /// complementary slackness). Meant for debugging with integer weights.
    pub fn verify_optimum(mut self, verify: bool) -> Self {
        self.verify_optimum = verify;
        self
    }

    /// Computes a maximum weighted matching of `graph`.
    ///
    /// ** Panics if an enabled verification fails **
    pub fn compute<G: EdgeWeights>(&self, graph: &G) -> Result<Matching> {
        let edges = graph
            .weighted_edges()
            .map(|(Edge(u, v), w)| (u as usize, v as usize, w))
            .collect_vec();

        if edges.is_empty() {
            return Ok(Matching::with_capacity(graph.number_of_nodes()));
        }

        let mut state = BlossomState::new(graph.len(), edges, self.max_cardinality);
        state.solve(self.verify_deltas);
        if self.verify_optimum {
            state.verify_optimum();
        }

        let matching = state.into_matching();
        debug_assert!(matching.validate().is_ok());
        debug!(
            "blossom matching of size {} (max_cardinality: {})",
            matching.size(),
            self.max_cardinality
        );
        Ok(matching)
    }
}

/// Label of a top-level blossom (or of a single vertex inside a T-blossom)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Label {
    Free,
    S,
    T,
    /// S-blossom visited while tracing back from both ends of an edge
    Breadcrumb,
}

/// Outcome of the dual update at the end of a sub-stage
#[derive(Debug, Clone, Copy)]
enum DeltaKind {
    /// All free vertices reached dual zero; the matching is optimal
    Optimum,
    /// The edge between an S-vertex and a free vertex became tight
    SToFree(usize),
    /// The edge between two S-blossoms became tight
    SToS(usize),
    /// The T-blossom reached dual zero and has to be expanded
    ExpandT(usize),
}

pub(super) struct BlossomState<W> {
    pub(super) n: usize,
    pub(super) max_cardinality: bool,
    pub(super) edges: Vec<(usize, usize, W)>,
    /// vertex of each endpoint
    pub(super) endpoint: Vec<usize>,
    /// remote endpoints of the edges incident to each vertex
    pub(super) neighbor_endpoints: Vec<Vec<usize>>,
    /// remote endpoint of the matched edge of each vertex
    pub(super) mate: Vec<Option<usize>>,
    pub(super) label: Vec<Label>,
    /// endpoint through which a top-level blossom (or T-vertex) obtained its label
    pub(super) label_end: Vec<Option<usize>>,
    /// top-level blossom containing each vertex
    pub(super) in_blossom: Vec<usize>,
    pub(super) blossom_parent: Vec<Option<usize>>,
    /// sub-blossoms of each blossom, in cyclic order starting at the base
    pub(super) blossom_children: Vec<Vec<usize>>,
    pub(super) blossom_base: Vec<Option<usize>>,
    /// `blossom_endpoints[b][i]` connects `blossom_children[b][i]` with the next child
    pub(super) blossom_endpoints: Vec<Vec<usize>>,
    /// least-slack edge to an S-blossom (for free vertices and S-blossoms)
    pub(super) best_edge: Vec<Option<usize>>,
    /// least-slack edges from a non-trivial S-blossom to each neighboring S-blossom
    pub(super) blossom_best_edges: Vec<Option<Vec<usize>>>,
    pub(super) unused_blossoms: Vec<usize>,
    pub(super) dual: Vec<W>,
    /// edges known to be tight in the current stage
    pub(super) allowed: Vec<bool>,
    /// S-vertices still to be scanned
    pub(super) queue: Vec<usize>,
}

/// Reads `list[j]` with Python-style wrap-around for negative `j`
fn cyclic(list: &[usize], j: isize) -> usize {
    list[j.rem_euclid(list.len() as isize) as usize]
}

impl<W: Weight> BlossomState<W> {
    fn new(n: usize, edges: Vec<(usize, usize, W)>, max_cardinality: bool) -> Self {
        let zero = W::zero();
        let max_weight = edges
            .iter()
            .map(|&(_, _, w)| w)
            .fold(zero, Weight::maximum);

        let endpoint = edges.iter().flat_map(|&(i, j, _)| [i, j]).collect_vec();
        let mut neighbor_endpoints = vec![Vec::new(); n];
        for (k, &(i, j, _)) in edges.iter().enumerate() {
            neighbor_endpoints[i].push(2 * k + 1);
            neighbor_endpoints[j].push(2 * k);
        }

        let mut dual = vec![max_weight; n];
        dual.resize(2 * n, zero);

        let num_edges = edges.len();
        Self {
            n,
            max_cardinality,
            edges,
            endpoint,
            neighbor_endpoints,
            mate: vec![None; n],
            label: vec![Label::Free; 2 * n],
            label_end: vec![None; 2 * n],
            in_blossom: (0..n).collect(),
            blossom_parent: vec![None; 2 * n],
            blossom_children: vec![Vec::new(); 2 * n],
            blossom_base: (0..n).map(Some).chain((0..n).map(|_| None)).collect(),
            blossom_endpoints: vec![Vec::new(); 2 * n],
            best_edge: vec![None; 2 * n],
            blossom_best_edges: vec![None; 2 * n],
            unused_blossoms: (n..2 * n).collect(),
            dual,
            allowed: vec![false; num_edges],
            queue: Vec::new(),
        }
    }

    pub(super) fn slack(&self, k: usize) -> W {
        let (i, j, w) = self.edges[k];
        self.dual[i] + self.dual[j] - W::two() * w
    }

    pub(super) fn base_of(&self, b: usize) -> usize {
        self.blossom_base[b].unwrap_or_else(|| panic!("blossom {b} is not in use"))
    }

    /// All vertices contained (recursively) in blossom `b`
    pub(super) fn blossom_leaves(&self, b: usize) -> Vec<usize> {
        let mut leaves = Vec::new();
        self.collect_leaves(b, &mut leaves);
        leaves
    }

    fn collect_leaves(&self, b: usize, leaves: &mut Vec<usize>) {
        if b < self.n {
            leaves.push(b);
        } else {
            for &t in &self.blossom_children[b] {
                self.collect_leaves(t, leaves);
            }
        }
    }

    fn matched_vertices(&self) -> usize {
        self.mate.iter().flatten().count()
    }

    fn solve(&mut self, verify_deltas: bool) {
        for stage in 0..self.n {
            self.label.fill(Label::Free);
            self.best_edge.fill(None);
            for b in self.n..2 * self.n {
                self.blossom_best_edges[b] = None;
            }
            self.allowed.fill(false);
            self.queue.clear();

            for v in 0..self.n {
                if self.mate[v].is_none() && self.label[self.in_blossom[v]] == Label::Free {
                    self.assign_label(v, Label::S, None);
                }
            }

            let augmented = loop {
                if self.scan_queue() {
                    break true;
                }

                if verify_deltas {
                    self.check_delta2();
                    self.check_delta3();
                }

                let (delta, kind) = self.compute_delta();
                trace!("stage {stage}: dual update by {delta} ({kind:?})");
                self.update_duals(delta);

                match kind {
                    DeltaKind::Optimum => break false,
                    DeltaKind::SToFree(k) => {
                        self.allowed[k] = true;
                        let (mut i, j, _) = self.edges[k];
                        if self.label[self.in_blossom[i]] == Label::Free {
                            i = j;
                        }
                        assert_eq!(self.label[self.in_blossom[i]], Label::S);
                        self.queue.push(i);
                    }
                    DeltaKind::SToS(k) => {
                        self.allowed[k] = true;
                        let (i, _, _) = self.edges[k];
                        assert_eq!(self.label[self.in_blossom[i]], Label::S);
                        self.queue.push(i);
                    }
                    DeltaKind::ExpandT(b) => self.expand_blossom(b, false),
                }
            };

            if !augmented {
                debug!("stage {stage}: no augmenting path, optimum reached");
                break;
            }
            debug!(
                "stage {stage}: augmented to {} matched edges",
                self.matched_vertices() / 2
            );

            let zero = W::zero();
            for b in self.n..2 * self.n {
                if self.blossom_parent[b].is_none()
                    && self.blossom_base[b].is_some()
                    && self.label[b] == Label::S
                    && self.dual[b] == zero
                {
                    self.expand_blossom(b, true);
                }
            }
        }
    }

    /// Scans S-vertices until the queue is empty or an augmentation happened.
    /// Returns *true* in the latter case.
    fn scan_queue(&mut self) -> bool {
        let zero = W::zero();

        while let Some(v) = self.queue.pop() {
            assert_eq!(self.label[self.in_blossom[v]], Label::S);

            for idx in 0..self.neighbor_endpoints[v].len() {
                let p = self.neighbor_endpoints[v][idx];
                let k = p / 2;
                let w = self.endpoint[p];

                if self.in_blossom[v] == self.in_blossom[w] {
                    continue;
                }

                if !self.allowed[k] {
                    let kslack = self.slack(k);
                    if kslack > zero {
                        self.record_best_edge(v, w, k, kslack);
                        continue;
                    }
                    self.allowed[k] = true;
                }

                match self.label[self.in_blossom[w]] {
                    Label::Free => {
                        // C1: w becomes T, its mate S
                        self.assign_label(w, Label::T, Some(p ^ 1));
                    }
                    Label::S => match self.scan_blossom(v, w) {
                        // C2: either a new blossom or an augmenting path
                        Some(base) => self.add_blossom(base, k),
                        None => {
                            self.augment_matching(k);
                            return true;
                        }
                    },
                    _ => {
                        // C3: w lies in a T-blossom but was not reached yet
                        if self.label[w] == Label::Free {
                            self.label[w] = Label::T;
                            self.label_end[w] = Some(p ^ 1);
                        }
                    }
                }
            }
        }

        false
    }

    fn record_best_edge(&mut self, v: usize, w: usize, k: usize, kslack: W) {
        let target = if self.label[self.in_blossom[w]] == Label::S {
            self.in_blossom[v]
        } else if self.label[w] == Label::Free {
            w
        } else {
            return;
        };

        if self.best_edge[target].is_none_or(|e| kslack < self.slack(e)) {
            self.best_edge[target] = Some(k);
        }
    }

    /// Labels the top-level blossom containing `w` with `t` (S or T) reached through
    /// endpoint `p`. A T-label propagates an S-label to the mate of the blossom base.
    fn assign_label(&mut self, w: usize, t: Label, p: Option<usize>) {
        let b = self.in_blossom[w];
        assert!(
            self.label[w] == Label::Free && self.label[b] == Label::Free,
            "cannot label {w} (blossom {b}) as {t:?}: labels are {:?}/{:?}",
            self.label[w],
            self.label[b]
        );

        self.label[w] = t;
        self.label[b] = t;
        self.label_end[w] = p;
        self.label_end[b] = p;
        self.best_edge[w] = None;
        self.best_edge[b] = None;

        match t {
            Label::S => {
                let leaves = self.blossom_leaves(b);
                self.queue.extend(leaves);
            }
            Label::T => {
                let base = self.base_of(b);
                let m = self.mate[base]
                    .unwrap_or_else(|| panic!("base {base} of T-blossom {b} is unmatched"));
                self.assign_label(self.endpoint[m], Label::S, Some(m ^ 1));
            }
            other => panic!("{other:?} is not a search label"),
        }
    }

    /// Traces back from the S-vertices `v` and `w` towards the roots of their alternating
    /// trees. Returns the base of the first common blossom (a new blossom has been found) or
    /// `None` if the trees are disjoint (an augmenting path has been found).
    fn scan_blossom(&mut self, v: usize, w: usize) -> Option<usize> {
        let mut path = Vec::new();
        let mut base = None;

        let (mut v, mut w) = (Some(v), Some(w));
        while let Some(x) = v {
            let b = self.in_blossom[x];
            if self.label[b] == Label::Breadcrumb {
                base = Some(self.base_of(b));
                break;
            }

            assert_eq!(self.label[b], Label::S);
            path.push(b);
            self.label[b] = Label::Breadcrumb;

            v = self.label_end[b].map(|p| {
                let t = self.in_blossom[self.endpoint[p]];
                assert_eq!(self.label[t], Label::T);
                let q = self.label_end[t]
                    .unwrap_or_else(|| panic!("T-blossom {t} has no label endpoint"));
                self.endpoint[q]
            });

            if w.is_some() {
                std::mem::swap(&mut v, &mut w);
            }
        }

        for b in path {
            self.label[b] = Label::S;
        }

        base
    }

    /// Contracts the cycle closed by the tight edge `k` between two S-blossoms whose trees
    /// meet at `base` into a new S-blossom.
    fn add_blossom(&mut self, base: usize, k: usize) {
        let (v, w, _) = self.edges[k];
        let bb = self.in_blossom[base];
        let mut bv = self.in_blossom[v];
        let mut bw = self.in_blossom[w];

        let b = self
            .unused_blossoms
            .pop()
            .unwrap_or_else(|| panic!("no free blossom slot left"));
        trace!("new blossom {b} with base {base} closed by edge {k}");

        self.blossom_base[b] = Some(base);
        self.blossom_parent[b] = None;
        self.blossom_parent[bb] = Some(b);

        let mut children = Vec::new();
        let mut endps = Vec::new();

        while bv != bb {
            self.blossom_parent[bv] = Some(b);
            children.push(bv);
            let p = self.label_end[bv].expect("sub-blossom on the cycle has a label endpoint");
            endps.push(p);
            bv = self.in_blossom[self.endpoint[p]];
        }

        children.push(bb);
        children.reverse();
        endps.reverse();
        endps.push(2 * k);

        while bw != bb {
            self.blossom_parent[bw] = Some(b);
            children.push(bw);
            let p = self.label_end[bw].expect("sub-blossom on the cycle has a label endpoint");
            endps.push(p ^ 1);
            bw = self.in_blossom[self.endpoint[p]];
        }

        assert_eq!(self.label[bb], Label::S);
        self.label[b] = Label::S;
        self.label_end[b] = self.label_end[bb];
        self.dual[b] = W::zero();

        self.blossom_children[b] = children.clone();
        self.blossom_endpoints[b] = endps;

        for v in self.blossom_leaves(b) {
            if self.label[self.in_blossom[v]] == Label::T {
                // former T-vertices are now S and have to be scanned
                self.queue.push(v);
            }
            self.in_blossom[v] = b;
        }

        let mut best_edge_to: Vec<Option<usize>> = vec![None; 2 * self.n];
        for bv in children {
            let candidates = match self.blossom_best_edges[bv].take() {
                Some(list) => list,
                None => self
                    .blossom_leaves(bv)
                    .into_iter()
                    .flat_map(|v| self.neighbor_endpoints[v].iter().map(|p| p / 2))
                    .collect_vec(),
            };

            for k in candidates {
                let (i, j, _) = self.edges[k];
                let j = if self.in_blossom[j] == b { i } else { j };
                let bj = self.in_blossom[j];
                if bj != b
                    && self.label[bj] == Label::S
                    && best_edge_to[bj].is_none_or(|e| self.slack(k) < self.slack(e))
                {
                    best_edge_to[bj] = Some(k);
                }
            }

            self.best_edge[bv] = None;
        }

        let best_edges = best_edge_to.into_iter().flatten().collect_vec();
        self.best_edge[b] = best_edges
            .iter()
            .copied()
            .reduce(|best, k| if self.slack(k) < self.slack(best) { k } else { best });
        self.blossom_best_edges[b] = Some(best_edges);
    }

    /// Dissolves blossom `b` into its sub-blossoms. Mid-stage (`!endstage`) a T-blossom's
    /// children are relabeled so that the alternating tree stays consistent.
    fn expand_blossom(&mut self, b: usize, endstage: bool) {
        trace!("expanding blossom {b} (endstage: {endstage})");
        let zero = W::zero();

        for s in self.blossom_children[b].clone() {
            self.blossom_parent[s] = None;
            if s < self.n {
                self.in_blossom[s] = s;
            } else if endstage && self.dual[s] == zero {
                self.expand_blossom(s, endstage);
            } else {
                for v in self.blossom_leaves(s) {
                    self.in_blossom[v] = s;
                }
            }
        }

        if !endstage && self.label[b] == Label::T {
            self.relabel_expanded_t_blossom(b);
        }

        self.label[b] = Label::Free;
        self.label_end[b] = None;
        self.blossom_children[b].clear();
        self.blossom_endpoints[b].clear();
        self.blossom_base[b] = None;
        self.blossom_best_edges[b] = None;
        self.best_edge[b] = None;
        self.unused_blossoms.push(b);
    }

    /// Walks from the child through which the T-blossom `b` was entered to its base along the
    /// even-length side of the cycle, labeling the children alternately T and S; the remaining
    /// children lose their labels unless one of their vertices was reached directly.
    fn relabel_expanded_t_blossom(&mut self, b: usize) {
        let children = self.blossom_children[b].clone();
        let endps = self.blossom_endpoints[b].clone();
        let len = children.len() as isize;

        let entry = self.label_end[b].expect("T-blossom has a label endpoint");
        let entry_child = self.in_blossom[self.endpoint[entry ^ 1]];
        let mut j = children
            .iter()
            .position(|&c| c == entry_child)
            .expect("entry vertex lies in a child of the blossom") as isize;

        // walk in the direction that reaches the base through an even number of edges
        let (jstep, endptrick) = if j & 1 == 1 {
            j -= len;
            (1, 0)
        } else {
            (-1, 1)
        };
        let endp = |j: isize| cyclic(&endps, j - endptrick as isize);

        let mut p = entry;
        while j != 0 {
            self.label[self.endpoint[p ^ 1]] = Label::Free;
            self.label[self.endpoint[endp(j) ^ endptrick ^ 1]] = Label::Free;
            self.assign_label(self.endpoint[p ^ 1], Label::T, Some(p));

            self.allowed[endp(j) / 2] = true;
            j += jstep;
            p = endp(j) ^ endptrick;
            self.allowed[p / 2] = true;
            j += jstep;
        }

        // the base child becomes T without relabeling its mate, which is S already
        let bv = cyclic(&children, j);
        self.label[self.endpoint[p ^ 1]] = Label::T;
        self.label[bv] = Label::T;
        self.label_end[self.endpoint[p ^ 1]] = Some(p);
        self.label_end[bv] = Some(p);
        self.best_edge[bv] = None;

        j += jstep;
        while cyclic(&children, j) != entry_child {
            let bv = cyclic(&children, j);
            j += jstep;

            if self.label[bv] == Label::S {
                continue;
            }

            let reached = self
                .blossom_leaves(bv)
                .into_iter()
                .find(|&v| self.label[v] != Label::Free);

            if let Some(v) = reached {
                assert_eq!(self.label[v], Label::T);
                assert_eq!(self.in_blossom[v], bv);

                self.label[v] = Label::Free;
                let m = self.mate[self.base_of(bv)]
                    .unwrap_or_else(|| panic!("base of sub-blossom {bv} is unmatched"));
                self.label[self.endpoint[m]] = Label::Free;
                self.assign_label(v, Label::T, self.label_end[v]);
            }
        }
    }

    /// Swaps matched and unmatched edges on the even-length path through blossom `b` from
    /// vertex `v` to the base, making `v` the new base.
    fn augment_blossom(&mut self, b: usize, v: usize) {
        let mut t = v;
        while self.blossom_parent[t] != Some(b) {
            t = self.blossom_parent[t]
                .unwrap_or_else(|| panic!("vertex {v} is not contained in blossom {b}"));
        }
        if t >= self.n {
            self.augment_blossom(t, v);
        }

        let len = self.blossom_children[b].len() as isize;
        let i = self.blossom_children[b]
            .iter()
            .position(|&c| c == t)
            .expect("t is a child of b");

        let mut j = i as isize;
        let (jstep, endptrick) = if i & 1 == 1 {
            j -= len;
            (1, 0)
        } else {
            (-1, 1)
        };

        while j != 0 {
            j += jstep;
            let t = cyclic(&self.blossom_children[b], j);
            let p = cyclic(&self.blossom_endpoints[b], j - endptrick as isize) ^ endptrick;
            if t >= self.n {
                self.augment_blossom(t, self.endpoint[p]);
            }

            j += jstep;
            let t = cyclic(&self.blossom_children[b], j);
            if t >= self.n {
                self.augment_blossom(t, self.endpoint[p ^ 1]);
            }

            self.mate[self.endpoint[p]] = Some(p ^ 1);
            self.mate[self.endpoint[p ^ 1]] = Some(p);
        }

        self.blossom_children[b].rotate_left(i);
        self.blossom_endpoints[b].rotate_left(i);
        self.blossom_base[b] = self.blossom_base[self.blossom_children[b][0]];
        assert_eq!(self.blossom_base[b], Some(v));
    }

    /// Augments along the path through the tight edge `k` connecting two different
    /// alternating trees.
    fn augment_matching(&mut self, k: usize) {
        let (v, w, _) = self.edges[k];
        trace!("augmenting through edge ({v},{w})");

        for (mut s, mut p) in [(v, 2 * k + 1), (w, 2 * k)] {
            loop {
                let bs = self.in_blossom[s];
                assert_eq!(self.label[bs], Label::S);
                assert_eq!(self.label_end[bs], self.mate[self.base_of(bs)]);

                if bs >= self.n {
                    self.augment_blossom(bs, s);
                }
                self.mate[s] = Some(p);

                // the root of the tree has been reached
                let Some(end) = self.label_end[bs] else {
                    break;
                };

                let t = self.endpoint[end];
                let bt = self.in_blossom[t];
                assert_eq!(self.label[bt], Label::T);
                let q = self.label_end[bt].expect("T-blossom has a label endpoint");
                s = self.endpoint[q];
                let j = self.endpoint[q ^ 1];
                assert_eq!(self.base_of(bt), t);

                if bt >= self.n {
                    self.augment_blossom(bt, j);
                }
                self.mate[j] = Some(q);
                p = q ^ 1;
            }
        }
    }

    fn compute_delta(&self) -> (W, DeltaKind) {
        let zero = W::zero();
        let min_vertex_dual = self.dual[..self.n]
            .iter()
            .copied()
            .reduce(Weight::minimum)
            .unwrap_or(zero);

        let mut best: Option<(W, DeltaKind)> = None;
        let mut consider = |delta: W, kind: DeltaKind| {
            if best.as_ref().is_none_or(|&(d, _)| delta < d) {
                best = Some((delta, kind));
            }
        };

        // delta1: a free vertex reaches dual zero
        if !self.max_cardinality {
            consider(min_vertex_dual, DeltaKind::Optimum);
        }

        // delta2: an edge between an S-vertex and a free vertex becomes tight
        for v in 0..self.n {
            if self.label[self.in_blossom[v]] != Label::Free {
                continue;
            }
            if let Some(k) = self.best_edge[v] {
                consider(self.slack(k), DeltaKind::SToFree(k));
            }
        }

        // delta3: an edge between two S-blossoms becomes tight
        for b in 0..2 * self.n {
            if self.blossom_parent[b].is_some() || self.label[b] != Label::S {
                continue;
            }
            if let Some(k) = self.best_edge[b] {
                consider(self.slack(k) / W::two(), DeltaKind::SToS(k));
            }
        }

        // delta4: a T-blossom reaches dual zero
        for b in self.n..2 * self.n {
            if self.blossom_base[b].is_some()
                && self.blossom_parent[b].is_none()
                && self.label[b] == Label::T
            {
                consider(self.dual[b], DeltaKind::ExpandT(b));
            }
        }

        best.unwrap_or_else(|| {
            // only possible with max_cardinality: no further augmenting path exists
            assert!(self.max_cardinality);
            (min_vertex_dual.maximum(zero), DeltaKind::Optimum)
        })
    }

    fn update_duals(&mut self, delta: W) {
        for v in 0..self.n {
            match self.label[self.in_blossom[v]] {
                Label::S => self.dual[v] = self.dual[v] - delta,
                Label::T => self.dual[v] = self.dual[v] + delta,
                _ => {}
            }
        }

        for b in self.n..2 * self.n {
            if self.blossom_base[b].is_some() && self.blossom_parent[b].is_none() {
                match self.label[b] {
                    Label::S => self.dual[b] = self.dual[b] + delta,
                    Label::T => self.dual[b] = self.dual[b] - delta,
                    _ => {}
                }
            }
        }
    }

    fn into_matching(self) -> Matching {
        let endpoint = self.endpoint.iter().map(|&v| v as Node).collect_vec();
        Matching::from_endpoints(&endpoint, &self.mate)
    }
}
