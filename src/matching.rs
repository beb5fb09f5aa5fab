/*!
# Matchings and Alternating Paths

A [`Matching`] is a partial pairing of vertices stored as an *array of mates*: every vertex
knows its partner (if any). A [`Path`] is an ordered sequence of distinct vertices used to
augment a matching.
*/

use std::fmt::Display;

use fxhash::FxHashSet;
use itertools::Itertools;
use num::Zero;

use crate::{error::*, ops::*, *};

/// A set of vertex-disjoint edges.
///
/// The mate array is symmetric for every edge of the matching. [`Matching::add`] overwrites
/// the mate entries of both endpoints unconditionally; if one of them was matched before,
/// its former partner keeps a dangling entry and [`Matching::validate`] reports the conflict.
#[derive(Debug, Clone, Default)]
pub struct Matching {
    mates: Vec<Option<OptionalNode>>,
}

impl Matching {
    /// Creates an empty matching
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty matching with room for the vertices `0..n`
    pub fn with_capacity(n: NumNodes) -> Self {
        Self {
            mates: vec![None; n as usize],
        }
    }

    /// Creates a matching from the given edges.
    ///
    /// # Errors
    /// [`MatchingError::InvalidMatching`] if two edges share an endpoint.
    pub fn from_edges(edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self> {
        let mut matching = Self::new();
        for e in edges {
            let Edge(u, v) = e.into();
            raise_error_unless!(!matching.has_vertex(u), MatchingError::InvalidMatching(u));
            raise_error_unless!(!matching.has_vertex(v), MatchingError::InvalidMatching(v));
            matching.add(u, v);
        }
        Ok(matching)
    }

    /// Creates a matching from a mate array where `mates[u] == Some(v)` pairs `u` with `v`.
    /// Only symmetric pairs (`mates[v] == Some(u)` as well) are taken over.
    pub fn from_mates(mates: &[Option<Node>]) -> Self {
        let mut matching = Self::with_capacity(mates.len() as NumNodes);
        for (u, v) in mates
            .iter()
            .enumerate()
            .filter_map(|(u, v)| Some((u as Node, (*v)?)))
        {
            if u < v && mates.get(v as usize) == Some(&Some(u)) {
                matching.add(u, v);
            }
        }
        matching
    }

    /// Creates a matching from an *endpoint representation*: edge `k` consists of the vertices
    /// `endpoint[2k]` and `endpoint[2k + 1]`, and a matched vertex `v` stores in `mates[v]`
    /// the index of the *remote* endpoint of its matched edge.
    pub fn from_endpoints(endpoint: &[Node], mates: &[Option<usize>]) -> Self {
        let mut matching = Self::with_capacity(mates.len() as NumNodes);
        for p in mates.iter().flatten() {
            matching.add(endpoint[*p], endpoint[*p ^ 1]);
        }
        matching
    }

    /// Matches `u` and `v` with each other
    pub fn add(&mut self, u: Node, v: Node) {
        let required = u.max(v) as usize + 1;
        if self.mates.len() < required {
            self.mates.resize(required, None);
        }

        self.mates[u as usize] = OptionalNode::new(v);
        self.mates[v as usize] = OptionalNode::new(u);
    }

    /// Removes the edge `{u, v}` from the matching.
    /// Returns *true* exactly if the edge was part of the matching.
    pub fn delete(&mut self, u: Node, v: Node) -> bool {
        if !self.has_edge(u, v) {
            return false;
        }

        self.mates[u as usize] = None;
        self.mates[v as usize] = None;
        true
    }

    /// Returns the partner of `u` or `None` if `u` is unmatched
    pub fn mate_of(&self, u: Node) -> Option<Node> {
        self.mates
            .get(u as usize)
            .copied()
            .flatten()
            .map(|v| v.get())
    }

    /// Returns *true* if `{u, v}` is part of the matching
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.mate_of(u) == Some(v) && self.mate_of(v) == Some(u)
    }

    /// Returns *true* if `u` is matched
    pub fn has_vertex(&self, u: Node) -> bool {
        self.mate_of(u).is_some()
    }

    /// Returns an iterator over all matched vertices in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.mates.len() as Node).filter(|&u| self.has_vertex(u))
    }

    /// Returns all matched edges as `Edge(u, v)` with `u < v` in ascending order
    pub fn edges(&self) -> Vec<Edge> {
        self.vertices()
            .filter_map(|u| {
                let v = self.mate_of(u)?;
                (u < v && self.mate_of(v) == Some(u)).then_some(Edge(u, v))
            })
            .collect_vec()
    }

    /// Returns the number of edges in the matching
    pub fn size(&self) -> NumNodes {
        self.edges().len() as NumNodes
    }

    /// Returns *true* if no edge is matched
    pub fn is_empty(&self) -> bool {
        self.mates.iter().all(|m| m.is_none())
    }

    /// Returns the sum of the weights of all matched edges.
    ///
    /// # Errors
    /// [`MatchingError::EdgeNotFound`] if a matched edge is missing in `graph`.
    pub fn weight<G: EdgeWeights>(&self, graph: &G) -> Result<G::Weight> {
        self.edges()
            .into_iter()
            .try_fold(G::Weight::zero(), |acc, Edge(u, v)| Ok(acc + graph.w(u, v)?))
    }

    /// Augments the matching along `path`, i.e. replaces the matching by its symmetric
    /// difference with the edges of `path`.
    ///
    /// On an alternating path this adds the edges at even positions and removes the edges at
    /// odd positions (0-indexed). Augmenting along the reversed path afterwards restores the
    /// previous matching.
    ///
    /// # Errors
    /// [`MatchingError::InvalidAugmentingPath`] if the path does not have an odd number of edges.
    pub fn augment(&mut self, path: &Path) -> Result<()> {
        raise_error_unless!(
            path.len() % 2 == 0,
            MatchingError::InvalidAugmentingPath(path.len())
        );

        let (matched, unmatched): (Vec<Edge>, Vec<Edge>) =
            path.edges().partition(|&Edge(u, v)| self.has_edge(u, v));

        for Edge(u, v) in matched {
            self.delete(u, v);
        }
        for Edge(u, v) in unmatched {
            self.add(u, v);
        }

        Ok(())
    }

    /// Verifies that no vertex is an endpoint of two matched edges.
    ///
    /// # Errors
    /// [`MatchingError::InvalidMatching`] naming a vertex claimed by two edges.
    pub fn validate(&self) -> Result<()> {
        for u in self.vertices() {
            if let Some(v) = self.mate_of(u) {
                raise_error_unless!(self.mate_of(v) == Some(u), MatchingError::InvalidMatching(v));
            }
        }
        Ok(())
    }
}

/// Two matchings are equal if they contain the same edges
impl PartialEq for Matching {
    fn eq(&self, other: &Self) -> bool {
        self.edges() == other.edges()
    }
}

impl Eq for Matching {}

impl Display for Matching {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.edges().iter().join(", "))
    }
}

/// An ordered sequence of at least two distinct vertices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    vertices: Vec<Node>,
}

impl Path {
    /// Creates a new path.
    ///
    /// # Errors
    /// [`MatchingError::InvalidAugmentingPath`] if there are fewer than two vertices or a
    /// vertex repeats.
    pub fn new(vertices: impl IntoIterator<Item = Node>) -> Result<Self> {
        let vertices = vertices.into_iter().collect_vec();
        let distinct = vertices.iter().collect::<FxHashSet<_>>().len();
        raise_error_unless!(
            vertices.len() >= 2 && distinct == vertices.len(),
            MatchingError::InvalidAugmentingPath(vertices.len())
        );
        Ok(Self { vertices })
    }

    /// Returns the number of vertices on the path
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// A path is never empty; provided for symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertices in order
    pub fn vertices(&self) -> &[Node] {
        &self.vertices
    }

    /// Returns the consecutive vertex pairs of the path
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices
            .iter()
            .tuple_windows()
            .map(|(&u, &v)| Edge(u, v))
    }

    /// Returns the same path traversed in the opposite direction
    pub fn reversed(&self) -> Self {
        Self {
            vertices: self.vertices.iter().rev().copied().collect(),
        }
    }
}
