/*!
# Graph Operations

Traits describing what a graph representation offers. Algorithms in [`crate::algo`] are
written against these traits rather than against concrete representations, so any type
providing adjacency queries (and edge weights, where needed) can be matched.

All graphs are **undirected**, **simple** (no self-loops, no multi-edges) and have the vertex
set `0..n`.
*/

use std::{fmt::Debug, fmt::Display, ops::Range};

use itertools::Itertools;
use num::Signed;

use crate::{error::*, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over V.
    /// In contrast to `self.vertices()`, the range does not borrow `self`.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (undirected) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over all degrees in order of vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }

    /// Returns an iterator over edges incident to a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over edges incident to a given vertex in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn ordered_edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> {
        let mut edges = self.edges_of(u, only_normalized).collect_vec();
        edges.sort();
        edges.into_iter()
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, every undirected edge is reported exactly once as `(u, v)` with
    /// `u < v`; otherwise both orientations are reported.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.ordered_edges_of(u, only_normalized))
    }
}

/// Trait to test existence of edges in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde {u,v} exists in the graph.
    /// Returns *false* for vertices outside of the graph.
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew + AdjacencyTest {
    /// Adds the edge `{u, v}` to the graph.
    /// Returns *true* exactly if the edge was already present (in which case nothing changes).
    ///
    /// # Errors
    /// - [`MatchingError::InvalidVertexNumbering`] if `u >= n` or `v >= n`
    /// - [`MatchingError::SelfLoop`] if `u == v`
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool>;

    /// Adds the edge `{u, v}` to the graph.
    ///
    /// # Errors
    /// As [`GraphEdgeEditing::try_add_edge`] and additionally
    /// [`MatchingError::DuplicateEdge`] if the edge was already present.
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        raise_error_unless!(!self.try_add_edge(u, v)?, MatchingError::DuplicateEdge(Edge(u, v)));
        Ok(())
    }

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromScratch: Sized {
    /// Creates a graph with vertices `0..n` (possibly isolated) and the given edges.
    ///
    /// # Errors
    /// Fails if an edge references a vertex `>= n`, is a self-loop or appears twice.
    fn with_vertices(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>)
    -> Result<Self>;

    /// Creates a graph from a list of edges alone.
    ///
    /// The vertex set is the set of all endpoints, which must be exactly `0..n` for some `n`:
    /// vertices are consecutive integers starting at `0`.
    ///
    /// # Errors
    /// [`MatchingError::InvalidVertexNumbering`] if the endpoints do not form `0..n`, and
    /// everything [`GraphFromScratch::with_vertices`] rejects.
    fn try_from_edges(edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self> {
        let edges = edges.into_iter().map(|e| e.into()).collect_vec();
        let n = check_consecutive_vertices(edges.iter().flat_map(|&Edge(u, v)| [u, v]))?;
        Self::with_vertices(n, edges)
    }
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn with_vertices(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        let mut graph = Self::new(n);
        graph.add_edges(edges)?;
        Ok(graph)
    }
}

/// Verifies that the given vertices (with repetitions) are exactly `0..n` and returns `n`.
/// Memory is proportional to the number of given vertices, not to their largest value.
pub(crate) fn check_consecutive_vertices(vertices: impl IntoIterator<Item = Node>) -> Result<NumNodes> {
    let mut vertices = vertices.into_iter().collect_vec();
    vertices.sort_unstable();
    vertices.dedup();

    let n = vertices.len() as NumNodes;
    match vertices.last() {
        None => Ok(0),
        Some(&INVALID_NODE) => Err(MatchingError::InvalidVertexNumbering(format!(
            "vertex {INVALID_NODE} is reserved"
        ))),
        Some(&max) if max + 1 != n => {
            // sorted and distinct, so the first gap is the first position not holding its index
            let missing = (0..n).zip(&vertices).find(|&(i, &u)| i != u).map_or(n, |(i, _)| i);
            Err(MatchingError::InvalidVertexNumbering(format!(
                "vertices must be 0..{} but {missing} is missing",
                max + 1
            )))
        }
        Some(_) => Ok(n),
    }
}

/// Numbers usable as edge weights.
///
/// Weights may be negative; all signed primitive integers as well as `f32`/`f64` qualify.
/// Integer weights keep every dual variable of the weighted algorithms integral.
pub trait Weight: Copy + PartialOrd + Debug + Display + Signed {
    /// Returns `2`, which is used to scale duals
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the larger of two weights (weights are only partially ordered)
    fn maximum(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Returns the smaller of two weights (weights are only partially ordered)
    fn minimum(self, other: Self) -> Self {
        if other < self { other } else { self }
    }
}

impl<T> Weight for T where T: Copy + PartialOrd + Debug + Display + Signed {}

/// Graphs carrying a weight for each edge
pub trait EdgeWeights: AdjacencyList + AdjacencyTest {
    /// Type of the edge weights
    type Weight: Weight;

    /// Returns the weight of the edge `{u, v}`.
    ///
    /// # Errors
    /// [`MatchingError::EdgeNotFound`] if `u` and `v` are not adjacent.
    fn w(&self, u: Node, v: Node) -> Result<Self::Weight>;

    /// Returns the maximum weight over all edges or `None` if there are no edges
    fn max_w(&self) -> Option<Self::Weight> {
        self.weighted_edges().map(|(_, w)| w).reduce(Weight::maximum)
    }

    /// Returns an iterator over all normalized edges together with their weights
    fn weighted_edges(&self) -> impl Iterator<Item = (Edge, Self::Weight)> + '_;
}

/// Allows updating single edge weights
pub trait GraphWeightEditing: EdgeWeights {
    /// Sets the weight of the existing edge `{u, v}`.
    ///
    /// # Errors
    /// [`MatchingError::EdgeNotFound`] if `u` and `v` are not adjacent.
    fn set_w(&mut self, u: Node, v: Node, weight: Self::Weight) -> Result<()>;
}

/// Graphs known to be bipartite
pub trait Bipartite: AdjacencyList {
    /// Returns the two color classes `(U, V)` of the graph, each sorted ascending.
    /// Within every connected component, the smallest vertex is placed in `U`.
    ///
    /// # Errors
    /// [`MatchingError::NotBipartite`] if the graph contains an odd cycle.
    fn partition(&self) -> Result<(Vec<Node>, Vec<Node>)>;
}
