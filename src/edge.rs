use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
/// All graphs in this crate are undirected, so `Edge(u, v)` and `Edge(v, u)` denote the
/// same edge; most APIs return edges normalized.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns true if `u` is one of the endpoints
    pub fn is_incident_to(&self, u: Node) -> bool {
        self.0 == u || self.1 == u
    }

    /// Given one endpoint, returns the other one.
    /// ** Panics if `u` is not incident to the edge **
    pub fn opposite(&self, u: Node) -> Node {
        if self.0 == u {
            self.1
        } else {
            assert_eq!(self.1, u, "{u} is not an endpoint of {self}");
            self.0
        }
    }

    /// Bijection from `0..(n choose 2)` to all normalized loop-free edges of `n` nodes in
    /// lexicographic order
    pub fn from_u64_undir(x: u64, n: u64) -> Self {
        debug_assert!(x < n * (n - 1) / 2);

        // Row `u` holds `n - 1 - u` edges; walk rows until `x` falls into one
        let mut u = 0;
        let mut rest = x;
        while rest >= n - 1 - u {
            rest -= n - 1 - u;
            u += 1;
        }

        Edge(u as Node, (u + 1 + rest) as Node)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<[Node; 2]> for Edge {
    fn from(value: [Node; 2]) -> Self {
        Edge(value[0], value[1])
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}
