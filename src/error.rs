/*!
# Errors

Problems with the *input* of an operation (badly numbered vertices, an odd cycle in a graph
that should be bipartite, a malformed augmenting path, ...) are reported as [`MatchingError`].

Violations of algorithm invariants (a blossom without base, a vertex expected to be labeled
`S`, ...) are bugs and abort with a panic instead; there is no meaningful partial result
to recover.
*/

use thiserror::Error;

use crate::{edge::Edge, node::Node};

/// All user-facing failures of this crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchingError {
    /// The vertex set is not `0..n` or an edge references a vertex outside of it
    #[error("invalid vertex numbering: {0}")]
    InvalidVertexNumbering(String),

    /// Self-loops are not supported
    #[error("self-loop at vertex {0} is not permitted")]
    SelfLoop(Node),

    /// Multigraphs are not supported
    #[error("edge {0} was added twice")]
    DuplicateEdge(Edge),

    /// A weight was requested (or set) for a pair of vertices that is not adjacent
    #[error("edge {0} not found")]
    EdgeNotFound(Edge),

    /// `partition` was requested for a graph containing an odd cycle
    #[error("graph is not bipartite")]
    NotBipartite,

    /// The algorithm was configured to only accept connected graphs
    #[error("graph is not connected")]
    DisconnectedGraph,

    /// Augmenting paths need at least two vertices and an odd number of edges
    #[error("invalid augmenting path of {0} vertices")]
    InvalidAugmentingPath(usize),

    /// A vertex is the endpoint of two different matched edges
    #[error("invalid matching: vertex {0} is matched twice")]
    InvalidMatching(Node),
}

/// Shorthand used throughout the crate
pub type Result<T> = std::result::Result<T, MatchingError>;

/// Returns early with the given error unless the condition holds
macro_rules! raise_error_unless {
    ($cond : expr, $err : expr) => {
        if !($cond) {
            return Err($err);
        }
    };
}

pub(crate) use raise_error_unless;
