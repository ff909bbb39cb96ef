use std::fmt;

use crate::edge::EdgeId;
use crate::vertex::VertexId;

/// Errors reported while building, mutating or querying a graph.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Grid dimensions must both be positive.
    InvalidDimensions { width: i32, height: i32 },
    /// Edge weights must be finite and non-negative.
    InvalidWeight(f64),
    /// A vertex with this position already exists.
    DuplicateVertex(VertexId),
    /// The vertex is not part of the graph.
    UnknownVertex(VertexId),
    /// An edge may not connect a vertex to itself.
    SelfLoop(VertexId),
    /// An edge for this ordered pair already exists.
    DuplicateEdge(EdgeId),
    /// An edge references a vertex that is not in the graph.
    DanglingEdge(EdgeId),
    /// An edge is stored under a vertex other than its source.
    MisfiledEdge { list: VertexId, edge: EdgeId },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
            Self::InvalidWeight(w) => write!(f, "invalid edge weight {w}"),
            Self::DuplicateVertex(v) => write!(f, "duplicate vertex {v}"),
            Self::UnknownVertex(v) => write!(f, "unknown vertex {v}"),
            Self::SelfLoop(v) => write!(f, "self loop on {v}"),
            Self::DuplicateEdge(e) => write!(f, "duplicate edge {e}"),
            Self::DanglingEdge(e) => write!(f, "edge {e} references an unknown vertex"),
            Self::MisfiledEdge { list, edge } => {
                write!(f, "edge {edge} stored in the list of {list}")
            }
        }
    }
}

impl std::error::Error for GraphError {}
