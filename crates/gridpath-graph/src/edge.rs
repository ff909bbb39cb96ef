//! Directed, weighted edges and the grid weight rule.

use std::fmt;

use crate::error::GraphError;
use crate::geom::Direction;
use crate::vertex::VertexId;

/// Identity of an edge: the ordered pair of its endpoints.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId {
    pub source: VertexId,
    pub destination: VertexId,
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge_{}to{}", self.source, self.destination)
    }
}

/// A directed connection `source → destination` with a non-negative weight.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub source: VertexId,
    pub destination: VertexId,
    pub weight: f64,
}

impl Edge {
    pub fn new(source: VertexId, destination: VertexId, weight: f64) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    #[inline]
    pub fn id(&self) -> EdgeId {
        EdgeId {
            source: self.source,
            destination: self.destination,
        }
    }
}

/// Check that `weight` can be used as an edge weight.
pub(crate) fn check_weight(weight: f64) -> Result<f64, GraphError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(GraphError::InvalidWeight(weight))
    }
}

/// Weight rule for edges between compass neighbours.
///
/// Shared by the topology builder and the wall mutator so that restored
/// edges carry the same weights as the ones originally built.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeWeights {
    pub cardinal: f64,
    pub diagonal: f64,
}

impl Default for EdgeWeights {
    fn default() -> Self {
        Self {
            cardinal: 1.0,
            diagonal: std::f64::consts::SQRT_2,
        }
    }
}

impl EdgeWeights {
    /// Weight of a single step in direction `dir`.
    #[inline]
    pub fn for_direction(&self, dir: Direction) -> f64 {
        if dir.is_diagonal() {
            self.diagonal
        } else {
            self.cardinal
        }
    }

    pub(crate) fn validate(&self) -> Result<(), GraphError> {
        check_weight(self.cardinal)?;
        check_weight(self.diagonal)?;
        Ok(())
    }
}
