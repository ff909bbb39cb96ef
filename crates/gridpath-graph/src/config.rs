//! Grid construction settings.

use crate::edge::EdgeWeights;

/// What happens to a vertex's own outgoing edges when it becomes a wall.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WallPolicy {
    /// A wall loses its incoming and outgoing edges. Reactivation restores
    /// edges in both directions, but only towards neighbours that are
    /// themselves active.
    #[default]
    Isolate,
    /// A wall loses only its incoming edges; its outgoing list is left as
    /// is. Reactivation adds an incoming edge from every compass neighbour,
    /// walls included.
    IncomingOnly,
}

/// Configuration for [`Graph::grid`](crate::Graph::grid).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    pub weights: EdgeWeights,
    pub wall_policy: WallPolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            weights: EdgeWeights::default(),
            wall_policy: WallPolicy::default(),
        }
    }
}

impl GridConfig {
    /// A `width` × `height` grid with default weights and wall policy.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_weights(mut self, weights: EdgeWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_wall_policy(mut self, wall_policy: WallPolicy) -> Self {
        self.wall_policy = wall_policy;
        self
    }
}
