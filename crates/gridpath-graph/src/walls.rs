//! Wall toggling: flipping a vertex's activity and keeping the adjacency
//! lists consistent with it.
//!
//! Deactivating a vertex removes every edge that leads into it from its
//! compass neighbours. Activating it adds one edge from each compass
//! neighbour back into it, weighted by the graph's [`EdgeWeights`]. Which
//! edges the wall itself keeps is decided by the graph's [`WallPolicy`].
//!
//! [`EdgeWeights`]: crate::EdgeWeights

use crate::config::WallPolicy;
use crate::error::GraphError;
use crate::geom::Direction;
use crate::graph::Graph;
use crate::vertex::VertexId;

impl Graph {
    /// Turn `id` into a wall.
    ///
    /// Returns `false` (and changes nothing) if it already was one.
    pub fn deactivate(&mut self, id: VertexId) -> Result<bool, GraphError> {
        let vertex = self.vertex_mut(id)?;
        if !vertex.active {
            return Ok(false);
        }
        vertex.active = false;

        let neighbors: Vec<VertexId> = self.compass_neighbors(id).map(|(_, n)| n).collect();
        let mut removed = 0;
        for n in neighbors {
            removed += self.unlink(n, id);
        }
        if self.wall_policy() == WallPolicy::Isolate {
            removed += self.unlink_all_from(id);
        }
        log::trace!("wall placed at {id}: {removed} edges removed");
        Ok(true)
    }

    /// Remove the wall at `id`.
    ///
    /// Returns `false` (and changes nothing) if the vertex was already
    /// active.
    pub fn activate(&mut self, id: VertexId) -> Result<bool, GraphError> {
        let vertex = self.vertex_mut(id)?;
        if vertex.active {
            return Ok(false);
        }
        vertex.active = true;

        let policy = self.wall_policy();
        let weights = self.weights();
        let neighbors: Vec<(Direction, VertexId)> = self.compass_neighbors(id).collect();
        let mut added = 0;
        for (dir, n) in neighbors {
            let weight = weights.for_direction(dir);
            match policy {
                WallPolicy::IncomingOnly => {
                    added += usize::from(self.link(n, id, weight));
                }
                WallPolicy::Isolate => {
                    if !self.is_active(n) {
                        continue;
                    }
                    added += usize::from(self.link(n, id, weight));
                    added += usize::from(self.link(id, n, weight));
                }
            }
        }
        log::trace!("wall removed at {id}: {added} edges added");
        Ok(true)
    }

    /// Flip the activity of `id`, returning whether it is now active.
    pub fn toggle(&mut self, id: VertexId) -> Result<bool, GraphError> {
        if self.is_active(id) {
            self.deactivate(id)?;
            Ok(false)
        } else {
            self.activate(id)?;
            Ok(true)
        }
    }
}
