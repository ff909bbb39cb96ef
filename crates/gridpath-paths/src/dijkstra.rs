use gridpath_graph::{GraphError, VertexId};

use crate::engine::{PathNode, ShortestPaths};
use crate::frontier::Frontier;
use crate::traits::WeightedNetwork;

impl<F: Frontier> ShortestPaths<F> {
    /// Compute shortest distances and predecessors from `source` to every
    /// vertex reachable from it.
    ///
    /// Previous results are discarded first. The run repeatedly settles the
    /// frontier vertex with the lowest known distance and relaxes its edges
    /// towards vertices not yet settled; a neighbour is updated only when
    /// the new distance is strictly lower. Returns the settled vertices in
    /// settle order, so costs are non-decreasing along the slice.
    ///
    /// The network is borrowed for the whole run and cannot be mutated
    /// until it returns.
    pub fn calculate_paths_from<N: WeightedNetwork>(
        &mut self,
        network: &N,
        source: VertexId,
    ) -> Result<&[PathNode], GraphError> {
        if !network.contains(source) {
            return Err(GraphError::UnknownVertex(source));
        }
        self.reset();
        self.source = Some(source);
        self.distances.insert(source, 0.0);
        self.frontier.push(source, 0.0);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = self.frontier.pop_min() {
            if !self.visited.insert(current) {
                continue;
            }
            let current_cost = self.distance_at(current);
            self.settled.push(PathNode {
                vertex: current,
                cost: current_cost,
            });

            nbuf.clear();
            network.neighbors(current, &mut nbuf);

            for &next in nbuf.iter() {
                if self.visited.contains(&next) {
                    continue;
                }
                let tentative = current_cost + network.weight(current, next);
                if tentative >= self.distance_at(next) {
                    continue;
                }
                self.distances.insert(next, tentative);
                self.predecessors.insert(next, current);
                self.frontier.push(next, tentative);
            }
        }

        self.nbuf = nbuf;
        log::debug!(
            "shortest paths from {source}: {} vertices settled",
            self.settled.len()
        );
        Ok(&self.settled)
    }
}
