//! Path reconstruction from the predecessor links of a finished run.

use gridpath_graph::VertexId;

use crate::engine::ShortestPaths;
use crate::frontier::Frontier;
use crate::traits::WeightedNetwork;

impl<F: Frontier> ShortestPaths<F> {
    /// A shortest path from the last run's source to `destination`.
    ///
    /// Returns the full path, both endpoints included, or `None` if the last
    /// run did not reach `destination` (or no run has happened). The path to
    /// the source itself is `[source]`. Calling this does not change any
    /// state, so repeated calls return the same path.
    pub fn path_to(&self, destination: VertexId) -> Option<Vec<VertexId>> {
        let source = self.source?;
        if destination == source {
            return Some(vec![source]);
        }
        let mut step = self.predecessor(destination)?;
        let mut path = vec![destination];
        loop {
            path.push(step);
            if step == source {
                break;
            }
            step = self.predecessor(step)?;
        }
        path.reverse();
        Some(path)
    }
}

/// Total weight of the edges along `path`.
///
/// Panics if two consecutive vertices are not joined by a direct edge.
pub fn path_cost<N: WeightedNetwork>(network: &N, path: &[VertexId]) -> f64 {
    path.windows(2).map(|w| network.weight(w[0], w[1])).sum()
}
