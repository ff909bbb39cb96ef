use gridpath_graph::{Graph, VertexId};

/// Minimal traversal interface: vertex membership and neighbour enumeration.
pub trait Network {
    /// Whether `v` is a vertex of the network.
    fn contains(&self, v: VertexId) -> bool;

    /// Append the destinations of the outgoing edges of `v` into `buf`, in
    /// adjacency order. The caller clears `buf` before calling.
    fn neighbors(&self, v: VertexId, buf: &mut Vec<VertexId>);
}

/// Network with weighted (non-negative) edges.
pub trait WeightedNetwork: Network {
    /// Weight of the direct edge `from → to`.
    ///
    /// Only called for pairs returned by [`Network::neighbors`]. Panics if
    /// there is no such edge: neighbour enumeration and weight lookup being
    /// out of sync is a bug, and a made-up weight would corrupt distances.
    fn weight(&self, from: VertexId, to: VertexId) -> f64;
}

impl Network for Graph {
    #[inline]
    fn contains(&self, v: VertexId) -> bool {
        Graph::contains(self, v)
    }

    fn neighbors(&self, v: VertexId, buf: &mut Vec<VertexId>) {
        buf.extend(self.edges_from(v).iter().map(|e| e.destination));
    }
}

impl WeightedNetwork for Graph {
    fn weight(&self, from: VertexId, to: VertexId) -> f64 {
        match Graph::weight(self, from, to) {
            Some(w) => w,
            None => panic!("no edge from {from} to {to}"),
        }
    }
}
