//! Grid topology builder.

use crate::config::GridConfig;
use crate::error::GraphError;
use crate::geom::{Direction, Range};
use crate::graph::Graph;
use crate::vertex::VertexId;

impl Graph {
    /// Build an 8-connected `width` × `height` grid.
    ///
    /// Every point of `[0, width) × [0, height)` becomes an active vertex.
    /// Each vertex gets one outgoing edge per in-bounds compass neighbour,
    /// weighted by [`EdgeWeights`](crate::EdgeWeights): cardinal steps use
    /// `cardinal`, diagonal steps use `diagonal`. Edge lists follow
    /// [`Direction::ALL`] order, so the result is identical on every call.
    pub fn grid(config: &GridConfig) -> Result<Self, GraphError> {
        if config.width <= 0 || config.height <= 0 {
            return Err(GraphError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }
        let mut graph = Graph::with_rules(config.weights, config.wall_policy)?;
        let bounds = Range::new(0, 0, config.width, config.height);

        for p in bounds {
            graph.add_vertex(p)?;
        }
        for p in bounds {
            let source = VertexId::from(p);
            for dir in Direction::ALL {
                let Some(q) = p.step(dir).filter(|&q| bounds.contains(q)) else {
                    continue;
                };
                graph.add_edge(source, VertexId::from(q), config.weights.for_direction(dir))?;
            }
        }

        log::debug!(
            "built {}x{} grid: {} vertices, {} edges",
            config.width,
            config.height,
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
