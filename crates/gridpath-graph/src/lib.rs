//! **gridpath-graph** — weighted directed graphs over grid coordinates.
//!
//! Vertices are identified by their integer position. A [`Graph`] holds the
//! vertex set and per-source adjacency lists, can be built as an 8-connected
//! grid with [`Graph::grid`], and supports "wall" toggling through
//! [`Graph::deactivate`], [`Graph::activate`] and [`Graph::toggle`], which
//! keep the adjacency lists consistent with vertex activity.

pub mod config;
pub mod edge;
pub mod error;
pub mod geom;
pub mod graph;
mod topology;
pub mod vertex;
mod walls;

pub use config::{GridConfig, WallPolicy};
pub use edge::{Edge, EdgeId, EdgeWeights};
pub use error::GraphError;
pub use geom::{Direction, Point, Range};
pub use graph::Graph;
pub use vertex::{Vertex, VertexId};
