//! Single-source shortest paths over [`gridpath_graph`] graphs.
//!
//! [`ShortestPaths`] runs Dijkstra's algorithm from one source vertex
//! ([`ShortestPaths::calculate_paths_from`]), records a distance and a
//! predecessor for every reachable vertex, and rebuilds a shortest path to
//! any destination ([`ShortestPaths::path_to`]).
//!
//! The engine works over anything implementing [`WeightedNetwork`];
//! [`Graph`](gridpath_graph::Graph) does.
//!
//! # Frontier strategies
//!
//! | Strategy | Extraction | Ties |
//! |---|---|---|
//! | [`LinearScan`] (default) | O(V) scan | first inserted |
//! | [`MinHeap`] | O(log V) | lowest vertex id |

mod dijkstra;
mod engine;
mod frontier;
mod path;
mod traits;

pub use engine::{PathNode, ShortestPaths, UNREACHABLE};
pub use frontier::{Frontier, LinearScan, MinHeap};
pub use path::path_cost;
pub use traits::{Network, WeightedNetwork};
