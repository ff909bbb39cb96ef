use std::collections::{HashMap, HashSet};

use gridpath_graph::VertexId;

use crate::frontier::{Frontier, LinearScan};

/// A settled vertex and its final shortest distance from the source.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub vertex: VertexId,
    pub cost: f64,
}

/// Distance reported for vertices the last run did not reach.
pub const UNREACHABLE: f64 = f64::INFINITY;

// ---------------------------------------------------------------------------
// ShortestPaths
// ---------------------------------------------------------------------------

/// Single-source shortest-path engine.
///
/// Owns the state of one run (visited set, frontier, distances,
/// predecessors and settle order) and reuses its buffers across runs. Each
/// call to [`calculate_paths_from`](Self::calculate_paths_from) starts from
/// a clean slate; queries such as [`path_to`](Self::path_to) answer for the
/// most recent run.
///
/// The frontier strategy is a type parameter: [`LinearScan`] by default,
/// or [`MinHeap`](crate::MinHeap) for larger graphs.
#[derive(Debug, Clone, Default)]
pub struct ShortestPaths<F: Frontier = LinearScan> {
    pub(crate) source: Option<VertexId>,
    pub(crate) visited: HashSet<VertexId>,
    pub(crate) frontier: F,
    pub(crate) distances: HashMap<VertexId, f64>,
    pub(crate) predecessors: HashMap<VertexId, VertexId>,
    pub(crate) settled: Vec<PathNode>,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<VertexId>,
}

impl ShortestPaths<LinearScan> {
    /// An engine using the linear-scan frontier.
    pub fn new() -> Self {
        Self::with_frontier()
    }
}

impl<F: Frontier + Default> ShortestPaths<F> {
    /// An engine using frontier strategy `F`.
    pub fn with_frontier() -> Self {
        Self {
            source: None,
            visited: HashSet::new(),
            frontier: F::default(),
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            settled: Vec::new(),
            nbuf: Vec::with_capacity(8),
        }
    }
}

impl<F: Frontier> ShortestPaths<F> {
    /// Forget the results of the last run.
    pub fn reset(&mut self) {
        self.source = None;
        self.visited.clear();
        self.frontier.clear();
        self.distances.clear();
        self.predecessors.clear();
        self.settled.clear();
    }

    /// Source of the last run, if any.
    #[inline]
    pub fn source(&self) -> Option<VertexId> {
        self.source
    }

    /// Shortest distance from the source to `v`, or [`UNREACHABLE`].
    #[inline]
    pub fn distance_at(&self, v: VertexId) -> f64 {
        self.distances.get(&v).copied().unwrap_or(UNREACHABLE)
    }

    /// The vertex preceding `v` on a shortest path from the source.
    ///
    /// `None` for the source itself and for unreached vertices.
    #[inline]
    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.predecessors.get(&v).copied()
    }

    /// Whether the last run found a path to `v`.
    #[inline]
    pub fn is_reached(&self, v: VertexId) -> bool {
        self.distances.contains_key(&v)
    }

    /// Vertices in the order the last run settled them.
    #[inline]
    pub fn settled(&self) -> &[PathNode] {
        &self.settled
    }
}
