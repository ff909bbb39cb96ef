//! The [`Graph`] container: a vertex set plus per-source adjacency lists.

use std::collections::HashMap;

use crate::config::WallPolicy;
use crate::edge::{Edge, EdgeId, EdgeWeights, check_weight};
use crate::error::GraphError;
use crate::geom::{Direction, Point};
use crate::vertex::{Vertex, VertexId};

/// A directed, weighted graph whose vertices sit on integer grid points.
///
/// Every edge stored under a vertex has that vertex as its source, both
/// endpoints are live vertices, and no ordered pair appears twice in one
/// list. The public construction methods reject input that would break
/// these rules; [`check_invariants`](Self::check_invariants) verifies them
/// after the fact.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: HashMap<VertexId, Vertex>,
    adjacency: HashMap<VertexId, Vec<Edge>>,
    weights: EdgeWeights,
    wall_policy: WallPolicy,
}

impl Graph {
    /// An empty graph with default weights and wall policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty graph using the given weight rule and wall policy.
    pub fn with_rules(weights: EdgeWeights, wall_policy: WallPolicy) -> Result<Self, GraphError> {
        weights.validate()?;
        Ok(Self {
            weights,
            wall_policy,
            ..Self::default()
        })
    }

    /// Weight rule used when the wall mutator restores edges.
    #[inline]
    pub fn weights(&self) -> EdgeWeights {
        self.weights
    }

    #[inline]
    pub fn wall_policy(&self) -> WallPolicy {
        self.wall_policy
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Add an active vertex at `position`.
    pub fn add_vertex(&mut self, position: Point) -> Result<VertexId, GraphError> {
        let vertex = Vertex::new(position);
        let id = vertex.id();
        if self.vertices.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        self.vertices.insert(id, vertex);
        Ok(id)
    }

    /// Add a directed edge `source → destination`.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: f64,
    ) -> Result<EdgeId, GraphError> {
        if source == destination {
            return Err(GraphError::SelfLoop(source));
        }
        for v in [source, destination] {
            if !self.vertices.contains_key(&v) {
                return Err(GraphError::UnknownVertex(v));
            }
        }
        let weight = check_weight(weight)?;
        let edge = Edge::new(source, destination, weight);
        if self.has_edge(source, destination) {
            return Err(GraphError::DuplicateEdge(edge.id()));
        }
        self.adjacency.entry(source).or_default().push(edge);
        Ok(edge.id())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Whether `id` is a live, non-wall vertex. Unknown ids are not active.
    #[inline]
    pub fn is_active(&self, id: VertexId) -> bool {
        self.vertices.get(&id).is_some_and(Vertex::is_active)
    }

    /// All vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Outgoing edges of `id`, in insertion order. Empty for unknown ids.
    pub fn edges_from(&self, id: VertexId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The direct edge `source → destination`, if any.
    pub fn edge(&self, source: VertexId, destination: VertexId) -> Option<&Edge> {
        self.edges_from(source)
            .iter()
            .find(|e| e.destination == destination)
    }

    #[inline]
    pub fn has_edge(&self, source: VertexId, destination: VertexId) -> bool {
        self.edge(source, destination).is_some()
    }

    /// Weight of the direct edge `source → destination`, if any.
    #[inline]
    pub fn weight(&self, source: VertexId, destination: VertexId) -> Option<f64> {
        self.edge(source, destination).map(|e| e.weight)
    }

    /// The compass neighbours of `id` that exist in the graph, with the
    /// direction leading to each. Activity is not considered. Directions
    /// that would leave the `i32` coordinate space are skipped.
    pub fn compass_neighbors(
        &self,
        id: VertexId,
    ) -> impl Iterator<Item = (Direction, VertexId)> + '_ {
        let p = id.position();
        Direction::ALL.into_iter().filter_map(move |d| {
            let n = VertexId::from(p.step(d)?);
            self.vertices.contains_key(&n).then_some((d, n))
        })
    }

    /// Verify the structural invariants of the adjacency lists.
    pub fn check_invariants(&self) -> Result<(), GraphError> {
        for (&list, edges) in &self.adjacency {
            if !self.vertices.contains_key(&list) {
                return Err(GraphError::UnknownVertex(list));
            }
            for (i, edge) in edges.iter().enumerate() {
                if edge.source != list {
                    return Err(GraphError::MisfiledEdge {
                        list,
                        edge: edge.id(),
                    });
                }
                if edge.source == edge.destination {
                    return Err(GraphError::SelfLoop(edge.source));
                }
                if !self.vertices.contains_key(&edge.destination) {
                    return Err(GraphError::DanglingEdge(edge.id()));
                }
                check_weight(edge.weight)?;
                if edges[..i].iter().any(|e| e.destination == edge.destination) {
                    return Err(GraphError::DuplicateEdge(edge.id()));
                }
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Mutation helpers for the wall mutator
    // -----------------------------------------------------------------------

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex, GraphError> {
        self.vertices
            .get_mut(&id)
            .ok_or(GraphError::UnknownVertex(id))
    }

    /// Add `source → destination` unless it already exists. Returns whether
    /// an edge was added.
    pub(crate) fn link(&mut self, source: VertexId, destination: VertexId, weight: f64) -> bool {
        let list = self.adjacency.entry(source).or_default();
        if list.iter().any(|e| e.destination == destination) {
            return false;
        }
        list.push(Edge::new(source, destination, weight));
        true
    }

    /// Remove `source → destination`. Returns the number of edges removed.
    pub(crate) fn unlink(&mut self, source: VertexId, destination: VertexId) -> usize {
        let Some(list) = self.adjacency.get_mut(&source) else {
            return 0;
        };
        let before = list.len();
        list.retain(|e| e.destination != destination);
        before - list.len()
    }

    /// Drop every outgoing edge of `source`. Returns how many were removed.
    pub(crate) fn unlink_all_from(&mut self, source: VertexId) -> usize {
        self.adjacency
            .get_mut(&source)
            .map_or(0, |list| std::mem::take(list).len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: i32) -> (Graph, Vec<VertexId>) {
        let mut g = Graph::new();
        let ids: Vec<_> = (0..n)
            .map(|x| g.add_vertex(Point::new(x, 0)).unwrap())
            .collect();
        (g, ids)
    }

    #[test]
    fn add_and_query_edges() {
        let (mut g, ids) = line(3);
        g.add_edge(ids[0], ids[1], 1.0).unwrap();
        g.add_edge(ids[0], ids[2], 2.5).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.weight(ids[0], ids[2]), Some(2.5));
        assert_eq!(g.weight(ids[1], ids[0]), None);
        let dests: Vec<_> = g.edges_from(ids[0]).iter().map(|e| e.destination).collect();
        assert_eq!(dests, vec![ids[1], ids[2]]);
        assert!(g.edges_from(ids[2]).is_empty());
        assert!(g.check_invariants().is_ok());
    }

    #[test]
    fn rejects_malformed_topology() {
        let (mut g, ids) = line(2);
        assert_eq!(
            g.add_vertex(Point::new(1, 0)),
            Err(GraphError::DuplicateVertex(ids[1]))
        );
        assert_eq!(
            g.add_edge(ids[0], ids[0], 1.0),
            Err(GraphError::SelfLoop(ids[0]))
        );
        let ghost = VertexId::new(9, 9);
        assert_eq!(
            g.add_edge(ids[0], ghost, 1.0),
            Err(GraphError::UnknownVertex(ghost))
        );
        assert_eq!(
            g.add_edge(ids[0], ids[1], -2.0),
            Err(GraphError::InvalidWeight(-2.0))
        );
        let id = g.add_edge(ids[0], ids[1], 1.0).unwrap();
        assert_eq!(
            g.add_edge(ids[0], ids[1], 3.0),
            Err(GraphError::DuplicateEdge(id))
        );
        // The reverse direction is a different edge.
        assert!(g.add_edge(ids[1], ids[0], 1.0).is_ok());
    }

    #[test]
    fn compass_neighbors_ignore_activity_and_gaps() {
        let mut g = Graph::new();
        for p in [Point::new(1, 1), Point::new(2, 1), Point::new(2, 2), Point::new(0, 0)] {
            g.add_vertex(p).unwrap();
        }
        g.vertex_mut(VertexId::new(2, 2)).unwrap().active = false;
        let found: Vec<_> = g.compass_neighbors(VertexId::new(1, 1)).collect();
        assert_eq!(
            found,
            vec![
                (Direction::Right, VertexId::new(2, 1)),
                (Direction::DownRight, VertexId::new(2, 2)),
                (Direction::UpLeft, VertexId::new(0, 0)),
            ]
        );
    }

    #[test]
    fn link_and_unlink_keep_lists_compact() {
        let (mut g, ids) = line(3);
        assert!(g.link(ids[1], ids[0], 1.0));
        assert!(!g.link(ids[1], ids[0], 1.0));
        assert!(g.link(ids[1], ids[2], 1.0));
        assert_eq!(g.unlink(ids[1], ids[0]), 1);
        assert_eq!(g.unlink(ids[1], ids[0]), 0);
        assert_eq!(g.edges_from(ids[1]).len(), 1);
        assert_eq!(g.unlink_all_from(ids[1]), 1);
        assert!(g.edges_from(ids[1]).is_empty());
        assert!(g.check_invariants().is_ok());
    }

    /// Push `edge` into the list of `list` without any validation.
    fn file_raw(g: &mut Graph, list: VertexId, edge: Edge) {
        g.adjacency.entry(list).or_default().push(edge);
    }

    #[test]
    fn check_invariants_reports_corrupt_lists() {
        let (g, ids) = line(3);
        let ghost = VertexId::new(9, 9);

        let mut bad = g.clone();
        file_raw(&mut bad, ids[0], Edge::new(ids[1], ids[2], 1.0));
        assert_eq!(
            bad.check_invariants(),
            Err(GraphError::MisfiledEdge {
                list: ids[0],
                edge: Edge::new(ids[1], ids[2], 1.0).id(),
            })
        );

        let mut bad = g.clone();
        file_raw(&mut bad, ids[0], Edge::new(ids[0], ghost, 1.0));
        assert_eq!(
            bad.check_invariants(),
            Err(GraphError::DanglingEdge(Edge::new(ids[0], ghost, 1.0).id()))
        );

        let mut bad = g.clone();
        file_raw(&mut bad, ghost, Edge::new(ghost, ids[0], 1.0));
        assert_eq!(bad.check_invariants(), Err(GraphError::UnknownVertex(ghost)));

        let mut bad = g.clone();
        file_raw(&mut bad, ids[1], Edge::new(ids[1], ids[1], 1.0));
        assert_eq!(bad.check_invariants(), Err(GraphError::SelfLoop(ids[1])));

        let mut bad = g.clone();
        file_raw(&mut bad, ids[1], Edge::new(ids[1], ids[2], -1.0));
        assert_eq!(bad.check_invariants(), Err(GraphError::InvalidWeight(-1.0)));

        let mut bad = g.clone();
        file_raw(&mut bad, ids[1], Edge::new(ids[1], ids[2], 1.0));
        file_raw(&mut bad, ids[1], Edge::new(ids[1], ids[2], 2.0));
        assert_eq!(
            bad.check_invariants(),
            Err(GraphError::DuplicateEdge(Edge::new(ids[1], ids[2], 2.0).id()))
        );

        assert!(g.check_invariants().is_ok());
    }

    #[test]
    fn unknown_vertices_are_inactive() {
        let (g, ids) = line(1);
        assert!(g.is_active(ids[0]));
        assert!(!g.is_active(VertexId::new(5, 5)));
        assert!(g.vertex(VertexId::new(5, 5)).is_none());
    }

    #[test]
    fn with_rules_validates_weights() {
        let bad = EdgeWeights {
            cardinal: f64::NAN,
            diagonal: 1.0,
        };
        assert!(Graph::with_rules(bad, WallPolicy::Isolate).is_err());
        let g = Graph::with_rules(EdgeWeights::default(), WallPolicy::IncomingOnly).unwrap();
        assert_eq!(g.wall_policy(), WallPolicy::IncomingOnly);
    }
}
