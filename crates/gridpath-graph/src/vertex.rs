//! Graph vertices, identified by their grid position.

use std::fmt;

use crate::geom::Point;

/// Identity of a vertex. A pure function of its position: two vertices at
/// the same point are the same vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(Point);

impl VertexId {
    /// Identity of the vertex at `(x, y)`.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self(Point::new(x, y))
    }

    /// The position this identity was derived from.
    #[inline]
    pub const fn position(self) -> Point {
        self.0
    }
}

impl From<Point> for VertexId {
    fn from(p: Point) -> Self {
        Self(p)
    }
}

impl From<VertexId> for Point {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex_{}x{}", self.0.x, self.0.y)
    }
}

/// A node of the graph. Inactive vertices are walls.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    id: VertexId,
    pub(crate) active: bool,
}

impl Vertex {
    /// A new, active vertex at `position`.
    pub fn new(position: Point) -> Self {
        Self {
            id: VertexId::from(position),
            active: true,
        }
    }

    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.id.position()
    }

    /// Whether the vertex is traversable (not a wall).
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
