use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer pixel-grid corner in window-local coordinates.
///
/// Corner `(x, y)` sits between pixel columns `x - 1` and `x` and between
/// pixel rows `y - 1` and `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Corner {
    pub x: i32,
    pub y: i32,
}

impl Corner {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance; orders identically to the true distance.
    #[inline]
    pub fn distance_sq(self, other: Self) -> i64 {
        let dx = (self.x as i64) - (other.x as i64);
        let dy = (self.y as i64) - (other.y as i64);
        dx * dx + dy * dy
    }

    /// Shares a row or a column with `other`.
    #[inline]
    pub fn is_aligned(self, other: Self) -> bool {
        self.x == other.x || self.y == other.y
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.corner.fmt(f)
    }
}

/// Boundary vertex: its grid corner plus its local sprite-space position
/// (pivot-relative, divided by pixels-per-unit).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Vertex {
    pub corner: Corner,
    pub position: [f32; 2],
}

/// Unordered boundary vertices in detection (row-major) order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VertexSet {
    vertices: Vec<Vertex>,
}

impl VertexSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    pub fn corners(&self) -> Vec<Corner> {
        self.vertices.iter().map(|v| v.corner).collect()
    }

    pub fn into_vec(self) -> Vec<Vertex> {
        self.vertices
    }
}

impl From<Vec<Vertex>> for VertexSet {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }
}

/// Ordered closed polygon; the last vertex connects back to the first.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Contour {
    vertices: Vec<Vertex>,
}

impl Contour {
    pub(crate) fn from_ordered(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn corners(&self) -> Vec<Corner> {
        self.vertices.iter().map(|v| v.corner).collect()
    }

    /// Sprite-space points, ready for a polygon collider.
    pub fn positions(&self) -> Vec<[f32; 2]> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// Consecutive corner pairs including the closing last-to-first edge.
    pub fn edges(&self) -> impl Iterator<Item = (Corner, Corner)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i].corner, self.vertices[(i + 1) % n].corner))
    }
}
