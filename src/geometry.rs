//! Screen-space geometry handed to the rasterizers.
//!
//! `x` and `y` are pixel coordinates (fractional values allowed). `z` is a
//! scene-relative depth where a larger value is closer to the viewer.

use crate::colors::Color;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<(f32, f32, f32)> for Vertex {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self { x, y, z }
    }
}

/// A flat-colored polygon. Edges run `v[i] -> v[(i + 1) % n]`.
///
/// Winding is not significant. Polygons with fewer than three vertices are
/// not renderable and are skipped by the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
    pub color: Color,
}

impl Polygon {
    pub fn new(vertices: Vec<Vertex>, color: Color) -> Self {
        Self { vertices, color }
    }

    pub fn is_renderable(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Mean vertex depth, used as the coarse pre-sort key for fill passes.
    pub fn mean_depth(&self) -> f32 {
        if self.vertices.is_empty() {
            return 0.0;
        }
        self.vertices.iter().map(|v| v.z).sum::<f32>() / self.vertices.len() as f32
    }

    /// Iterate the closed boundary as `(start, end)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

/// A triangle ready for rasterization, tagged with its polygon's color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vertex; 3],
    pub color: Color,
}

impl Triangle {
    pub fn new(points: [Vertex; 3], color: Color) -> Self {
        Self { points, color }
    }

    /// Signed area; zero for collinear vertices.
    pub fn signed_area(&self) -> f32 {
        let [p1, p2, p3] = self.points;
        0.5 * (-p2.y * p3.x + p1.y * (-p2.x + p3.x) + p1.x * (p2.y - p3.y) + p2.x * p3.y)
    }
}
