//! Polygon to triangle decomposition.
//!
//! [`FanTriangulator`] anchors every triangle at vertex 0:
//!
//! ```text
//!   v3 ______ v2
//!     |\     |
//!     |  \   |      (v0, v1, v2), (v0, v2, v3)
//!     |    \ |
//!   v0 ‾‾‾‾‾‾ v1
//! ```
//!
//! This is only correct for convex polygons; no concavity check is made.
//! Concave input needs an ear-clipping or monotone decomposition behind the
//! same [`Triangulator`] trait.

use crate::geometry::{Polygon, Triangle};

pub trait Triangulator {
    /// Append the triangles covering `polygon` to `out`.
    ///
    /// Polygons with fewer than three vertices produce nothing.
    fn triangulate_into(&self, polygon: &Polygon, out: &mut Vec<Triangle>);

    fn triangulate(&self, polygon: &Polygon) -> Vec<Triangle> {
        let mut out = Vec::with_capacity(polygon.vertices.len().saturating_sub(2));
        self.triangulate_into(polygon, &mut out);
        out
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FanTriangulator;

impl FanTriangulator {
    pub fn new() -> Self {
        Self
    }
}

impl Triangulator for FanTriangulator {
    fn triangulate_into(&self, polygon: &Polygon, out: &mut Vec<Triangle>) {
        let v = &polygon.vertices;
        if v.len() < 3 {
            return;
        }
        for i in 1..v.len() - 1 {
            out.push(Triangle::new([v[0], v[i], v[i + 1]], polygon.color));
        }
    }
}
