//! Barycentric coordinates and depth interpolation.
//!
//! For triangle `(p1, p2, p3)` and sample `(x, y)`:
//!
//! ```text
//! area = 0.5 * (-p2.y*p3.x + p1.y*(-p2.x + p3.x) + p1.x*(p2.y - p3.y) + p2.x*p3.y)
//! s    = (p1.y*p3.x - p1.x*p3.y + (p3.y - p1.y)*x + (p1.x - p3.x)*y) / (2*area)
//! t    = (p1.x*p2.y - p1.y*p2.x + (p1.y - p2.y)*x + (p2.x - p1.x)*y) / (2*area)
//! ```
//!
//! The weights of `p1, p2, p3` are `(1 - s - t, s, t)`. The sample is inside
//! when `s >= 0`, `t >= 0` and `s + t <= 1`.

use crate::geometry::{Triangle, Vertex};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Barycentric {
    pub s: f32,
    pub t: f32,
}

impl Barycentric {
    #[inline]
    pub fn is_inside(&self) -> bool {
        self.s >= 0.0 && self.t >= 0.0 && self.s + self.t <= 1.0
    }

    /// Blend per-vertex values `a`, `b`, `c` for `p1`, `p2`, `p3`.
    #[inline]
    pub fn interpolate(&self, a: f32, b: f32, c: f32) -> f32 {
        a * (1.0 - self.s - self.t) + b * self.s + c * self.t
    }
}

/// Per-triangle constants for repeated barycentric queries.
#[derive(Clone, Copy, Debug)]
pub struct TriangleSetup {
    p1: Vertex,
    p2: Vertex,
    p3: Vertex,
    inv_twice_area: f32,
}

impl TriangleSetup {
    /// Returns `None` for degenerate (zero-area) triangles.
    pub fn new(triangle: &Triangle) -> Option<Self> {
        let area = triangle.signed_area();
        if area.abs() < f32::EPSILON {
            return None;
        }
        let [p1, p2, p3] = triangle.points;
        Some(Self {
            p1,
            p2,
            p3,
            inv_twice_area: 1.0 / (2.0 * area),
        })
    }

    #[inline]
    pub fn coords(&self, x: f32, y: f32) -> Barycentric {
        let (p1, p2, p3) = (self.p1, self.p2, self.p3);
        let s = (p1.y * p3.x - p1.x * p3.y + (p3.y - p1.y) * x + (p1.x - p3.x) * y)
            * self.inv_twice_area;
        let t = (p1.x * p2.y - p1.y * p2.x + (p1.y - p2.y) * x + (p2.x - p1.x) * y)
            * self.inv_twice_area;
        Barycentric { s, t }
    }

    /// Interpolated depth at `(x, y)`, or negative infinity outside the
    /// triangle so the sample can never pass a depth test.
    #[inline]
    pub fn depth_at(&self, x: f32, y: f32) -> f32 {
        let b = self.coords(x, y);
        if b.is_inside() {
            b.interpolate(self.p1.z, self.p2.z, self.p3.z)
        } else {
            f32::NEG_INFINITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use approx::assert_relative_eq;

    fn tri(points: [(f32, f32, f32); 3]) -> Triangle {
        Triangle::new(points.map(Vertex::from), colors::HIGHLIGHT)
    }

    #[test]
    fn vertices_map_to_unit_weights() {
        let t = tri([(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (0.0, 4.0, 10.0)]);
        let setup = TriangleSetup::new(&t).unwrap();
        let b1 = setup.coords(0.0, 0.0);
        let b2 = setup.coords(4.0, 0.0);
        let b3 = setup.coords(0.0, 4.0);
        assert_relative_eq!(b1.s, 0.0);
        assert_relative_eq!(b1.t, 0.0);
        assert_relative_eq!(b2.s, 1.0);
        assert_relative_eq!(b2.t, 0.0);
        assert_relative_eq!(b3.s, 0.0);
        assert_relative_eq!(b3.t, 1.0);
    }

    #[test]
    fn interior_point_round_trips_weights() {
        let triangles = [
            tri([(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (0.0, 4.0, 10.0)]),
            tri([(12.5, 3.0, 1.0), (2.0, 18.0, 4.0), (30.0, 25.5, -3.0)]),
            // clockwise
            tri([(0.0, 0.0, 2.0), (0.0, 9.0, 2.0), (9.0, 0.0, 2.0)]),
        ];
        for t in &triangles {
            let [p1, p2, p3] = t.points;
            // centroid-ish interior point with uneven weights
            let (w1, w2, w3) = (0.2, 0.5, 0.3);
            let x = p1.x * w1 + p2.x * w2 + p3.x * w3;
            let y = p1.y * w1 + p2.y * w2 + p3.y * w3;

            let b = TriangleSetup::new(t).unwrap().coords(x, y);
            assert!(b.is_inside());
            assert_relative_eq!(b.s, w2, epsilon = 1e-4);
            assert_relative_eq!(b.t, w3, epsilon = 1e-4);
            assert_relative_eq!(b.interpolate(0.0, 1.0, 0.0), b.s, epsilon = 1e-6);
            assert_relative_eq!(b.interpolate(0.0, 0.0, 1.0), b.t, epsilon = 1e-6);
            assert_relative_eq!(b.interpolate(1.0, 0.0, 0.0), 1.0 - b.s - b.t, epsilon = 1e-6);
        }
    }

    #[test]
    fn depth_is_interpolated_inside() {
        let t = tri([(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (0.0, 4.0, 10.0)]);
        let setup = TriangleSetup::new(&t).unwrap();
        let d = setup.depth_at(1.0, 1.0);
        assert_relative_eq!(d, 2.5, epsilon = 1e-5);
        assert!(d > 0.0 && d < 10.0);
    }

    #[test]
    fn depth_outside_is_negative_infinity() {
        let t = tri([(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (0.0, 4.0, 10.0)]);
        let setup = TriangleSetup::new(&t).unwrap();
        assert_eq!(setup.depth_at(10.0, 10.0), f32::NEG_INFINITY);
        assert_eq!(setup.depth_at(-0.5, 1.0), f32::NEG_INFINITY);
    }

    #[test]
    fn degenerate_triangle_has_no_setup() {
        let t = tri([(0.0, 0.0, 0.0), (2.0, 2.0, 0.0), (5.0, 5.0, 0.0)]);
        assert!(TriangleSetup::new(&t).is_none());
    }
}
