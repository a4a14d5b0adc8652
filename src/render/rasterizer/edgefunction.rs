//! Bounding-box triangle fill.
//!
//! Visits every integer sample in the triangle's bounding box (clamped to the
//! buffer) and keeps the ones whose barycentric weights are inside. The
//! weights come from the same formulas as the scanline path, so the two
//! rasterizers agree on depth; they can differ on boundary pixels because
//! this walk has no straddle rule for the top-most row.
//!
//! Simpler than the scanline walk and independent per pixel, at the cost of
//! testing the empty corners of the box.

use super::barycentric::TriangleSetup;
use super::Rasterizer;
use crate::geometry::Triangle;
use crate::render::{DepthBuffer, Surface};

#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        EdgeFunctionRasterizer {}
    }
}

impl Rasterizer for EdgeFunctionRasterizer {
    fn fill_triangle(
        &self,
        triangle: &Triangle,
        buffer: &mut DepthBuffer,
        surface: &mut dyn Surface,
    ) -> usize {
        let Some(setup) = TriangleSetup::new(triangle) else {
            log::trace!("skipping degenerate triangle {:?}", triangle.points);
            return 0;
        };
        let [v0, v1, v2] = triangle.points;

        let min_x = (v0.x.min(v1.x).min(v2.x).ceil() as i32).max(0);
        let max_x = (v0.x.max(v1.x).max(v2.x).floor() as i32).min(buffer.width() as i32 - 1);
        let min_y = (v0.y.min(v1.y).min(v2.y).ceil() as i32).max(0);
        let max_y = (v0.y.max(v1.y).max(v2.y).floor() as i32).min(buffer.height() as i32 - 1);

        let mut accepted = 0;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let weights = setup.coords(x as f32, y as f32);
                if !weights.is_inside() {
                    continue;
                }
                let depth = weights.interpolate(v0.z, v1.z, v2.z);
                if buffer.test_and_update(x, y, depth) {
                    surface.set_pixel(x, y, triangle.color);
                    accepted += 1;
                }
            }
        }
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Color;
    use crate::geometry::Vertex;
    use crate::render::{PixelWrite, ScanlineRasterizer};
    use std::collections::HashSet;

    fn tri(points: [(f32, f32, f32); 3]) -> Triangle {
        Triangle::new(points.map(Vertex::from), Color::new(0, 200, 0))
    }

    fn coverage(r: &dyn Rasterizer, t: &Triangle) -> HashSet<(i32, i32)> {
        let mut depth = DepthBuffer::new(40, 40).unwrap();
        let mut out: Vec<PixelWrite> = Vec::new();
        r.fill_triangle(t, &mut depth, &mut out);
        out.into_iter().map(|w| (w.x, w.y)).collect()
    }

    #[test]
    fn covers_everything_the_scanline_walk_covers() {
        let t = tri([(2.5, 3.5, 1.0), (30.2, 8.9, 2.0), (11.0, 33.3, 3.0)]);
        let scan = coverage(&ScanlineRasterizer::new(), &t);
        let edge = coverage(&EdgeFunctionRasterizer::new(), &t);
        assert!(!scan.is_empty());
        assert!(scan.is_subset(&edge));
    }

    #[test]
    fn includes_apex_row_on_integer_vertex() {
        let t = tri([(0.0, 0.0, 1.0), (4.0, 0.0, 1.0), (0.0, 4.0, 1.0)]);
        let edge = coverage(&EdgeFunctionRasterizer::new(), &t);
        assert!(edge.contains(&(0, 4)));
        assert_eq!(edge.len(), 15);
    }

    #[test]
    fn degenerate_triangle_fills_nothing() {
        let t = tri([(1.0, 1.0, 1.0), (1.0, 5.0, 1.0), (1.0, 9.0, 1.0)]);
        assert!(coverage(&EdgeFunctionRasterizer::new(), &t).is_empty());
    }
}
