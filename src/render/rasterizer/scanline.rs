//! Scanline triangle fill with barycentric depth.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** by ascending Y. The sort is stable so equal-Y vertices
//!    keep their input order.
//! 2. **Walk scanlines** from `ceil(min_y)` to `floor(max_y)`. Each of the
//!    three edges contributes an intersection when it straddles the scanline:
//!    one endpoint at or above it (`y_a <= y`) and the other strictly below
//!    (`y_b > y`). Horizontal edges never straddle, and a vertex shared by two
//!    edges is counted once.
//! 3. **Pair intersections** after sorting them by X: `(x0, x1)`, `(x2, x3)`...
//!    An unpaired trailing intersection (tangent or degenerate input) is
//!    dropped.
//! 4. **Fill spans** from `ceil(x_start)` to `floor(x_end)`. Each sample gets
//!    barycentric weights; samples inside the triangle are depth tested and
//!    written on success.
//!
//! ```text
//!          v0
//!          /\
//!   y --- x0--x1 ---    x = a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y)
//!        /      \
//!      v1--------v2
//! ```
//!
//! Zero-area triangles are skipped before any scanline is visited.

use super::barycentric::TriangleSetup;
use super::Rasterizer;
use crate::geometry::{Triangle, Vertex};
use crate::render::{DepthBuffer, Surface};

#[derive(Clone, Copy, Debug, Default)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// X positions where the triangle's edges cross scanline `y`, ascending.
    ///
    /// `points` must already be sorted by Y. Returns the buffer and how many
    /// of its slots are used.
    #[inline]
    fn intersections(points: &[Vertex; 3], y: f32) -> ([f32; 3], usize) {
        let mut xs = [0.0f32; 3];
        let mut count = 0;
        for i in 0..3 {
            let a = points[i];
            let b = points[(i + 1) % 3];
            let straddles = (a.y <= y && b.y > y) || (b.y <= y && a.y > y);
            if straddles {
                xs[count] = a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y);
                count += 1;
            }
        }
        xs[..count].sort_by(f32::total_cmp);
        (xs, count)
    }
}

impl Rasterizer for ScanlineRasterizer {
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

        let mut points = triangle.points;
        points.sort_by(|a, b| a.y.total_cmp(&b.y));

        // Rows and columns outside the buffer would all fail the depth test.
        let y_start = (points[0].y.ceil() as i32).max(0);
        let y_end = (points[2].y.floor() as i32).min(buffer.height() as i32 - 1);
        let max_x = buffer.width() as i32 - 1;

        let mut accepted = 0;
        for y in y_start..=y_end {
            let yf = y as f32;
            let (xs, count) = Self::intersections(&points, yf);

            for span in xs[..count].chunks_exact(2) {
                let x_start = (span[0].ceil() as i32).max(0);
                let x_end = (span[1].floor() as i32).min(max_x);

                for x in x_start..=x_end {
                    let weights = setup.coords(x as f32, yf);
                    if !weights.is_inside() {
                        continue;
                    }
                    let depth = weights.interpolate(
                        triangle.points[0].z,
                        triangle.points[1].z,
                        triangle.points[2].z,
                    );
                    if buffer.test_and_update(x, y, depth) {
                        surface.set_pixel(x, y, triangle.color);
                        accepted += 1;
                    }
                }
            }
        }
        accepted
    }
}
