//! Wireframe edge tracing with a DDA line walker.
//!
//! The walker takes `max(|dx|, |dy|)` equal steps from `p1` to `p2`
//! (endpoints included) and rounds the running position to the nearest
//! pixel, ties to even. It is not Bresenham: the exact pixel set depends on
//! the float accumulation and that rounding rule, so the position is
//! accumulated in `f64`.
//!
//! Steps whose position cannot land on the surface are never visited. The
//! walk starts at the first step that can and stops after the last one.
//!
//! An edge carries one flat depth supplied by the caller. Depth is not
//! interpolated along the edge, unlike the triangle fill path.

use super::{DepthBuffer, Surface};
use crate::colors::{self, Color};
use crate::geometry::Vertex;

/// Result of tracing one edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeTrace {
    /// `max(|dx|, |dy|)`; the walk spans `steps + 1` positions.
    pub steps: u64,
    /// Pixels that passed the depth test and were written.
    pub accepted: u32,
}

#[derive(Clone, Copy, Debug)]
pub struct EdgeRasterizer {
    color: Color,
}

impl Default for EdgeRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeRasterizer {
    pub fn new() -> Self {
        Self::with_color(colors::HIGHLIGHT)
    }

    pub fn with_color(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    fn deltas(p1: Vertex, p2: Vertex) -> (f64, f64, u64) {
        let dx = (f64::from(p2.x) - f64::from(p1.x)).round_ties_even();
        let dy = (f64::from(p2.y) - f64::from(p1.y)).round_ties_even();
        (dx, dy, dx.abs().max(dy.abs()) as u64)
    }

    /// Number of DDA steps between two points.
    pub fn steps(p1: Vertex, p2: Vertex) -> u64 {
        Self::deltas(p1, p2).2
    }

    /// Trace the segment `p1 -> p2` at a flat `depth`.
    ///
    /// Coincident points collapse to a single pixel at `p1`. Edges with a
    /// non-finite coordinate draw nothing.
    pub fn draw_edge(
        &self,
        p1: Vertex,
        p2: Vertex,
        depth: f32,
        buffer: &mut DepthBuffer,
        surface: &mut dyn Surface,
    ) -> EdgeTrace {
        let (dx, dy, steps) = Self::deltas(p1, p2);
        let mut trace = EdgeTrace {
            steps,
            accepted: 0,
        };

        if !dx.is_finite() || !dy.is_finite() || !p1.x.is_finite() || !p1.y.is_finite() {
            log::trace!("skipping non-finite edge {p1:?} -> {p2:?}");
            trace.steps = 0;
            return trace;
        }

        let (width, height) = (buffer.width(), buffer.height());
        let mut plot = |x: f64, y: f64| {
            let px = x.round_ties_even() as i32;
            let py = y.round_ties_even() as i32;
            if buffer.test_and_update(px, py, depth) {
                surface.set_pixel(px, py, self.color);
                trace.accepted += 1;
            }
        };

        let (x0, y0) = (f64::from(p1.x), f64::from(p1.y));

        if steps == 0 {
            log::trace!("zero-length edge at ({}, {})", p1.x, p1.y);
            plot(x0, y0);
            return trace;
        }

        let x_increment = dx / steps as f64;
        let y_increment = dy / steps as f64;

        let visible = visible_steps(x0, x_increment, width, steps)
            .zip(visible_steps(y0, y_increment, height, steps))
            .map(|((xa, xb), (ya, yb))| (xa.max(ya), xb.min(yb)))
            .filter(|(first, last)| first <= last);
        let Some((first, last)) = visible else {
            log::trace!("edge {p1:?} -> {p2:?} misses the surface");
            return trace;
        };

        let (mut x, mut y) = if first == 0 {
            (x0, y0)
        } else {
            (
                x0 + first as f64 * x_increment,
                y0 + first as f64 * y_increment,
            )
        };

        for _ in first..=last {
            plot(x, y);
            x += x_increment;
            y += y_increment;
        }

        trace
    }
}

/// Step range `[first, last]` along one axis whose position, starting at
/// `start` and moving `increment` per step, can round into `[0, extent)`.
/// Padded by one pixel and one step on each side.
fn visible_steps(start: f64, increment: f64, extent: u32, steps: u64) -> Option<(u64, u64)> {
    let (lo, hi) = (-1.0, f64::from(extent) + 1.0);
    if increment == 0.0 {
        return (lo..=hi).contains(&start).then_some((0, steps));
    }
    let a = (lo - start) / increment;
    let b = (hi - start) / increment;
    let first = (a.min(b).floor() - 1.0).max(0.0);
    let last = (a.max(b).ceil() + 1.0).min(steps as f64);
    (first <= last).then(|| (first as u64, last as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PixelWrite;

    fn setup() -> (DepthBuffer, Vec<PixelWrite>) {
        (DepthBuffer::new(32, 32).unwrap(), Vec::new())
    }

    #[test]
    fn horizontal_edge_covers_both_endpoints() {
        let (mut depth, mut out) = setup();
        let trace = EdgeRasterizer::new().draw_edge(
            Vertex::new(0.0, 0.0, 1.0),
            Vertex::new(10.0, 0.0, 1.0),
            1.0,
            &mut depth,
            &mut out,
        );
        assert_eq!(trace, EdgeTrace { steps: 10, accepted: 11 });
        let xs: Vec<i32> = out.iter().map(|w| w.x).collect();
        assert_eq!(xs, (0..=10).collect::<Vec<_>>());
        assert!(out.iter().all(|w| w.y == 0 && w.color == colors::HIGHLIGHT));
    }

    #[test]
    fn steep_edge_steps_along_y() {
        let (mut depth, mut out) = setup();
        let trace = EdgeRasterizer::new().draw_edge(
            Vertex::new(2.0, 1.0, 0.0),
            Vertex::new(4.0, 9.0, 0.0),
            0.0,
            &mut depth,
            &mut out,
        );
        assert_eq!(trace.steps, 8);
        assert_eq!(out.len(), 9);
        assert_eq!((out[0].x, out[0].y), (2, 1));
        assert_eq!((out[8].x, out[8].y), (4, 9));
        for (i, w) in out.iter().enumerate() {
            assert_eq!(w.y, 1 + i as i32);
        }
    }

    #[test]
    fn coincident_points_plot_one_pixel() {
        let (mut depth, mut out) = setup();
        let p = Vertex::new(5.2, 6.7, 3.0);
        let trace = EdgeRasterizer::new().draw_edge(p, p, 3.0, &mut depth, &mut out);
        assert_eq!(trace, EdgeTrace { steps: 0, accepted: 1 });
        assert_eq!((out[0].x, out[0].y), (5, 7));
    }

    #[test]
    fn edge_depth_is_flat_and_tested() {
        let (mut depth, mut out) = setup();
        let raster = EdgeRasterizer::new();
        let a = Vertex::new(0.0, 3.0, 0.0);
        let b = Vertex::new(6.0, 3.0, 100.0);
        raster.draw_edge(a, b, 4.0, &mut depth, &mut out);
        for x in 0..=6 {
            assert_eq!(depth.get(x, 3), Some(4.0));
        }
        // Same depth again is rejected everywhere.
        let again = raster.draw_edge(a, b, 4.0, &mut depth, &mut out);
        assert_eq!(again.accepted, 0);
        assert_eq!(out.len(), 7);
    }

    #[test]
    fn off_surface_pixels_are_skipped() {
        let mut depth = DepthBuffer::new(5, 5).unwrap();
        let mut out = Vec::new();
        let trace = EdgeRasterizer::new().draw_edge(
            Vertex::new(-3.0, 2.0, 0.0),
            Vertex::new(7.0, 2.0, 0.0),
            1.0,
            &mut depth,
            &mut out,
        );
        assert_eq!(trace.steps, 10);
        assert_eq!(trace.accepted, 5);
        assert!(out.iter().all(|w| (0..5).contains(&w.x)));
    }

    #[test]
    fn fractional_endpoints_round_deltas() {
        // dx = round(3.6) = 4 so the walk has 4 steps from x = 0.3.
        assert_eq!(
            EdgeRasterizer::steps(Vertex::new(0.3, 0.0, 0.0), Vertex::new(3.9, 1.2, 0.0)),
            4
        );
    }

    #[test]
    fn accumulates_in_double_precision_at_ties() {
        // 0.3 summed 25 times lands just below 7.5 in f64.
        let mut depth = DepthBuffer::new(600, 200).unwrap();
        let mut out = Vec::new();
        let trace = EdgeRasterizer::new().draw_edge(
            Vertex::new(0.0, 0.0, 0.0),
            Vertex::new(500.0, 150.0, 0.0),
            1.0,
            &mut depth,
            &mut out,
        );
        assert_eq!(trace, EdgeTrace { steps: 500, accepted: 501 });
        assert_eq!((out[25].x, out[25].y), (25, 7));
        assert_eq!((out[500].x, out[500].y), (500, 150));
    }

    #[test]
    fn far_endpoint_keeps_full_step_count_and_clips_walk() {
        let near = Vertex::new(0.0, 0.0, 0.0);
        let far = Vertex::new(1e10, 0.0, 0.0);
        assert_eq!(EdgeRasterizer::steps(near, far), 10_000_000_000);

        let (mut depth, mut out) = setup();
        let trace = EdgeRasterizer::new().draw_edge(near, far, 1.0, &mut depth, &mut out);
        assert_eq!(trace.steps, 10_000_000_000);
        assert_eq!(trace.accepted, 32);
        let xs: Vec<i32> = out.iter().map(|w| w.x).collect();
        assert_eq!(xs, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn walk_from_far_off_surface_enters_at_the_right_pixels() {
        let (mut depth, mut out) = setup();
        let trace = EdgeRasterizer::new().draw_edge(
            Vertex::new(1e10, 5.0, 0.0),
            Vertex::new(0.0, 5.0, 0.0),
            1.0,
            &mut depth,
            &mut out,
        );
        assert_eq!(trace.accepted, 32);
        let xs: Vec<i32> = out.iter().map(|w| w.x).collect();
        assert_eq!(xs, (0..32).rev().collect::<Vec<_>>());
        assert!(out.iter().all(|w| w.y == 5));
    }

    #[test]
    fn edge_missing_the_surface_draws_nothing() {
        let (mut depth, mut out) = setup();
        let trace = EdgeRasterizer::new().draw_edge(
            Vertex::new(-50.0, 40.0, 0.0),
            Vertex::new(80.0, 60.0, 0.0),
            1.0,
            &mut depth,
            &mut out,
        );
        assert_eq!(trace, EdgeTrace { steps: 130, accepted: 0 });
        assert!(out.is_empty());
    }

    #[test]
    fn non_finite_edge_is_skipped() {
        let (mut depth, mut out) = setup();
        let trace = EdgeRasterizer::new().draw_edge(
            Vertex::new(f32::NAN, 0.0, 0.0),
            Vertex::new(4.0, 0.0, 0.0),
            1.0,
            &mut depth,
            &mut out,
        );
        assert_eq!(trace, EdgeTrace::default());
        assert!(out.is_empty());
    }
}
