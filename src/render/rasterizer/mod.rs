//! Triangle fill algorithms.
//!
//! Available algorithms:
//! - [`ScanlineRasterizer`]: scanline walk with edge intersections (default)
//! - [`EdgeFunctionRasterizer`]: bounding box walk with barycentric tests
//!
//! Both compute depth per pixel with [`Barycentric`] weights and depth test
//! every sample before writing. The two can be swapped at runtime through
//! [`RasterizerDispatcher`] for comparison and benchmarking.

mod barycentric;
mod edgefunction;
mod scanline;

pub use barycentric::{Barycentric, TriangleSetup};
pub use edgefunction::EdgeFunctionRasterizer;
pub use scanline::ScanlineRasterizer;

use super::{DepthBuffer, Surface};
use crate::geometry::Triangle;

/// Trait for triangle rasterization algorithms.
///
/// Implementors decide which pixels a triangle covers. Visibility is always
/// settled by the [`DepthBuffer`], so any two implementations produce the
/// same depth for a pixel they both cover.
pub trait Rasterizer {
    /// Fill `triangle` with its color, depth testing every pixel.
    ///
    /// # Arguments
    /// * `triangle` - Screen-space triangle; `color` is written on acceptance
    /// * `buffer` - Depth buffer consulted and updated per pixel
    /// * `surface` - Sink for accepted pixels
    ///
    /// Returns how many pixels were accepted. Degenerate triangles fill
    /// nothing.
    fn fill_triangle(
        &self,
        triangle: &Triangle,
        buffer: &mut DepthBuffer,
        surface: &mut dyn Surface,
    ) -> usize;
}

/// Available rasterization algorithms.
///
/// Selected through `RenderConfig::rasterizer` or changed at runtime with
/// `RenderPipeline::set_rasterizer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterizerType {
    /// Scanline fill over rows between the lowest and highest vertex.
    /// Only edges straddling a row contribute span ends, so a row that
    /// touches just the top vertex is left empty.
    #[default]
    Scanline,
    /// Tests every pixel center in the clamped bounding box against the
    /// barycentric weights. Covers a superset of the scanline fill.
    EdgeFunction,
}

impl std::fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizerType::Scanline => write!(f, "Scanline"),
            RasterizerType::EdgeFunction => write!(f, "EdgeFunction"),
        }
    }
}

/// Holds both rasterizers and forwards to the active one.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterizerDispatcher {
    scanline: ScanlineRasterizer,
    edge_function: EdgeFunctionRasterizer,
    active: RasterizerType,
}

impl RasterizerDispatcher {
    pub fn new(rasterizer_type: RasterizerType) -> Self {
        Self {
            scanline: ScanlineRasterizer::new(),
            edge_function: EdgeFunctionRasterizer::new(),
            active: rasterizer_type,
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }
}

impl Rasterizer for RasterizerDispatcher {
    #[inline]
    fn fill_triangle(
        &self,
        triangle: &Triangle,
        buffer: &mut DepthBuffer,
        surface: &mut dyn Surface,
    ) -> usize {
        match self.active {
            RasterizerType::Scanline => self.scanline.fill_triangle(triangle, buffer, surface),
            RasterizerType::EdgeFunction => {
                self.edge_function.fill_triangle(triangle, buffer, surface)
            }
        }
    }
}
