//! A CPU z-buffer rasterizer for flat-colored, depth-annotated polygons.
//!
//! Polygons arrive in screen space with a per-vertex depth (larger is
//! closer). The pipeline either traces their edges (wireframe) or fan
//! triangulates and scanline-fills them with per-pixel depth. Every pixel
//! write goes through one shared [`DepthBuffer`](render::DepthBuffer).
//!
//! # Quick Start
//!
//! ```
//! use polyraster::prelude::*;
//!
//! let mut pipeline = RenderPipeline::new(64, 64)?;
//! let mut surface = ColorBuffer::new(64, 64, colors::BACKGROUND)?;
//! let triangle = Polygon::new(
//!     vec![
//!         Vertex::new(4.0, 4.0, 1.0),
//!         Vertex::new(60.0, 8.0, 1.0),
//!         Vertex::new(20.0, 56.0, 3.0),
//!     ],
//!     Color::new(200, 80, 40),
//! );
//! let report = pipeline.render(&[triangle], &mut surface);
//! assert!(report.pixels > 0);
//! # Ok::<(), polyraster::render::RenderError>(())
//! ```

pub mod colors;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod render;
pub mod scene;
pub mod triangulate;

pub use config::RenderConfig;
pub use engine::{
    RenderMode, RenderPipeline, RenderReport, StepOutcome, VertexLabel, WireframeStepper,
};
pub use render::RenderError;
pub use scene::LoadError;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::colors::{self, Color};
    pub use crate::config::RenderConfig;
    pub use crate::engine::{
        RenderMode, RenderPipeline, RenderReport, StepOutcome, VertexLabel, WireframeStepper,
    };
    pub use crate::geometry::{Polygon, Triangle, Vertex};
    pub use crate::render::{ColorBuffer, DepthBuffer, PixelWrite, RasterizerType, Surface};
    pub use crate::triangulate::{FanTriangulator, Triangulator};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        DepthBuffer, EdgeFunctionRasterizer, EdgeRasterizer, PixelWrite, Rasterizer,
        ScanlineRasterizer,
    };
}
