//! Depth-tested rasterization.
//!
//! Every pixel written by the rasterizers in this module passes through
//! [`DepthBuffer::test_and_update`] before touching a [`Surface`].

mod depth_buffer;
mod edge;
pub mod rasterizer;
mod surface;

pub use depth_buffer::DepthBuffer;
pub use edge::{EdgeRasterizer, EdgeTrace};
pub use rasterizer::{
    EdgeFunctionRasterizer, Rasterizer, RasterizerDispatcher, RasterizerType, ScanlineRasterizer,
};
pub use surface::{ColorBuffer, PixelWrite, Surface};

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    #[error("invalid surface dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: u32, height: u32 },
}

pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<(), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidDimension { width, height });
    }
    Ok(())
}
