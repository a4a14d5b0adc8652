//! Render settings shared by the library and the command line.

use crate::colors::{self, Color};
use crate::engine::RenderMode;
use crate::render::RasterizerType;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub mode: RenderMode,
    pub rasterizer: RasterizerType,
    /// Report `(x, y)` labels for every vertex after a fill pass.
    pub label_vertices: bool,
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mode: RenderMode::default(),
            rasterizer: RasterizerType::default(),
            label_vertices: false,
            background: colors::BACKGROUND,
        }
    }
}
