//! Z-buffer for hidden surface removal.
//!
//! Cells start at negative infinity ("nothing drawn"), so any finite depth
//! wins the first test. Larger depth is closer to the viewer. The comparison
//! is strict: at equal depth the first writer keeps the pixel.

use super::{check_dimensions, RenderError};

#[derive(Clone, Debug)]
pub struct DepthBuffer {
    depth: Vec<f32>,
    width: u32,
    height: u32,
}

impl DepthBuffer {
    /// Create a buffer of `width * height` cells, all cleared.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        check_dimensions(width, height)?;
        Ok(Self {
            depth: vec![f32::NEG_INFINITY; width as usize * height as usize],
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn clear(&mut self) {
        self.depth.fill(f32::NEG_INFINITY);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Stored depth at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|i| self.depth[i])
    }

    /// Depth test a candidate fragment.
    ///
    /// Writes `depth` and returns `true` only if `(x, y)` is in bounds and
    /// `depth` is strictly greater than the stored value. Out-of-bounds
    /// coordinates are rejected without error.
    #[inline]
    pub fn test_and_update(&mut self, x: i32, y: i32, depth: f32) -> bool {
        match self.index(x, y) {
            Some(i) if depth > self.depth[i] => {
                self.depth[i] = depth;
                true
            }
            _ => false,
        }
    }
}
