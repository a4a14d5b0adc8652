//! Colors and the ARGB8888 packing used by [`ColorBuffer`](crate::render::ColorBuffer).

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into ARGB8888 with full alpha.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpack an ARGB8888 value, dropping alpha.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xFF) as u8,
            g: ((argb >> 8) & 0xFF) as u8,
            b: (argb & 0xFF) as u8,
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub const BACKGROUND: Color = Color::new(0x1E, 0x1E, 0x1E);
/// Edge color for wireframe passes.
pub const HIGHLIGHT: Color = Color::new(0xFF, 0x00, 0x00);
pub const LABEL: Color = Color::new(0xFF, 0xFF, 0xFF);
pub const BLACK: Color = Color::new(0, 0, 0);
