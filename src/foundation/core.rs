/// Straight (non-premultiplied) 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Construct from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha channel, producing straight RGBA8.
    pub fn with_alpha(self, a: u8) -> [u8; 4] {
        [self.r, self.g, self.b, a]
    }
}

/// Tight pixel bounding box of rendered text, relative to the text origin.
///
/// `left`/`top` may be negative for glyphs that overhang the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextMetrics {
    /// Leftmost inked column.
    pub left: i32,
    /// Topmost inked row.
    pub top: i32,
    /// One past the rightmost inked column.
    pub right: i32,
    /// One past the bottommost inked row.
    pub bottom: i32,
}

impl TextMetrics {
    /// Ink width in pixels (`right - left`).
    pub fn width(self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    /// Ink height in pixels (`bottom - top`).
    pub fn height(self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }

    /// `true` when no pixel was inked (empty label or whitespace only).
    pub fn is_empty(self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}
