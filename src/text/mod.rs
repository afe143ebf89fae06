//! Text measurement and placement
//!
//! Both font kinds report a tight pixel bounding box in pen coordinates:
//! the origin is the top-left corner of the text line (the ascender line),
//! x grows to the right and y grows downwards. Centering works from that
//! measured box, never from nominal font metrics.

pub mod builtin;
#[cfg(feature = "draw")]
pub mod font;

pub use builtin::BuiltinFont;
#[cfg(feature = "draw")]
pub use font::{FontResolver, LabelFont};

/// Tight bounding box of rendered text, `right`/`bottom` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Smallest box containing both `self` and `other`; empty boxes are ignored
    pub fn union(self, other: TextBounds) -> TextBounds {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        TextBounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Pen origin at which text is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphPlacement {
    pub x: i32,
    pub y: i32,
}

impl GlyphPlacement {
    /// Place text so its measured ink box sits in the middle of a square
    /// canvas of `canvas` pixels.
    ///
    /// The bounding box origin is subtracted on both axes, so the ink lands
    /// at `(canvas - width) / 2` regardless of the font's bearing and ascent.
    /// With `left == 0` the horizontal offset is the plain
    /// `(canvas - width) / 2` formula.
    pub fn centered(canvas: u32, bounds: TextBounds) -> Self {
        let canvas = canvas as i32;
        let x = (canvas - bounds.width()).div_euclid(2) - bounds.left;
        let y = (canvas - bounds.height()).div_euclid(2) - bounds.top;
        GlyphPlacement { x, y }
    }
}
