use crate::units::*;

/// A rectangle in page space, anchored at its top-left corner. Page space
/// runs left-to-right and top-to-bottom, so `bottom() > y` for any rectangle
/// with positive height.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge
    pub x: Pt,
    /// The y-coordinate of the top edge, measured down from the page top
    pub y: Pt,
    /// The width of the rectangle
    pub width: Pt,
    /// The height of the rectangle
    pub height: Pt,
}

impl Rect {
    pub fn new(x: Pt, y: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// The x-coordinate of the right edge
    pub fn right(&self) -> Pt {
        self.x + self.width
    }

    /// The y-coordinate of the bottom edge, measured down from the page top
    pub fn bottom(&self) -> Pt {
        self.y + self.height
    }
}
