use crate::geometry::PageGeometry;
use crate::units::Pt;

/// Layout position within a document being composed: which page, and how far
/// down it. The y coordinate grows toward the bottom of the page, starts at
/// the top margin, and never passes the bottom margin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cursor {
    page_index: usize,
    y: Pt,
}

impl Cursor {
    /// The starting position: top of the first page's content area
    pub fn at_top(geometry: &PageGeometry) -> Cursor {
        Cursor {
            page_index: 0,
            y: geometry.margin(),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn y(&self) -> Pt {
        self.y
    }

    /// Vertical space left between the cursor and the bottom margin
    pub fn remaining(&self, geometry: &PageGeometry) -> Pt {
        geometry.content_bottom() - self.y
    }

    /// Whether a block of the given height fits between the cursor and the
    /// bottom margin
    pub fn fits(&self, height: Pt, geometry: &PageGeometry) -> bool {
        self.y + height <= geometry.content_bottom()
    }

    /// Whether the cursor sits at the very top of a content area, where
    /// breaking to a new page would gain nothing
    pub fn at_page_top(&self, geometry: &PageGeometry) -> bool {
        self.y == geometry.margin()
    }

    /// Move down by `height`, clamping at the bottom margin so the cursor
    /// never leaves the content area. A negative height counts as zero: the
    /// cursor only ever moves toward the page bottom.
    #[must_use]
    pub fn advance(self, height: Pt, geometry: &PageGeometry) -> Cursor {
        Cursor {
            page_index: self.page_index,
            y: (self.y + height.max(Pt(0.0))).min(geometry.content_bottom()),
        }
    }

    /// Move to the top of the following page
    #[must_use]
    pub fn next_page(self, geometry: &PageGeometry) -> Cursor {
        Cursor {
            page_index: self.page_index + 1,
            y: geometry.margin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Mm;

    #[test]
    fn advancing_moves_down_the_page() {
        let geometry = PageGeometry::a4();
        let cursor = Cursor::at_top(&geometry);
        assert!(cursor.at_page_top(&geometry));
        let moved = cursor.advance(Mm(30.0).into(), &geometry);
        assert_eq!(moved.page_index(), 0);
        assert_eq!(moved.y(), cursor.y() + Mm(30.0).into());
        assert!(!moved.at_page_top(&geometry));
    }

    #[test]
    fn advancing_saturates_at_the_bottom_margin() {
        let geometry = PageGeometry::a4();
        let cursor = Cursor::at_top(&geometry).advance(Mm(1000.0).into(), &geometry);
        assert_eq!(cursor.y(), geometry.content_bottom());
        assert_eq!(cursor.remaining(&geometry), Pt(0.0));
    }

    #[test]
    fn a_negative_advance_stays_put() {
        let geometry = PageGeometry::a4();
        let cursor = Cursor::at_top(&geometry).advance(Mm(30.0).into(), &geometry);
        let held = cursor.advance(Mm(-50.0).into(), &geometry);
        assert_eq!(held.y(), cursor.y());
        assert_eq!(held.page_index(), cursor.page_index());

        // even from the very top, the cursor never backs above the margin
        let top = Cursor::at_top(&geometry).advance(Mm(-5.0).into(), &geometry);
        assert_eq!(top.y(), geometry.margin());
    }

    #[test]
    fn fits_is_inclusive_of_an_exact_fit() {
        let geometry = PageGeometry::a4();
        let cursor = Cursor::at_top(&geometry);
        assert!(cursor.fits(geometry.usable_height(), &geometry));
        assert!(!cursor.fits(geometry.usable_height() + Pt(0.1), &geometry));
    }

    #[test]
    fn next_page_resets_to_the_top_margin() {
        let geometry = PageGeometry::a4();
        let cursor = Cursor::at_top(&geometry)
            .advance(Mm(200.0).into(), &geometry)
            .next_page(&geometry);
        assert_eq!(cursor.page_index(), 1);
        assert!(cursor.at_page_top(&geometry));
    }
}
