use crate::error::FormError;
use crate::units::*;

/// The fixed dimensions a document is laid out against: page size and a
/// uniform margin on all four edges. Coordinates are top-down, with y
/// growing toward the page bottom; the PDF backend flips them at write
/// time.
///
/// The margin must be less than half of each page dimension so the usable
/// area stays strictly positive; [PageGeometry::new] rejects anything else
/// and the fields are private so the invariant holds for the life of the
/// value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageGeometry {
    width: Pt,
    height: Pt,
    margin: Pt,
}

impl PageGeometry {
    /// Create a geometry from a page size and margin, in any unit convertible
    /// to points
    pub fn new(
        width: impl Into<Pt>,
        height: impl Into<Pt>,
        margin: impl Into<Pt>,
    ) -> Result<PageGeometry, FormError> {
        let width = width.into();
        let height = height.into();
        let margin = margin.into();

        if width.0 <= 0.0
            || height.0 <= 0.0
            || margin.0 < 0.0
            || margin + margin >= width
            || margin + margin >= height
        {
            return Err(FormError::InvalidGeometry {
                width,
                height,
                margin,
            });
        }

        Ok(PageGeometry {
            width,
            height,
            margin,
        })
    }

    /// A4 paper (210mm x 297mm) with the standard 20mm form margin
    pub fn a4() -> PageGeometry {
        PageGeometry {
            width: Mm(210.0).into(),
            height: Mm(297.0).into(),
            margin: Mm(20.0).into(),
        }
    }

    /// US Letter paper (8.5in x 11in) with a 0.75in margin
    pub fn letter() -> PageGeometry {
        PageGeometry {
            width: In(8.5).into(),
            height: In(11.0).into(),
            margin: In(0.75).into(),
        }
    }

    /// Replace the margin, re-validating against the page size
    pub fn with_margin(self, margin: impl Into<Pt>) -> Result<PageGeometry, FormError> {
        PageGeometry::new(self.width, self.height, margin)
    }

    /// Full page width
    pub fn width(&self) -> Pt {
        self.width
    }

    /// Full page height
    pub fn height(&self) -> Pt {
        self.height
    }

    /// The uniform margin on all four edges
    pub fn margin(&self) -> Pt {
        self.margin
    }

    /// Width available to content: `width - 2 * margin`
    pub fn usable_width(&self) -> Pt {
        self.width - self.margin - self.margin
    }

    /// Height available to content: `height - 2 * margin`
    pub fn usable_height(&self) -> Pt {
        self.height - self.margin - self.margin
    }

    /// The x-coordinate of the left content edge
    pub fn content_left(&self) -> Pt {
        self.margin
    }

    /// The x-coordinate of the right content edge
    pub fn content_right(&self) -> Pt {
        self.width - self.margin
    }

    /// The y-coordinate of the top content edge
    pub fn content_top(&self) -> Pt {
        self.margin
    }

    /// The y-coordinate of the bottom content edge; content may not be placed
    /// below this line
    pub fn content_bottom(&self) -> Pt {
        self.height - self.margin
    }

    /// The horizontal centre of the page, used for centered headings and
    /// footers
    pub fn center_x(&self) -> Pt {
        self.width / 2.0
    }
}
