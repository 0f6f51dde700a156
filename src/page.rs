use crate::colour::Colour;
use crate::font::SpanFont;
use crate::geometry::PageGeometry;
use crate::number::DocumentNumber;
use crate::rect::Rect;
use crate::units::Pt;

/// A primitive drawing instruction on a page. Coordinates are in points with
/// the origin at the top-left corner of the page and y growing downward;
/// text positions name the baseline start of the run.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// An axis-aligned rectangle, filled and/or stroked
    Rect {
        rect: Rect,
        fill: Option<Colour>,
        stroke: Option<Colour>,
        line_width: Pt,
    },
    /// A straight stroked line
    Line {
        from: (Pt, Pt),
        to: (Pt, Pt),
        colour: Colour,
        width: Pt,
    },
    /// A run of text in a single font and colour
    Text {
        at: (Pt, Pt),
        text: String,
        font: SpanFont,
        colour: Colour,
    },
}

/// One laid-out page: an ordered list of draw ops, replayed front to back by
/// the output backend
#[derive(Default, Clone, Debug)]
pub struct Page {
    ops: Vec<DrawOp>,
}

impl Page {
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub(crate) fn extend(&mut self, ops: impl IntoIterator<Item = DrawOp>) {
        self.ops.extend(ops);
    }
}

/// The finished product of composing content blocks: pages of draw ops plus
/// the identity the document was issued under. Composing the same blocks
/// against the same geometry and timestamp yields identical pages.
pub struct RenderedDocument {
    pages: Vec<Page>,
    geometry: PageGeometry,
    number: DocumentNumber,
    filename: String,
}

impl RenderedDocument {
    pub(crate) fn new(
        pages: Vec<Page>,
        geometry: PageGeometry,
        number: DocumentNumber,
        filename: String,
    ) -> RenderedDocument {
        RenderedDocument {
            pages,
            geometry,
            number,
            filename,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// The document number this document was issued under
    pub fn number(&self) -> DocumentNumber {
        self.number
    }

    /// Suggested output filename, derived from the file prefix, the document
    /// number, and the composition timestamp
    pub fn filename(&self) -> &str {
        &self.filename
    }
}
