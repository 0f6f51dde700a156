use crate::font::FontId;
use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum FormError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("margin {margin} leaves no usable area on a {width} x {height} page")]
    /// The requested page geometry has no room for content; the margin must
    /// be less than half of each page dimension
    InvalidGeometry { width: Pt, height: Pt, margin: Pt },

    #[error("font {0:?} is not registered in the font book")]
    /// A theme or span referenced a font that was never added to the
    /// [FontBook](crate::FontBook) the document was composed against
    UnknownFont(FontId),
}
