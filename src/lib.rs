//! Paginated layout and PDF generation for business forms. Ordered content
//! blocks go in, deterministic pages of draw ops come out, and those pages
//! serialize to a PDF. Content that outgrows a page flows onto the next one
//! whole; nothing is ever split mid-block or drawn past the margins.
//!
//! ```
//! use form_gen::{Composer, ContentBlock, FontBook, Info, PageGeometry, Theme};
//!
//! # fn main() -> Result<(), form_gen::FormError> {
//! let mut fonts = FontBook::new();
//! let (regular, bold) = fonts.add_builtin_pair();
//! let theme = Theme::new(regular, bold);
//!
//! let blocks = vec![
//!     ContentBlock::numbered_header("ORDEM DE SERVIÇO", "Sistema de Manutenção", "OS Nº"),
//!     ContentBlock::section_title("TÉCNICO RESPONSÁVEL"),
//!     ContentBlock::field_row("Nome:", "Maria dos Santos"),
//!     ContentBlock::footer("Gerado automaticamente"),
//! ];
//!
//! let composer = Composer::new(PageGeometry::a4(), &fonts, theme).with_file_prefix("OS");
//! let document = composer.compose(&blocks)?;
//!
//! let mut info = Info::new();
//! info.title("Ordem de Serviço");
//!
//! let mut pdf: Vec<u8> = Vec::new();
//! document.write_pdf(&fonts, &info, &mut pdf)?;
//! assert!(pdf.starts_with(b"%PDF-"));
//! # Ok(())
//! # }
//! ```

mod block;
pub use block::*;

mod colour;
pub use colour::*;

mod compose;
pub use compose::*;

mod cursor;
pub use cursor::*;

mod font;
pub use font::*;

/// Ready-made block lists for the standard forms
pub mod forms;

mod geometry;
pub use geometry::*;

mod info;
pub use info::*;

mod number;
pub use number::*;

mod page;
pub use page::*;

mod pdf;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod render;
pub use render::*;

mod text;
pub use text::*;

mod theme;
pub use theme::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export of the underlying writer, for poking extra objects into
/// generated files
pub use pdf_writer;
