//! Serializes a [RenderedDocument] into PDF bytes. Draw ops arrive in the
//! engine's top-down coordinate space and are flipped here; everything else
//! is a direct transcription into content stream operators.

use crate::colour::Colour;
use crate::font::FontBook;
use crate::geometry::PageGeometry;
use crate::info::Info;
use crate::page::{DrawOp, Page, RenderedDocument};
use crate::refs::ObjectReferences;
use crate::units::Pt;
use crate::FormError;
use pdf_writer::{Finish, Name, Pdf, Ref};
use std::io::Write;

impl RenderedDocument {
    /// Serialize the document as a PDF to `w`, using `fonts` to resolve the
    /// font handles the pages were composed with. Handles from any other
    /// [FontBook] fail with [FormError::UnknownFont].
    pub fn write_pdf<W: Write>(
        &self,
        fonts: &FontBook,
        info: &Info,
        mut w: W,
    ) -> Result<(), FormError> {
        let mut refs = ObjectReferences::new();
        let catalog_id = refs.alloc();
        let page_tree_id = refs.alloc();

        let mut writer = Pdf::new();
        info.write(&mut refs, &mut writer);

        let page_refs: Vec<Ref> = (0..self.page_count()).map(|_| refs.alloc()).collect();
        let mut page_tree = writer.pages(page_tree_id);
        page_tree.count(page_refs.len() as i32);
        page_tree.kids(page_refs.iter().copied());
        page_tree.finish();

        let mut font_refs: Vec<(usize, Ref)> = Vec::new();
        for (id, font) in fonts.iter() {
            font_refs.push((id.index(), font.write(&mut refs, id, &mut writer)));
        }

        let geometry = *self.geometry();
        let media_box = pdf_writer::Rect {
            x1: 0.0,
            y1: 0.0,
            x2: geometry.width().0,
            y2: geometry.height().0,
        };
        // the content area inside the margins; symmetric, so no flip needed
        let art_box = pdf_writer::Rect {
            x1: geometry.content_left().0,
            y1: geometry.margin().0,
            x2: geometry.content_right().0,
            y2: (geometry.height() - geometry.margin()).0,
        };
        for (page, page_id) in self.pages().iter().zip(page_refs) {
            let content_id = refs.alloc();

            let mut pdf_page = writer.page(page_id);
            pdf_page.media_box(media_box);
            pdf_page.art_box(art_box);
            pdf_page.parent(page_tree_id);
            let mut resources = pdf_page.resources();
            let mut resource_fonts = resources.fonts();
            for (font_index, font_ref) in font_refs.iter() {
                resource_fonts.pair(Name(format!("F{font_index}").as_bytes()), *font_ref);
            }
            resource_fonts.finish();
            resources.finish();
            pdf_page.contents(content_id);
            pdf_page.finish();

            let content = render_ops(page, &geometry, fonts)?;
            writer.stream(content_id, content.as_slice());
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice())?;
        Ok(())
    }
}

/// Transcribe a page's draw ops into a content stream
#[allow(clippy::write_with_newline)]
fn render_ops(page: &Page, geometry: &PageGeometry, fonts: &FontBook) -> Result<Vec<u8>, FormError> {
    let height = geometry.height();
    // the engine's y grows downward from the top-left; PDF's grows upward
    // from the bottom-left
    let flip = |y: Pt| height.0 - y.0;

    let mut content: Vec<u8> = Vec::new();
    for op in page.ops() {
        match op {
            DrawOp::Rect {
                rect,
                fill,
                stroke,
                line_width,
            } => {
                write!(content, "q\n")?;
                if let Some(colour) = fill {
                    write_fill_colour(&mut content, *colour)?;
                }
                if let Some(colour) = stroke {
                    write_stroke_colour(&mut content, *colour)?;
                    write!(content, "{} w\n", line_width.0)?;
                }
                write!(
                    content,
                    "{} {} {} {} re\n",
                    rect.x.0,
                    flip(rect.bottom()),
                    rect.width.0,
                    rect.height.0,
                )?;
                let paint = match (fill.is_some(), stroke.is_some()) {
                    (true, true) => "B",
                    (true, false) => "f",
                    (false, true) => "S",
                    (false, false) => "n",
                };
                write!(content, "{paint}\nQ\n")?;
            }
            DrawOp::Line {
                from,
                to,
                colour,
                width,
            } => {
                let (x1, y1) = *from;
                let (x2, y2) = *to;
                write!(content, "q\n")?;
                write_stroke_colour(&mut content, *colour)?;
                write!(content, "{} w\n", width.0)?;
                write!(content, "{} {} m\n", x1.0, flip(y1))?;
                write!(content, "{} {} l\n", x2.0, flip(y2))?;
                write!(content, "S\nQ\n")?;
            }
            DrawOp::Text {
                at,
                text,
                font,
                colour,
            } => {
                let face = fonts.get(font.id).ok_or(FormError::UnknownFont(font.id))?;
                let (x, y) = *at;
                write!(content, "q\nBT\n")?;
                write!(content, "/F{} {} Tf\n", font.id.index(), font.size.0)?;
                write_fill_colour(&mut content, *colour)?;
                write!(content, "{} {} Td\n", x.0, flip(y))?;
                if face.is_embedded() {
                    write!(content, "<")?;
                    for ch in text.chars() {
                        let gid = face
                            .glyph_id(ch)
                            .or_else(|| face.replacement_glyph_id())
                            .unwrap_or(0);
                        write!(content, "{gid:04x}")?;
                    }
                    write!(content, "> Tj\n")?;
                } else {
                    write_literal_string(&mut content, text);
                    write!(content, " Tj\n")?;
                }
                write!(content, "ET\nQ\n")?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), FormError> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n")?,
        Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} k\n")?,
        Colour::Grey { g } => write!(content, "{g} g\n")?,
    }
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_stroke_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), FormError> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n")?,
        Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} K\n")?,
        Colour::Grey { g } => write!(content, "{g} G\n")?,
    }
    Ok(())
}

/// A PDF literal string in WinAnsi bytes, with delimiters escaped
fn write_literal_string(content: &mut Vec<u8>, text: &str) {
    content.push(b'(');
    for ch in text.chars() {
        match ch {
            '(' => content.extend_from_slice(b"\\("),
            ')' => content.extend_from_slice(b"\\)"),
            '\\' => content.extend_from_slice(b"\\\\"),
            _ => content.push(winansi_byte(ch)),
        }
    }
    content.push(b')');
}

/// The WinAnsiEncoding (CP1252) byte for a character; anything unmappable
/// becomes a question mark
fn winansi_byte(ch: char) -> u8 {
    match ch {
        '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => ch as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => b'?',
    }
}
