use crate::block::ContentBlock;
use crate::cursor::Cursor;
use crate::font::FontBook;
use crate::geometry::PageGeometry;
use crate::number::{clock_suffix, filename, DocumentNumber};
use crate::page::{Page, RenderedDocument};
use crate::render::{footer_ops, render_block, required_height, RenderContext};
use crate::theme::Theme;
use crate::units::Pt;
use crate::FormError;
use chrono::{Local, NaiveDateTime};

/// The pages built up so far plus the one currently receiving ops
struct PageSequence {
    done: Vec<Page>,
    current: Page,
}

impl PageSequence {
    fn new() -> PageSequence {
        PageSequence {
            done: Vec::new(),
            current: Page::default(),
        }
    }

    fn current_mut(&mut self) -> &mut Page {
        &mut self.current
    }

    /// Move the cursor past the bottom margin if the next block would not
    /// fit, starting a fresh page. A block that is too tall even for an
    /// empty page stays put and renders at the top rather than breaking
    /// forever.
    fn ensure_space(&mut self, cursor: Cursor, required: Pt, geometry: &PageGeometry) -> Cursor {
        if cursor.fits(required, geometry) || cursor.at_page_top(geometry) {
            return cursor;
        }
        let next = cursor.next_page(geometry);
        log::debug!(
            "page {} full ({:.1}pt needed, {:.1}pt left), starting page {}",
            cursor.page_index() + 1,
            required.0,
            cursor.remaining(geometry).0,
            next.page_index() + 1,
        );
        self.done.push(std::mem::take(&mut self.current));
        next
    }

    fn into_pages(self) -> Vec<Page> {
        let mut pages = self.done;
        pages.push(self.current);
        pages
    }
}

/// Lays out content blocks into pages. The composer holds everything that
/// stays fixed across documents (geometry, fonts, theme, filename prefix);
/// each [Composer::compose] call takes a block list and produces a
/// [RenderedDocument] with a freshly issued document number.
pub struct Composer<'a> {
    geometry: PageGeometry,
    fonts: &'a FontBook,
    theme: Theme,
    file_prefix: String,
}

impl<'a> Composer<'a> {
    pub fn new(geometry: PageGeometry, fonts: &'a FontBook, theme: Theme) -> Composer<'a> {
        Composer {
            geometry,
            fonts,
            theme,
            file_prefix: "DOC".to_string(),
        }
    }

    /// Set the prefix of generated filenames, e.g. `"OS"` for work orders
    pub fn with_file_prefix(mut self, prefix: impl ToString) -> Composer<'a> {
        self.file_prefix = prefix.to_string();
        self
    }

    /// Compose blocks into pages, stamped with the current wall clock
    pub fn compose(&self, blocks: &[ContentBlock]) -> Result<RenderedDocument, FormError> {
        self.compose_at(blocks, Local::now().naive_local(), clock_suffix())
    }

    /// Compose against a fixed timestamp and number suffix, for reproducing
    /// a document exactly. [Composer::compose] is this with the wall clock.
    pub fn compose_at(
        &self,
        blocks: &[ContentBlock],
        now: NaiveDateTime,
        suffix: u16,
    ) -> Result<RenderedDocument, FormError> {
        let number = DocumentNumber::new(now.date(), suffix);
        let ctx = RenderContext {
            geometry: self.geometry,
            fonts: self.fonts,
            theme: self.theme.clone(),
            number,
            today: now.date(),
        };

        let mut sequence = PageSequence::new();
        let mut cursor = Cursor::at_top(&self.geometry);
        let mut footer: Option<&str> = None;

        for block in blocks {
            // footers sit outside the flow; remember the last one for the
            // stamping pass below
            if let ContentBlock::Footer(text) = block {
                footer = Some(text.as_str());
                continue;
            }
            // spacers pad, they never break
            if !matches!(block, ContentBlock::Spacer(_)) {
                cursor = sequence.ensure_space(cursor, required_height(block), &self.geometry);
            }
            let (ops, after) = render_block(block, cursor, &ctx)?;
            sequence.current_mut().extend(ops);
            cursor = after;
        }

        let mut pages = sequence.into_pages();
        if let Some(text) = footer {
            let ops = footer_ops(text, &ctx)?;
            for page in pages.iter_mut() {
                page.extend(ops.iter().cloned());
            }
        }

        log::info!("composed {} page(s) as document {}", pages.len(), number);

        Ok(RenderedDocument::new(
            pages,
            self.geometry,
            number,
            filename(&self.file_prefix, number, now),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Builtin, Font};
    use crate::units::Mm;
    use chrono::NaiveDate;

    fn setup() -> (FontBook, Theme) {
        let mut fonts = FontBook::new();
        let regular = fonts.add(Font::builtin(Builtin::Helvetica));
        let bold = fonts.add(Font::builtin(Builtin::HelveticaBold));
        let theme = Theme::new(regular, bold);
        (fonts, theme)
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 23)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn no_blocks_still_yields_one_page() {
        let (fonts, theme) = setup();
        let composer = Composer::new(PageGeometry::a4(), &fonts, theme);
        let document = composer.compose_at(&[], noon(), 1).unwrap();
        assert_eq!(document.page_count(), 1);
        assert!(document.pages()[0].is_empty());
    }

    #[test]
    fn spacers_pad_but_never_break() {
        let (fonts, theme) = setup();
        let composer = Composer::new(PageGeometry::a4(), &fonts, theme);
        let blocks = vec![
            ContentBlock::spacer(Mm(400.0)),
            ContentBlock::field_row("Campo:", "valor"),
        ];
        let document = composer.compose_at(&blocks, noon(), 1).unwrap();
        // the oversized spacer saturates at the bottom margin; the row that
        // follows it is what breaks to page two
        assert_eq!(document.page_count(), 2);
        assert!(document.pages()[0].is_empty());
        assert!(!document.pages()[1].is_empty());
    }

    #[test]
    fn the_last_footer_wins() {
        let (fonts, theme) = setup();
        let composer = Composer::new(PageGeometry::a4(), &fonts, theme);
        let blocks = vec![
            ContentBlock::footer("primeiro"),
            ContentBlock::field_row("Campo:", "valor"),
            ContentBlock::footer("segundo"),
        ];
        let document = composer.compose_at(&blocks, noon(), 1).unwrap();
        let texts: Vec<&str> = document.pages()[0]
            .ops()
            .iter()
            .filter_map(|op| match op {
                crate::page::DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert!(texts.contains(&"segundo"));
        assert!(!texts.contains(&"primeiro"));
    }
}
