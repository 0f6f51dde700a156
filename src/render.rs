//! Turns a single [ContentBlock] into draw ops at a cursor position. The
//! composer owns pagination; everything here assumes the cursor it is handed
//! is final and renders relative to it.

use crate::block::ContentBlock;
use crate::colour::Colour;
use crate::cursor::Cursor;
use crate::font::{Font, FontBook, FontId, SpanFont};
use crate::geometry::PageGeometry;
use crate::number::DocumentNumber;
use crate::page::DrawOp;
use crate::rect::Rect;
use crate::text::{truncate_to_width, width_of_text, wrap_text};
use crate::theme::Theme;
use crate::units::{Pt, PT_PER_MM};
use crate::FormError;
use chrono::NaiveDate;

/// Baseline-to-baseline lead of a field row or a wrapped text box line
const ROW_LEAD: Pt = Pt(6.0 * PT_PER_MM);
/// Gap after a field row
const ROW_GAP: Pt = Pt(2.0 * PT_PER_MM);
/// Height of the section title bar
const BAR_HEIGHT: Pt = Pt(8.0 * PT_PER_MM);
/// Gap between the bar and the content below it
const BAR_GAP: Pt = Pt(4.0 * PT_PER_MM);
/// Baseline of the section title within the bar
const BAR_TEXT_DROP: Pt = Pt(6.0 * PT_PER_MM);
/// Horizontal text inset inside bars and boxes
const INSET: Pt = Pt(3.0 * PT_PER_MM);
/// First text baseline below the top edge of a text box
const BOX_TOP_DROP: Pt = Pt(8.0 * PT_PER_MM);
/// Clearance kept below the last line inside a text box, and below the box
const BOX_BOTTOM_INSET: Pt = Pt(2.0 * PT_PER_MM);
/// Space between a field label and its value
const LABEL_PAD: Pt = Pt(5.0 * PT_PER_MM);
/// Clearance a value keeps from the right end of its underline
const VALUE_PAD: Pt = Pt(5.0 * PT_PER_MM);
/// Distance of the value underline below the row baseline
const UNDERLINE_DROP: Pt = Pt(1.0 * PT_PER_MM);
/// Total height of the signature pair area
const SIG_HEIGHT: Pt = Pt(60.0 * PT_PER_MM);
/// Signature rules sit this far into the signature area
const SIG_RULE_DROP: Pt = Pt(30.0 * PT_PER_MM);
/// Caption baselines under the signature rules
const SIG_CAPTION_DROP: Pt = Pt(38.0 * PT_PER_MM);
/// Baseline of the shared date line
const SIG_DATE_DROP: Pt = Pt(55.0 * PT_PER_MM);
/// Baseline of the optional signature heading, leaving signing room above
/// the rules
const SIG_HEADING_DROP: Pt = Pt(10.0 * PT_PER_MM);
/// Total height of a single signature rule with its caption
const SIG_SINGLE_HEIGHT: Pt = Pt(45.0 * PT_PER_MM);
/// Total height of the document header
const HEADER_HEIGHT: Pt = Pt(40.0 * PT_PER_MM);
const HEADER_SUBTITLE_DROP: Pt = Pt(10.0 * PT_PER_MM);
const HEADER_NUMBER_DROP: Pt = Pt(15.0 * PT_PER_MM);
const HEADER_RULE_DROP: Pt = Pt(25.0 * PT_PER_MM);
const HEADER_RULE_WIDTH: Pt = Pt(1.0 * PT_PER_MM);
/// Footer baseline above the bottom edge of the page
const FOOTER_RISE: Pt = Pt(15.0 * PT_PER_MM);
/// Stroke width of underlines, box borders, and signature rules
const HAIRLINE: Pt = Pt(0.2 * PT_PER_MM);
/// Underscores drawn in place of an empty field value
const PLACEHOLDER_LEN: usize = 30;

/// Everything block rendering needs besides the block itself: page shape,
/// fonts, styling, and the identity of the document being composed.
pub struct RenderContext<'a> {
    pub geometry: PageGeometry,
    pub fonts: &'a FontBook,
    pub theme: Theme,
    pub number: DocumentNumber,
    pub today: NaiveDate,
}

impl<'a> RenderContext<'a> {
    fn font(&self, id: FontId) -> Result<&'a Font, FormError> {
        self.fonts.get(id).ok_or(FormError::UnknownFont(id))
    }

    fn regular(&self) -> Result<&'a Font, FormError> {
        self.font(self.theme.regular)
    }

    fn bold(&self) -> Result<&'a Font, FormError> {
        self.font(self.theme.bold)
    }
}

/// Vertical space a block asks for when deciding whether it fits on the
/// current page. Footers are pinned outside the flow and ask for nothing.
pub fn required_height(block: &ContentBlock) -> Pt {
    match block {
        ContentBlock::Header { .. } => HEADER_HEIGHT,
        ContentBlock::SectionTitle(_) => BAR_HEIGHT + BAR_GAP,
        ContentBlock::FieldRow { .. } => ROW_LEAD + ROW_GAP,
        ContentBlock::TextBlock { height, .. } => *height + BOX_BOTTOM_INSET,
        ContentBlock::SignaturePair { .. } => SIG_HEIGHT,
        ContentBlock::SignatureRule(_) => SIG_SINGLE_HEIGHT,
        ContentBlock::Footer(_) => Pt(0.0),
        ContentBlock::Spacer(height) => *height,
    }
}

/// Render one block at the cursor, returning its draw ops and the cursor
/// position for whatever follows it
pub fn render_block(
    block: &ContentBlock,
    cursor: Cursor,
    ctx: &RenderContext,
) -> Result<(Vec<DrawOp>, Cursor), FormError> {
    match block {
        ContentBlock::Header {
            title,
            subtitle,
            number_prefix,
        } => render_header(title, subtitle, number_prefix.as_deref(), cursor, ctx),
        ContentBlock::SectionTitle(title) => render_section_title(title, cursor, ctx),
        ContentBlock::FieldRow { label, value } => render_field_row(label, value, cursor, ctx),
        ContentBlock::TextBlock { text, height } => render_text_block(text, *height, cursor, ctx),
        ContentBlock::SignaturePair {
            heading,
            left,
            right,
        } => render_signature_pair(heading.as_deref(), left, right, cursor, ctx),
        ContentBlock::SignatureRule(caption) => render_signature_rule(caption, cursor, ctx),
        // handled by the composer
        ContentBlock::Footer(_) => Ok((Vec::new(), cursor)),
        ContentBlock::Spacer(height) => Ok((Vec::new(), cursor.advance(*height, &ctx.geometry))),
    }
}

fn centered_text(
    text: &str,
    font: &Font,
    id: FontId,
    size: Pt,
    colour: Colour,
    center_x: Pt,
    y: Pt,
) -> DrawOp {
    DrawOp::Text {
        at: (center_x - width_of_text(text, font, size) / 2.0, y),
        text: text.to_string(),
        font: SpanFont { id, size },
        colour,
    }
}

fn render_header(
    title: &str,
    subtitle: &str,
    number_prefix: Option<&str>,
    cursor: Cursor,
    ctx: &RenderContext,
) -> Result<(Vec<DrawOp>, Cursor), FormError> {
    let theme = &ctx.theme;
    let center = ctx.geometry.center_x();
    let y = cursor.y();

    let mut ops = vec![
        centered_text(
            title,
            ctx.bold()?,
            theme.bold,
            theme.title_size,
            theme.accent,
            center,
            y,
        ),
        centered_text(
            subtitle,
            ctx.regular()?,
            theme.regular,
            theme.subtitle_size,
            theme.muted,
            center,
            y + HEADER_SUBTITLE_DROP,
        ),
    ];

    if let Some(prefix) = number_prefix {
        let numbered = format!("{prefix} {}", ctx.number);
        ops.push(centered_text(
            &numbered,
            ctx.bold()?,
            theme.bold,
            theme.number_size,
            theme.accent,
            center,
            y + HEADER_NUMBER_DROP,
        ));
    }

    ops.push(DrawOp::Line {
        from: (ctx.geometry.content_left(), y + HEADER_RULE_DROP),
        to: (ctx.geometry.content_right(), y + HEADER_RULE_DROP),
        colour: theme.accent,
        width: HEADER_RULE_WIDTH,
    });

    Ok((ops, cursor.advance(HEADER_HEIGHT, &ctx.geometry)))
}

fn render_section_title(
    title: &str,
    cursor: Cursor,
    ctx: &RenderContext,
) -> Result<(Vec<DrawOp>, Cursor), FormError> {
    let theme = &ctx.theme;
    let left = ctx.geometry.content_left();

    let ops = vec![
        DrawOp::Rect {
            rect: Rect::new(left, cursor.y(), ctx.geometry.usable_width(), BAR_HEIGHT),
            fill: Some(theme.accent),
            stroke: None,
            line_width: Pt(0.0),
        },
        DrawOp::Text {
            at: (left + INSET, cursor.y() + BAR_TEXT_DROP),
            text: title.to_string(),
            font: SpanFont {
                id: theme.bold,
                size: theme.section_size,
            },
            colour: theme.on_accent,
        },
    ];

    Ok((ops, cursor.advance(BAR_HEIGHT + BAR_GAP, &ctx.geometry)))
}

fn render_field_row(
    label: &str,
    value: &str,
    cursor: Cursor,
    ctx: &RenderContext,
) -> Result<(Vec<DrawOp>, Cursor), FormError> {
    let theme = &ctx.theme;
    let left = ctx.geometry.content_left();
    let y = cursor.y();

    let label_width = width_of_text(label, ctx.bold()?, theme.field_size) + LABEL_PAD;
    let value_x = left + label_width;
    let value_width = ctx.geometry.content_right() - value_x;

    let display = if value.trim().is_empty() {
        "_".repeat(PLACEHOLDER_LEN)
    } else {
        value.to_string()
    };
    let display = truncate_to_width(
        &display,
        ctx.regular()?,
        theme.field_size,
        value_width - VALUE_PAD,
    );

    let ops = vec![
        DrawOp::Text {
            at: (left, y),
            text: label.to_string(),
            font: SpanFont {
                id: theme.bold,
                size: theme.field_size,
            },
            colour: theme.label,
        },
        DrawOp::Text {
            at: (value_x, y),
            text: display,
            font: SpanFont {
                id: theme.regular,
                size: theme.field_size,
            },
            colour: theme.ink,
        },
        DrawOp::Line {
            from: (value_x, y + UNDERLINE_DROP),
            to: (ctx.geometry.content_right(), y + UNDERLINE_DROP),
            colour: theme.rule,
            width: HAIRLINE,
        },
    ];

    Ok((ops, cursor.advance(ROW_LEAD + ROW_GAP, &ctx.geometry)))
}

fn render_text_block(
    text: &str,
    height: Pt,
    cursor: Cursor,
    ctx: &RenderContext,
) -> Result<(Vec<DrawOp>, Cursor), FormError> {
    let theme = &ctx.theme;
    let left = ctx.geometry.content_left();
    let y = cursor.y();

    // an oversized box shrinks to the room the page actually has
    let box_height = height.min(cursor.remaining(&ctx.geometry));

    let mut ops = vec![DrawOp::Rect {
        rect: Rect::new(left, y, ctx.geometry.usable_width(), box_height),
        fill: Some(theme.box_fill),
        stroke: Some(theme.rule),
        line_width: HAIRLINE,
    }];

    let lines = wrap_text(
        text,
        ctx.regular()?,
        theme.body_size,
        ctx.geometry.usable_width() - INSET - INSET,
    );
    let total = lines.len();
    let limit = y + box_height - BOX_BOTTOM_INSET;
    let mut clipped = 0;
    for (index, line) in lines.into_iter().enumerate() {
        let baseline = y + BOX_TOP_DROP + ROW_LEAD * index as f32;
        if baseline > limit {
            clipped = total - index;
            break;
        }
        if line.is_empty() {
            continue;
        }
        ops.push(DrawOp::Text {
            at: (left + INSET, baseline),
            text: line,
            font: SpanFont {
                id: theme.regular,
                size: theme.body_size,
            },
            colour: theme.ink,
        });
    }
    if clipped > 0 {
        // TODO: continue clipped lines on the next page instead of dropping them
        log::debug!("text box clipped {clipped} of {total} lines");
    }

    Ok((
        ops,
        cursor.advance(box_height + BOX_BOTTOM_INSET, &ctx.geometry),
    ))
}

fn render_signature_pair(
    heading: Option<&str>,
    left_caption: &str,
    right_caption: &str,
    cursor: Cursor,
    ctx: &RenderContext,
) -> Result<(Vec<DrawOp>, Cursor), FormError> {
    let theme = &ctx.theme;
    let y = cursor.y();
    let rule_length = ctx.geometry.usable_width() / 3.0;
    let left_start = ctx.geometry.content_left();
    let right_start = ctx.geometry.content_right() - rule_length;

    let mut ops = Vec::new();
    if let Some(heading) = heading {
        ops.push(centered_text(
            heading,
            ctx.bold()?,
            theme.bold,
            theme.section_size,
            theme.accent,
            ctx.geometry.center_x(),
            y + SIG_HEADING_DROP,
        ));
    }
    for start in [left_start, right_start] {
        ops.push(DrawOp::Line {
            from: (start, y + SIG_RULE_DROP),
            to: (start + rule_length, y + SIG_RULE_DROP),
            colour: theme.ink,
            width: HAIRLINE,
        });
    }

    let regular = ctx.regular()?;
    for (caption, start) in [(left_caption, left_start), (right_caption, right_start)] {
        ops.push(centered_text(
            caption,
            regular,
            theme.regular,
            theme.caption_size,
            theme.label,
            start + rule_length / 2.0,
            y + SIG_CAPTION_DROP,
        ));
    }

    let date = format!("Data: {}", ctx.today.format("%d/%m/%Y"));
    ops.push(centered_text(
        &date,
        regular,
        theme.regular,
        theme.caption_size,
        theme.muted,
        ctx.geometry.center_x(),
        y + SIG_DATE_DROP,
    ));

    Ok((ops, cursor.advance(SIG_HEIGHT, &ctx.geometry)))
}

fn render_signature_rule(
    caption: &str,
    cursor: Cursor,
    ctx: &RenderContext,
) -> Result<(Vec<DrawOp>, Cursor), FormError> {
    let theme = &ctx.theme;
    let y = cursor.y();
    let center = ctx.geometry.center_x();
    let rule_length = ctx.geometry.usable_width() / 3.0;
    let start = center - rule_length / 2.0;

    let ops = vec![
        DrawOp::Line {
            from: (start, y + SIG_RULE_DROP),
            to: (start + rule_length, y + SIG_RULE_DROP),
            colour: theme.ink,
            width: HAIRLINE,
        },
        centered_text(
            caption,
            ctx.regular()?,
            theme.regular,
            theme.caption_size,
            theme.label,
            center,
            y + SIG_CAPTION_DROP,
        ),
    ];

    Ok((ops, cursor.advance(SIG_SINGLE_HEIGHT, &ctx.geometry)))
}

/// Draw ops for the page footer, pinned near the bottom edge regardless of
/// where the content flow ended
pub(crate) fn footer_ops(text: &str, ctx: &RenderContext) -> Result<Vec<DrawOp>, FormError> {
    let theme = &ctx.theme;
    Ok(vec![centered_text(
        text,
        ctx.regular()?,
        theme.regular,
        theme.footer_size,
        theme.muted,
        ctx.geometry.center_x(),
        ctx.geometry.height() - FOOTER_RISE,
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Builtin, Font};
    use crate::units::Mm;

    fn test_context(fonts: &FontBook) -> RenderContext<'_> {
        let mut ids = fonts.iter().map(|(id, _)| id);
        let regular = ids.next().unwrap();
        let bold = ids.next().unwrap();
        RenderContext {
            geometry: PageGeometry::a4(),
            fonts,
            theme: Theme::new(regular, bold),
            number: DocumentNumber::new(
                NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
                42,
            ),
            today: NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
        }
    }

    fn book() -> FontBook {
        let mut fonts = FontBook::new();
        fonts.add(Font::builtin(Builtin::Helvetica));
        fonts.add(Font::builtin(Builtin::HelveticaBold));
        fonts
    }

    #[test]
    fn heights_match_the_layout_rules() {
        assert_eq!(
            required_height(&ContentBlock::header("a", "b")),
            Mm(40.0).into()
        );
        assert_eq!(
            required_height(&ContentBlock::section_title("a")),
            Mm(12.0).into()
        );
        assert_eq!(
            required_height(&ContentBlock::field_row("a", "b")),
            Mm(8.0).into()
        );
        assert_eq!(
            required_height(&ContentBlock::text_block("a", Mm(40.0))),
            Mm(42.0).into()
        );
        assert_eq!(
            required_height(&ContentBlock::footer("a")),
            Pt(0.0)
        );
        assert_eq!(
            required_height(&ContentBlock::spacer(Mm(15.0))),
            Mm(15.0).into()
        );
    }

    #[test]
    fn field_row_underlines_the_value_region() {
        let fonts = book();
        let ctx = test_context(&fonts);
        let cursor = Cursor::at_top(&ctx.geometry);
        let (ops, after) =
            render_block(&ContentBlock::field_row("CPF:", "123"), cursor, &ctx).unwrap();

        assert_eq!(after.y(), cursor.y() + Mm(8.0).into());
        let line = ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .unwrap();
        assert_eq!(line.1 .0, ctx.geometry.content_right());
        assert_eq!(line.0 .1, cursor.y() + Mm(1.0).into());
        assert!(line.0 .0 > ctx.geometry.content_left());
    }

    #[test]
    fn empty_value_renders_a_placeholder_line() {
        let fonts = book();
        let ctx = test_context(&fonts);
        let cursor = Cursor::at_top(&ctx.geometry);
        let (ops, _) =
            render_block(&ContentBlock::field_row("Nome:", "  "), cursor, &ctx).unwrap();

        assert!(ops.iter().any(|op| matches!(
            op,
            DrawOp::Text { text, .. } if text == &"_".repeat(30)
        )));
    }

    #[test]
    fn text_block_clips_lines_past_its_bottom() {
        let fonts = book();
        let ctx = test_context(&fonts);
        let cursor = Cursor::at_top(&ctx.geometry);
        let words = vec!["palavra"; 400].join(" ");
        let (ops, _) = render_block(
            &ContentBlock::text_block(words, Mm(30.0)),
            cursor,
            &ctx,
        )
        .unwrap();

        let limit = cursor.y() + Mm(28.0).into();
        for op in &ops {
            if let DrawOp::Text { at, .. } = op {
                assert!(at.1 <= limit);
            }
        }
    }

    #[test]
    fn signature_rules_span_the_outer_thirds() {
        let fonts = book();
        let ctx = test_context(&fonts);
        let cursor = Cursor::at_top(&ctx.geometry);
        let (ops, after) = render_block(
            &ContentBlock::signature_pair("Contratante", "Contratada"),
            cursor,
            &ctx,
        )
        .unwrap();

        assert_eq!(after.y(), cursor.y() + Mm(60.0).into());
        let rules: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, .. } => Some((from.0, to.0)),
                _ => None,
            })
            .collect();
        assert_eq!(rules.len(), 2);
        let third = ctx.geometry.usable_width() / 3.0;
        assert_eq!(rules[0].0, ctx.geometry.content_left());
        assert!((rules[0].1 - (ctx.geometry.content_left() + third)).0.abs() < 0.001);
        assert_eq!(rules[1].1, ctx.geometry.content_right());
    }

    #[test]
    fn the_signature_heading_appears_only_when_asked() {
        let fonts = book();
        let ctx = test_context(&fonts);
        let cursor = Cursor::at_top(&ctx.geometry);

        let plain = ContentBlock::signature_pair("Contratante", "Contratada");
        let (ops, _) = render_block(&plain, cursor, &ctx).unwrap();
        assert!(!ops
            .iter()
            .any(|op| matches!(op, DrawOp::Text { text, .. } if text == "ASSINATURAS")));

        let headed =
            ContentBlock::headed_signature_pair("ASSINATURAS", "Contratante", "Contratada");
        let (ops, after) = render_block(&headed, cursor, &ctx).unwrap();
        // the heading lives inside the same 60mm envelope
        assert_eq!(after.y(), cursor.y() + Mm(60.0).into());
        let heading_y = ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { text, at, .. } if text == "ASSINATURAS" => Some(at.1),
                _ => None,
            })
            .unwrap();
        assert_eq!(heading_y, cursor.y() + Mm(10.0).into());
    }

    #[test]
    fn a_single_signature_rule_is_centered() {
        let fonts = book();
        let ctx = test_context(&fonts);
        let cursor = Cursor::at_top(&ctx.geometry);
        let (ops, after) = render_block(
            &ContentBlock::signature_rule("Assinatura do Responsável"),
            cursor,
            &ctx,
        )
        .unwrap();

        assert_eq!(after.y(), cursor.y() + Mm(45.0).into());
        let (from, to) = ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .unwrap();
        let center = ctx.geometry.center_x();
        assert!((from.0 + to.0 - center * 2.0).0.abs() < 0.001);
        assert_eq!(from.1, cursor.y() + Mm(30.0).into());
        // no shared date line on the single-rule form
        assert!(!ops
            .iter()
            .any(|op| matches!(op, DrawOp::Text { text, .. } if text.starts_with("Data:"))));
    }

    #[test]
    fn header_shows_the_document_number_only_when_asked() {
        let fonts = book();
        let ctx = test_context(&fonts);
        let cursor = Cursor::at_top(&ctx.geometry);

        let plain = ContentBlock::header("RECIBO", "Benefícios");
        let (ops, _) = render_block(&plain, cursor, &ctx).unwrap();
        assert!(!ops
            .iter()
            .any(|op| matches!(op, DrawOp::Text { text, .. } if text.contains("260823"))));

        let numbered = ContentBlock::numbered_header("ORDEM", "Manutenção", "OS Nº");
        let (ops, _) = render_block(&numbered, cursor, &ctx).unwrap();
        assert!(ops
            .iter()
            .any(|op| matches!(op, DrawOp::Text { text, .. } if text == "OS Nº 260823042")));
    }
}
