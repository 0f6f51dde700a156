use crate::units::Pt;

/// A unit of document content. Blocks are laid out strictly in the order
/// given; the composer decides where each one lands and when a new page
/// starts, so the same list of blocks always produces the same pages.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentBlock {
    /// Centered document masthead: title, subtitle, and optionally the
    /// document number shown under a labelled prefix
    Header {
        title: String,
        subtitle: String,
        number_prefix: Option<String>,
    },
    /// A full-width accent bar with the section name set in the page colour
    SectionTitle(String),
    /// A bold label followed by an underlined value. A value too wide for
    /// the row is truncated with an ellipsis; an empty value renders as a
    /// fill-in-by-hand placeholder line.
    FieldRow { label: String, value: String },
    /// A bordered box of wrapped free-form text with a fixed height. Lines
    /// that do not fit inside the box are clipped.
    TextBlock { text: String, height: Pt },
    /// Two side-by-side signature rules with captions and a shared date
    /// line, under an optional centered heading
    SignaturePair {
        heading: Option<String>,
        left: String,
        right: String,
    },
    /// One centered signature rule with its caption
    SignatureRule(String),
    /// A centered line pinned near the bottom edge of every page. Footers
    /// take part in no layout; the last one in the block list wins.
    Footer(String),
    /// Vertical breathing room. A spacer never forces a page break; it
    /// simply stops at the bottom margin when there is less room than
    /// asked, and a negative height counts as zero.
    Spacer(Pt),
}

impl ContentBlock {
    pub fn header(title: impl ToString, subtitle: impl ToString) -> ContentBlock {
        ContentBlock::Header {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            number_prefix: None,
        }
    }

    /// A header that also displays the document number under the given
    /// prefix, e.g. `"OS Nº"`
    pub fn numbered_header(
        title: impl ToString,
        subtitle: impl ToString,
        number_prefix: impl ToString,
    ) -> ContentBlock {
        ContentBlock::Header {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            number_prefix: Some(number_prefix.to_string()),
        }
    }

    pub fn section_title(title: impl ToString) -> ContentBlock {
        ContentBlock::SectionTitle(title.to_string())
    }

    pub fn field_row(label: impl ToString, value: impl ToString) -> ContentBlock {
        ContentBlock::FieldRow {
            label: label.to_string(),
            value: value.to_string(),
        }
    }

    pub fn text_block(text: impl ToString, height: impl Into<Pt>) -> ContentBlock {
        ContentBlock::TextBlock {
            text: text.to_string(),
            height: height.into().max(Pt(0.0)),
        }
    }

    pub fn signature_pair(left: impl ToString, right: impl ToString) -> ContentBlock {
        ContentBlock::SignaturePair {
            heading: None,
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// A signature pair with a centered heading above the rules, e.g.
    /// `"ASSINATURAS"`
    pub fn headed_signature_pair(
        heading: impl ToString,
        left: impl ToString,
        right: impl ToString,
    ) -> ContentBlock {
        ContentBlock::SignaturePair {
            heading: Some(heading.to_string()),
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    pub fn signature_rule(caption: impl ToString) -> ContentBlock {
        ContentBlock::SignatureRule(caption.to_string())
    }

    pub fn footer(text: impl ToString) -> ContentBlock {
        ContentBlock::Footer(text.to_string())
    }

    pub fn spacer(height: impl Into<Pt>) -> ContentBlock {
        ContentBlock::Spacer(height.into().max(Pt(0.0)))
    }
}
