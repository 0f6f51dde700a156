use crate::colour::{colours, Colour};
use crate::font::FontId;
use crate::units::Pt;

/// The fonts, colours, and type sizes every block renders with. The defaults
/// reproduce the house style of the standard forms: a blue accent, dark grey
/// labels, and light grey rules and fills.
#[derive(Clone, Debug)]
pub struct Theme {
    pub regular: FontId,
    pub bold: FontId,

    pub accent: Colour,
    pub ink: Colour,
    pub label: Colour,
    pub muted: Colour,
    pub rule: Colour,
    pub box_fill: Colour,
    pub on_accent: Colour,

    pub title_size: Pt,
    pub subtitle_size: Pt,
    pub number_size: Pt,
    pub section_size: Pt,
    pub body_size: Pt,
    pub field_size: Pt,
    pub caption_size: Pt,
    pub footer_size: Pt,
}

impl Theme {
    pub fn new(regular: FontId, bold: FontId) -> Theme {
        Theme {
            regular,
            bold,
            accent: Colour::new_rgb_bytes(42, 82, 152),
            ink: colours::BLACK,
            label: Colour::new_grey_bytes(51),
            muted: Colour::new_grey_bytes(102),
            rule: Colour::new_grey_bytes(221),
            box_fill: Colour::new_grey_bytes(250),
            on_accent: colours::WHITE,
            title_size: Pt(24.0),
            subtitle_size: Pt(14.0),
            number_size: Pt(16.0),
            section_size: Pt(12.0),
            body_size: Pt(12.0),
            field_size: Pt(11.0),
            caption_size: Pt(10.0),
            footer_size: Pt(8.0),
        }
    }
}
