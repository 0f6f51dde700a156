use crate::refs::ObjectReferences;
use crate::units::Pt;
use crate::FormError;
use id_arena::{Arena, Id};
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::HashMap;

/// Handle identifying a [Font] within a [FontBook]
pub type FontId = Id<Font>;

/// A font handle paired with a size, describing how a span of text is set
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: FontId,
    pub size: Pt,
}

/// The standard PDF base fonts the crate ships metrics for. These render in
/// every viewer without embedding any font file, which keeps form documents
/// small and lets the engine run without font assets on disk.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Builtin {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

impl Builtin {
    /// The PostScript name written into the PDF font dictionary
    pub fn base_name(&self) -> &'static str {
        match self {
            Builtin::Helvetica => "Helvetica",
            Builtin::HelveticaBold => "Helvetica-Bold",
            Builtin::HelveticaOblique => "Helvetica-Oblique",
            Builtin::HelveticaBoldOblique => "Helvetica-BoldOblique",
            Builtin::Courier => "Courier",
            Builtin::CourierBold => "Courier-Bold",
            Builtin::CourierOblique => "Courier-Oblique",
            Builtin::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    fn is_courier(&self) -> bool {
        matches!(
            self,
            Builtin::Courier
                | Builtin::CourierBold
                | Builtin::CourierOblique
                | Builtin::CourierBoldOblique
        )
    }

    fn is_bold(&self) -> bool {
        matches!(
            self,
            Builtin::HelveticaBold
                | Builtin::HelveticaBoldOblique
                | Builtin::CourierBold
                | Builtin::CourierBoldOblique
        )
    }

    /// Advance width of a character in thousandths of an em
    fn char_width_milli(&self, ch: char) -> u16 {
        if self.is_courier() {
            return COURIER_WIDTH;
        }
        let ch = fold_latin1(ch);
        let table = if self.is_bold() {
            &HELVETICA_BOLD_WIDTHS
        } else {
            &HELVETICA_WIDTHS
        };
        if (' '..='~').contains(&ch) {
            table[ch as usize - ' ' as usize]
        } else {
            DEFAULT_WIDTH
        }
    }

    fn ascent_milli(&self) -> i16 {
        if self.is_courier() {
            629
        } else {
            718
        }
    }

    fn descent_milli(&self) -> i16 {
        if self.is_courier() {
            -157
        } else {
            -207
        }
    }
}

/// Accented Latin-1 letters share the width of their base letter in the
/// standard Helvetica metrics, so measurement folds them down before the
/// table lookup.
fn fold_latin1(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'ç' => 'c',
        'ñ' => 'n',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ý' => 'Y',
        'Ç' => 'C',
        'Ñ' => 'N',
        _ => ch,
    }
}

pub(crate) enum FontKind {
    Builtin(Builtin),
    Embedded(OwnedFace),
}

/// A font available to the layout engine. Builtin fonts measure against the
/// shipped Helvetica/Courier width tables and are never embedded; fonts
/// loaded from TTF/OTF bytes are embedded in their entirety in the generated
/// PDF, so large faces may dramatically increase the output size.
pub struct Font {
    pub(crate) kind: FontKind,
}

impl Font {
    /// A font backed by one of the standard PDF base fonts; no file needed
    pub fn builtin(which: Builtin) -> Font {
        Font {
            kind: FontKind::Builtin(which),
        }
    }

    /// Load a font from raw TTF/OTF bytes, returning an error if the face
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, FormError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font {
            kind: FontKind::Embedded(face),
        })
    }

    /// The full name of the font, falling back to the PostScript base name
    /// for builtins and `"Unknown"` for faces without a name record
    pub fn name(&self) -> String {
        match &self.kind {
            FontKind::Builtin(builtin) => builtin.base_name().to_string(),
            FontKind::Embedded(face) => face
                .as_face_ref()
                .names()
                .into_iter()
                .find(|name| {
                    name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode()
                })
                .and_then(|name| name.to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }

    /// The family name of the font, with the same fallbacks as [Font::name]
    pub fn family(&self) -> String {
        match &self.kind {
            FontKind::Builtin(builtin) => {
                if builtin.is_courier() {
                    "Courier".to_string()
                } else {
                    "Helvetica".to_string()
                }
            }
            FontKind::Embedded(face) => face
                .as_face_ref()
                .names()
                .into_iter()
                .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
                .and_then(|name| name.to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }

    /// Distance from the baseline to the top of the font for the given size
    pub fn ascent(&self, size: Pt) -> Pt {
        match &self.kind {
            FontKind::Builtin(builtin) => size * (builtin.ascent_milli() as f32 / 1000.0),
            FontKind::Embedded(face) => {
                let scaling: Pt = size / face.as_face_ref().units_per_em() as f32;
                scaling * face.as_face_ref().ascender() as f32
            }
        }
    }

    /// Distance from the baseline to the bottom of the font for the given
    /// size. Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        match &self.kind {
            FontKind::Builtin(builtin) => size * (builtin.descent_milli() as f32 / 1000.0),
            FontKind::Embedded(face) => {
                let scaling: Pt = size / face.as_face_ref().units_per_em() as f32;
                scaling * face.as_face_ref().descender() as f32
            }
        }
    }

    /// How much to vertically offset a second row of text below a first row
    /// for the given size
    pub fn line_height(&self, size: Pt) -> Pt {
        match &self.kind {
            FontKind::Builtin(_) => size * 1.2,
            FontKind::Embedded(face) => {
                let scaling: Pt = size / face.as_face_ref().units_per_em() as f32;
                let leading: Pt = scaling * face.as_face_ref().line_gap() as f32;
                let ascent: Pt = scaling * face.as_face_ref().ascender() as f32;
                let descent: Pt = scaling * face.as_face_ref().descender() as f32;
                leading + ascent - descent
            }
        }
    }

    /// Horizontal advance of a single character at the given size. Characters
    /// outside the builtin tables measure as a replacement width; embedded
    /// faces fall back to their replacement glyph
    pub fn char_advance(&self, ch: char, size: Pt) -> Pt {
        match &self.kind {
            FontKind::Builtin(builtin) => size * (builtin.char_width_milli(ch) as f32 / 1000.0),
            FontKind::Embedded(face) => {
                let face = face.as_face_ref();
                let scaling: Pt = size / face.units_per_em() as f32;
                let advance = face
                    .glyph_index(ch)
                    .or_else(|| face.glyph_index('\u{FFFD}'))
                    .and_then(|gid| face.glyph_hor_advance(gid))
                    .unwrap_or_default();
                scaling * advance as f32
            }
        }
    }

    /// Total advance of a piece of text at the given size, ignoring control
    /// characters
    pub fn width_of(&self, text: &str, size: Pt) -> Pt {
        text.chars()
            .filter(|ch| !ch.is_control())
            .map(|ch| self.char_advance(ch, size))
            .sum()
    }

    /// The glyph id of a character, for embedded faces only
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        match &self.kind {
            FontKind::Builtin(_) => None,
            FontKind::Embedded(face) => face.as_face_ref().glyph_index(ch).map(|i| i.0),
        }
    }

    /// The glyph id of the replacement character, for embedded faces only
    pub fn replacement_glyph_id(&self) -> Option<u16> {
        match &self.kind {
            FontKind::Builtin(_) => None,
            FontKind::Embedded(face) => face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0),
        }
    }

    pub(crate) fn is_embedded(&self) -> bool {
        matches!(self.kind, FontKind::Embedded(_))
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: FontId, writer: &mut Pdf) -> Ref {
        let font_index = id.index();
        match &self.kind {
            FontKind::Builtin(builtin) => {
                let font_id = refs.alloc();
                let mut font = writer.type1_font(font_id);
                font.base_font(Name(builtin.base_name().as_bytes()));
                // WinAnsi so Latin-1 text bytes map to the glyphs viewers expect
                font.pair(Name(b"Encoding"), Name(b"WinAnsiEncoding"));
                font_id
            }
            FontKind::Embedded(face) => {
                let font_id = refs.alloc();
                let cid_font_id =
                    Self::write_cid(face, &self.name(), &self.family(), refs, font_index, writer);
                let to_unicode_id = Self::write_to_unicode(face, refs, writer);

                let mut font = writer.type0_font(font_id);
                font.base_font(Name(format!("F{font_index}").as_bytes()));
                font.encoding_predefined(Name(b"Identity-H"));
                font.descendant_font(cid_font_id);
                font.to_unicode(to_unicode_id);
                font_id
            }
        }
    }

    /// Every glyph the face maps from unicode, with the character it maps
    /// from and its horizontal advance in font units
    fn glyph_metrics(face: &OwnedFace) -> HashMap<u16, (char, u16)> {
        let face = face.as_face_ref();
        let mut map: HashMap<u16, (char, u16)> = HashMap::new();

        if let Some(cmap) = face.tables().cmap {
            for subtable in cmap
                .subtables
                .into_iter()
                .filter(|table| table.is_unicode())
            {
                subtable.codepoints(|codepoint: u32| {
                    if let Ok(ch) = char::try_from(codepoint) {
                        if let Some(index) =
                            subtable.glyph_index(codepoint).filter(|index| index.0 > 0)
                        {
                            let advance = face.glyph_hor_advance(index).unwrap_or_default();
                            map.entry(index.0).or_insert((ch, advance));
                        }
                    }
                });
            }
        }

        map
    }

    fn write_cid(
        face: &OwnedFace,
        name: &str,
        family: &str,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let descriptor_id = Self::write_descriptor(face, name, family, refs, writer);

        let id = refs.alloc();

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);

        let scaling = 1000.0 / face.as_face_ref().units_per_em() as f32;
        let mut metrics: Vec<(u16, f32)> = Self::glyph_metrics(face)
            .into_iter()
            .map(|(gid, (_, advance))| (gid, advance as f32 * scaling))
            .collect();
        metrics.sort_by_key(|&(gid, _)| gid);

        // runs of consecutive glyph ids share one width block
        let mut widths = cid_font.widths();
        widths.consecutive(0, [1000.0]);
        let mut start: u16 = 0;
        let mut block: Vec<f32> = Vec::new();
        for (gid, width) in metrics {
            if (gid - start) as usize != block.len() {
                if !block.is_empty() {
                    widths.consecutive(start, block.drain(..));
                }
                start = gid;
            }
            block.push(width);
        }
        if !block.is_empty() {
            widths.consecutive(start, block);
        }
        widths.finish();

        cid_font.default_width(1000.0);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

        id
    }

    fn write_font_data(face: &OwnedFace, refs: &mut ObjectReferences, writer: &mut Pdf) -> Ref {
        let id = refs.alloc();

        writer
            .stream(id, face.as_slice())
            .pair(Name(b"Length1"), face.as_slice().len() as i32);

        id
    }

    fn write_descriptor(
        face: &OwnedFace,
        name: &str,
        family: &str,
        refs: &mut ObjectReferences,
        writer: &mut Pdf,
    ) -> Ref {
        let font_data_id = Self::write_font_data(face, refs, writer);

        let id = refs.alloc();
        let f = face.as_face_ref();
        let scaling = 1000.0 / f.units_per_em() as f32;

        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(name.as_bytes()));
        descriptor.family(Str(family.as_bytes()));
        descriptor.weight(f.weight().to_number());

        let mut flags: FontFlags = FontFlags::empty();
        if f.is_monospaced() {
            flags.set(FontFlags::FIXED_PITCH, true);
        }
        if f.is_italic() {
            flags.set(FontFlags::ITALIC, true);
        }
        descriptor.flags(flags);

        let bbox = f.global_bounding_box();
        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(if f.is_italic() { -12.0 } else { 0.0 });
        descriptor.ascent(f.ascender() as f32 * scaling);
        descriptor.descent(f.descender() as f32 * scaling);
        descriptor.leading(f.line_gap() as f32 * scaling);
        descriptor.cap_height(
            f.capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(1000.0),
        );
        descriptor.x_height(f.x_height().map(|h| h as f32 * scaling).unwrap_or_default());
        // ttf tables carry no stem information
        descriptor.stem_v(80.0);
        descriptor.missing_width(1000.0);

        descriptor.font_file2(font_data_id);

        id
    }

    fn write_to_unicode(face: &OwnedFace, refs: &mut ObjectReferences, writer: &mut Pdf) -> Ref {
        let id = refs.alloc();

        let mut ids: Vec<(u16, char)> = Self::glyph_metrics(face)
            .into_iter()
            .map(|(gid, (ch, _))| (gid, ch))
            .collect();
        ids.sort_by_key(|&(gid, _)| gid);

        let mut map: String = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo\n\
             << /Registry (Adobe)\n\
             /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // bfchar blocks are limited to 100 entries sharing a high byte
        let mut blocks: Vec<Vec<(u16, char)>> = Vec::new();
        let mut block: Vec<(u16, char)> = Vec::new();
        for (gid, ch) in ids {
            let split = block.len() >= 100
                || block
                    .first()
                    .is_some_and(|&(first, _)| first >> 8 != gid >> 8);
            if split {
                blocks.push(std::mem::take(&mut block));
            }
            block.push((gid, ch));
        }
        if !block.is_empty() {
            blocks.push(block);
        }

        for block in blocks {
            map.push_str(&format!("{} beginbfchar\n", block.len()));
            for (gid, ch) in block {
                map.push_str(&format!("<{gid:04x}> <{:04x}>\n", ch as u32));
            }
            map.push_str("endbfchar\n");
        }

        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            map.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }
}

/// The set of fonts a document is composed and serialized against. Fonts are
/// referred to by the [FontId] returned when they are added; a [FontId] from
/// one book is not valid in another.
#[derive(Default)]
pub struct FontBook {
    fonts: Arena<Font>,
}

impl FontBook {
    pub fn new() -> FontBook {
        FontBook::default()
    }

    /// Add a font, returning the handle blocks and themes refer to it by
    pub fn add(&mut self, font: Font) -> FontId {
        self.fonts.alloc(font)
    }

    /// Add the default Helvetica regular/bold pair the standard forms are
    /// set in, returning `(regular, bold)`
    pub fn add_builtin_pair(&mut self) -> (FontId, FontId) {
        (
            self.add(Font::builtin(Builtin::Helvetica)),
            self.add(Font::builtin(Builtin::HelveticaBold)),
        )
    }

    pub fn get(&self, id: FontId) -> Option<&Font> {
        self.fonts.get(id)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (FontId, &Font)> {
        self.fonts.iter()
    }
}

// Advance widths for the Helvetica faces in thousandths of an em, covering
// the printable ASCII range 32..=126. Everything else measures as
// DEFAULT_WIDTH after Latin-1 folding.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Every Courier glyph advances the same fixed width
const COURIER_WIDTH: u16 = 600;

/// Width used for characters outside the tables
const DEFAULT_WIDTH: u16 = 278;
