use chrono::NaiveDate;
use form_gen::{Colour, Composer, ContentBlock, FontBook, Info, PageGeometry, Theme};

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

fn pdf_for(blocks: &[ContentBlock]) -> Vec<u8> {
    let mut fonts = FontBook::new();
    let (regular, bold) = fonts.add_builtin_pair();
    let theme = Theme::new(regular, bold);

    let now = NaiveDate::from_ymd_opt(2026, 8, 23)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();
    let composer = Composer::new(PageGeometry::a4(), &fonts, theme);
    let document = composer.compose_at(blocks, now, 1).unwrap();

    let mut info = Info::new();
    info.title("Recibo de Pagamento");

    let mut bytes = Vec::new();
    document.write_pdf(&fonts, &info, &mut bytes).unwrap();
    bytes
}

#[test]
fn the_file_has_a_pdf_skeleton() {
    let bytes = pdf_for(&[ContentBlock::field_row("Nome:", "Maria dos Santos")]);

    assert!(bytes.starts_with(b"%PDF-"));
    assert!(contains(&bytes, b"%%EOF"));
    assert!(contains(&bytes, b"/Count 1"));
    assert!(contains(&bytes, b"/Helvetica"));
    assert!(contains(&bytes, b"/WinAnsiEncoding"));
    assert!(contains(&bytes, b"Tj"));
    assert!(contains(&bytes, b"Recibo de Pagamento"));
}

#[test]
fn every_page_gets_its_own_content_stream() {
    let mut blocks = Vec::new();
    for _ in 0..80 {
        blocks.push(ContentBlock::field_row("Campo:", "valor"));
    }
    let bytes = pdf_for(&blocks);

    assert!(contains(&bytes, b"/Count 3"));
}

#[test]
fn custom_theme_colours_reach_the_content_stream() {
    let mut fonts = FontBook::new();
    let (regular, bold) = fonts.add_builtin_pair();
    let mut theme = Theme::new(regular, bold);
    theme.accent = Colour::new_cmyk(1.0, 0.6, 0.0, 0.4);
    theme.muted = (0.25_f32, 0.5, 0.75).into();
    theme.ink = Colour::new_grey(0.15);

    let now = NaiveDate::from_ymd_opt(2026, 8, 23)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();
    let composer = Composer::new(PageGeometry::a4(), &fonts, theme);
    let blocks = [
        ContentBlock::header("ORDEM DE SERVIÇO", "Sistema de Manutenção"),
        ContentBlock::field_row("Campo:", "valor"),
    ];
    let document = composer.compose_at(&blocks, now, 1).unwrap();

    let mut bytes = Vec::new();
    document.write_pdf(&fonts, &Info::new(), &mut bytes).unwrap();

    // the title fill and the header rule stroke carry the CMYK accent
    assert!(contains(&bytes, b"1 0.6 0 0.4 k"));
    assert!(contains(&bytes, b"1 0.6 0 0.4 K"));
    // the subtitle fill carries the tuple-converted RGB
    assert!(contains(&bytes, b"0.25 0.5 0.75 rg"));
    // the row value fill carries the grey
    assert!(contains(&bytes, b"0.15 g"));
}

#[test]
fn text_is_written_in_winansi_bytes() {
    let bytes = pdf_for(&[ContentBlock::field_row("Cidade:", "S\u{e3}o Paulo")]);

    // 0xe3 is WinAnsi for a-tilde
    assert!(contains(&bytes, b"(S\xe3o Paulo)"));
}

#[test]
fn parentheses_in_values_are_escaped() {
    let bytes = pdf_for(&[ContentBlock::field_row("Telefone:", "(11) 3456-7890")]);

    assert!(contains(&bytes, br"(\(11\) 3456-7890)"));
}
