use form_gen::{Composer, ContentBlock, FontBook, Info, Mm, PageGeometry, Theme};

fn main() {
    let mut fonts = FontBook::new();
    let (regular, bold) = fonts.add_builtin_pair();
    let theme = Theme::new(regular, bold);

    // a deliberately overlong inspection report: lots of sections, long
    // values that will be truncated, and text boxes of filler prose, to
    // show content flowing across pages
    let mut blocks = vec![
        ContentBlock::numbered_header("RELATÓRIO DE INSPEÇÃO", "Inspeção Predial Completa", "Nº"),
        ContentBlock::footer("Relatório gerado automaticamente - página de demonstração"),
    ];
    for floor in 1..=12u64 {
        blocks.push(ContentBlock::section_title(format!("PAVIMENTO {floor}")));
        blocks.push(ContentBlock::field_row("Responsável:", "Eng. Ricardo Almeida Prado"));
        blocks.push(ContentBlock::field_row(
            "Situação:",
            lipsum::lipsum_words_from_seed(24, floor),
        ));
        blocks.push(ContentBlock::field_row("Pendências:", ""));
        blocks.push(ContentBlock::text_block(
            lipsum::lipsum_words_from_seed(60, floor + 100),
            Mm(35.0),
        ));
        blocks.push(ContentBlock::spacer(Mm(10.0)));
    }
    blocks.push(ContentBlock::signature_pair("Engenheiro Responsável", "Síndico"));

    let composer = Composer::new(PageGeometry::a4(), &fonts, theme).with_file_prefix("INSPECAO");
    let document = composer.compose(&blocks).expect("can compose the report");

    let mut info = Info::new();
    info.title("Relatório de Inspeção");

    let mut out = std::fs::File::create(document.filename()).unwrap();
    document
        .write_pdf(&fonts, &info, &mut out)
        .expect("can write the pdf");

    println!(
        "relatório {} salvo em {}: {} páginas",
        document.number(),
        document.filename(),
        document.page_count()
    );
}
