use form_gen::forms;
use form_gen::forms::FieldMap;
use form_gen::{Composer, FontBook, Info, PageGeometry, Theme};

fn main() {
    // the builtin Helvetica pair is all the standard forms need
    let mut fonts = FontBook::new();
    let (regular, bold) = fonts.add_builtin_pair();
    let theme = Theme::new(regular, bold);

    // field values exactly as a submitted form would deliver them: ISO
    // dates, raw option keys, free-form text
    let fields: FieldMap = [
        ("data_hora", "2026-08-23T14:30"),
        ("tipo_manutencao", "mensal"),
        ("data_solicitacao", "2026-08-20"),
        ("contratante_empresa", "Condomínio Jardim das Acácias"),
        ("contratante_cnpj", "12.345.678/0001-90"),
        ("contratante_endereco", "Av. Paulista, 1000 - São Paulo/SP"),
        ("contratante_telefone", "(11) 3456-7890"),
        ("contratada_empresa", "Elevadores Vertical Ltda"),
        ("contratada_cnpj", "98.765.432/0001-10"),
        ("contratada_endereco", "Rua dos Técnicos, 55 - São Paulo/SP"),
        ("contratada_telefone", "(11) 2345-6789"),
        ("tecnico_nome", "Carlos Pereira"),
        ("tecnico_cpf", "123.456.789-00"),
        (
            "descricao",
            "Manutenção preventiva mensal do elevador social: verificação do \
             sistema de freios, lubrificação das guias, teste do sistema de \
             emergência e inspeção das portas de pavimento.",
        ),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect();

    // lay the form out; the document number and filename are issued here
    let composer = Composer::new(PageGeometry::a4(), &fonts, theme).with_file_prefix("OS");
    let document = composer
        .compose(&forms::work_order(&fields))
        .expect("can compose the work order");

    let mut info = Info::new();
    info.title("Ordem de Serviço");
    info.subject("Manutenção de elevadores");

    // the suggested filename embeds the number and the timestamp
    let mut out = std::fs::File::create(document.filename()).unwrap();
    document
        .write_pdf(&fonts, &info, &mut out)
        .expect("can write the pdf");

    println!(
        "ordem de serviço {} salva em {} ({} página(s))",
        document.number(),
        document.filename(),
        document.page_count()
    );
}
