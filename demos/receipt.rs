use form_gen::forms;
use form_gen::forms::FieldMap;
use form_gen::{Composer, FontBook, Info, PageGeometry, Theme};

fn main() {
    let mut fonts = FontBook::new();
    let (regular, bold) = fonts.add_builtin_pair();
    let theme = Theme::new(regular, bold);

    // leave a field out (or blank) and its row simply doesn't appear;
    // here there's no matrícula, so the receipt skips that row
    let fields: FieldMap = [
        ("empresa_nome", "Padaria Estrela do Norte Ltda"),
        ("empresa_cnpj", "11.222.333/0001-44"),
        ("funcionario_nome", "Ana Beatriz Souza"),
        ("funcionario_cpf", "987.654.321-00"),
        ("funcionario_cargo", "Atendente"),
        ("vale_transporte", "220,00"),
        ("vale_alimentacao", "451,80"),
        ("data_recibo", "2026-08-23"),
        ("periodo_referencia", "2026-08"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect();

    let composer = Composer::new(PageGeometry::a4(), &fonts, theme).with_file_prefix("RECIBO");
    let document = composer
        .compose(&forms::receipt(&fields))
        .expect("can compose the receipt");

    let mut info = Info::new();
    info.title("Recibo de Pagamento");
    info.subject("Vale transporte e vale alimentação");

    let mut out = std::fs::File::create(document.filename()).unwrap();
    document
        .write_pdf(&fonts, &info, &mut out)
        .expect("can write the pdf");

    println!(
        "recibo salvo em {} ({} página(s))",
        document.filename(),
        document.page_count()
    );
}
