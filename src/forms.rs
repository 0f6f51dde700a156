//! Block lists for the standard forms: maintenance work orders and benefit
//! payment receipts. Field values arrive as loosely validated strings, the
//! way a submitted form delivers them; the helpers here normalize dates,
//! months, and money amounts and pass anything unparseable through as-is.

use crate::block::ContentBlock;
use crate::units::Mm;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

/// Submitted form data, keyed by field name
pub type FieldMap = HashMap<String, String>;

/// Vertical gap between form sections
const SECTION_GAP: Mm = Mm(15.0);

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

fn field(fields: &FieldMap, key: &str) -> String {
    fields.get(key).cloned().unwrap_or_default()
}

fn push_if_present(blocks: &mut Vec<ContentBlock>, label: &str, value: String) {
    if !value.trim().is_empty() {
        blocks.push(ContentBlock::field_row(label, value));
    }
}

/// The contratante and contratada sections share one shape, differing only
/// in the key prefix the values come from
fn company_section(blocks: &mut Vec<ContentBlock>, fields: &FieldMap, title: &str, prefix: &str) {
    blocks.push(ContentBlock::section_title(title));
    blocks.push(ContentBlock::field_row(
        "Empresa:",
        field(fields, &format!("{prefix}_empresa")),
    ));
    blocks.push(ContentBlock::field_row(
        "CNPJ:",
        field(fields, &format!("{prefix}_cnpj")),
    ));
    blocks.push(ContentBlock::field_row(
        "Endereço:",
        field(fields, &format!("{prefix}_endereco")),
    ));
    blocks.push(ContentBlock::field_row(
        "Telefone:",
        field(fields, &format!("{prefix}_telefone")),
    ));
    blocks.push(ContentBlock::spacer(SECTION_GAP));
}

/// The maintenance work order form
pub fn work_order(fields: &FieldMap) -> Vec<ContentBlock> {
    let mut blocks = vec![
        ContentBlock::numbered_header("ORDEM DE SERVIÇO", "Sistema de Manutenção", "OS Nº"),
        ContentBlock::section_title("INFORMAÇÕES BÁSICAS"),
        ContentBlock::field_row("Data e Hora:", format_date_time(&field(fields, "data_hora"))),
        ContentBlock::field_row(
            "Tipo de Manutenção:",
            maintenance_type_label(&field(fields, "tipo_manutencao")),
        ),
        ContentBlock::field_row(
            "Data de Solicitação:",
            format_date(&field(fields, "data_solicitacao")),
        ),
        ContentBlock::spacer(SECTION_GAP),
    ];

    company_section(&mut blocks, fields, "DADOS DA CONTRATANTE", "contratante");
    company_section(&mut blocks, fields, "DADOS DA CONTRATADA", "contratada");

    blocks.push(ContentBlock::section_title("TÉCNICO RESPONSÁVEL"));
    blocks.push(ContentBlock::field_row(
        "Nome:",
        field(fields, "tecnico_nome"),
    ));
    blocks.push(ContentBlock::field_row(
        "CPF:",
        field(fields, "tecnico_cpf"),
    ));
    blocks.push(ContentBlock::spacer(SECTION_GAP));

    blocks.push(ContentBlock::section_title("DESCRIÇÃO DA SOLICITAÇÃO"));
    blocks.push(ContentBlock::text_block(
        field(fields, "descricao"),
        Mm(40.0),
    ));
    blocks.push(ContentBlock::spacer(SECTION_GAP));

    blocks.push(ContentBlock::headed_signature_pair(
        "ASSINATURAS",
        "Contratante",
        "Contratada",
    ));
    blocks.push(ContentBlock::footer(
        "Sistema de Emissão de Ordens de Serviço - Gerado automaticamente",
    ));

    blocks
}

/// The vale transporte / vale alimentação payment receipt form
pub fn receipt(fields: &FieldMap) -> Vec<ContentBlock> {
    let mut blocks = vec![
        ContentBlock::header("RECIBO DE PAGAMENTO", "VALE TRANSPORTE E VALE ALIMENTAÇÃO"),
        ContentBlock::section_title("DADOS DA EMPRESA"),
        ContentBlock::field_row("Empresa:", field(fields, "empresa_nome")),
    ];
    push_if_present(&mut blocks, "CNPJ:", field(fields, "empresa_cnpj"));
    blocks.push(ContentBlock::spacer(SECTION_GAP));

    blocks.push(ContentBlock::section_title("DADOS DO FUNCIONÁRIO"));
    blocks.push(ContentBlock::field_row(
        "Nome:",
        field(fields, "funcionario_nome"),
    ));
    blocks.push(ContentBlock::field_row(
        "CPF:",
        field(fields, "funcionario_cpf"),
    ));
    push_if_present(
        &mut blocks,
        "Matrícula:",
        field(fields, "funcionario_matricula"),
    );
    push_if_present(&mut blocks, "Cargo:", field(fields, "funcionario_cargo"));
    blocks.push(ContentBlock::spacer(SECTION_GAP));

    let transporte = parse_money(&field(fields, "vale_transporte"));
    let alimentacao = parse_money(&field(fields, "vale_alimentacao"));
    blocks.push(ContentBlock::section_title("VALORES DOS BENEFÍCIOS"));
    blocks.push(ContentBlock::field_row(
        "Vale Transporte:",
        format_money(transporte),
    ));
    blocks.push(ContentBlock::field_row(
        "Vale Alimentação:",
        format_money(alimentacao),
    ));
    blocks.push(ContentBlock::field_row(
        "TOTAL:",
        format_money(transporte + alimentacao),
    ));
    blocks.push(ContentBlock::field_row(
        "Data de Emissão:",
        format_date(&field(fields, "data_recibo")),
    ));
    let periodo = field(fields, "periodo_referencia");
    if !periodo.trim().is_empty() {
        blocks.push(ContentBlock::field_row(
            "Período de Referência:",
            format_month(&periodo),
        ));
    }
    blocks.push(ContentBlock::spacer(SECTION_GAP));

    blocks.push(ContentBlock::text_block(
        "Este documento comprova o recebimento dos valores de vale transporte e vale \
         alimentação conforme especificado acima para o período de referência indicado.",
        Mm(25.0),
    ));
    blocks.push(ContentBlock::spacer(SECTION_GAP));

    blocks.push(ContentBlock::signature_rule("Assinatura do Responsável"));
    blocks.push(ContentBlock::footer(
        "Sistema de Emissão de Recibos - Gerado automaticamente",
    ));

    blocks
}

/// `2026-08-23` becomes `23/08/2026`; anything else passes through
pub fn format_date(value: &str) -> String {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| value.to_string())
}

/// `2026-08-23T14:30` (with or without seconds) becomes `23/08/2026, 14:30`;
/// anything else passes through
pub fn format_date_time(value: &str) -> String {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map(|stamp| stamp.format("%d/%m/%Y, %H:%M").to_string())
        .unwrap_or_else(|_| value.to_string())
}

/// `2026-08` becomes `agosto de 2026`; anything else passes through
pub fn format_month(value: &str) -> String {
    let mut parts = value.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), None) if !year.is_empty() => {
            match month.parse::<usize>() {
                Ok(month @ 1..=12) => format!("{} de {year}", MONTHS[month - 1]),
                _ => value.to_string(),
            }
        }
        _ => value.to_string(),
    }
}

/// Display names for the maintenance schedule options; unknown values pass
/// through so free-form input still prints
pub fn maintenance_type_label(value: &str) -> String {
    match value {
        "diaria" => "Manutenção Diária".to_string(),
        "semanal" => "Manutenção Semanal".to_string(),
        "mensal" => "Manutenção Mensal".to_string(),
        "trimestral" => "Manutenção Trimestral".to_string(),
        "anual" => "Manutenção Anual".to_string(),
        other => other.to_string(),
    }
}

/// Read a Brazilian-format amount (`"1.234,56"`, `"R$ 150,00"`) as a number.
/// Unparseable input counts as zero.
pub fn parse_money(value: &str) -> f64 {
    value
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == ',')
        .collect::<String>()
        .replace(',', ".")
        .parse()
        .unwrap_or(0.0)
}

/// `150.0` becomes `R$ 150,00`
pub fn format_money(value: f64) -> String {
    format!("R$ {value:.2}").replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_from(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn dates_are_rendered_brazilian_style() {
        assert_eq!(format_date("2026-08-23"), "23/08/2026");
        assert_eq!(format_date("23/08/2026"), "23/08/2026");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn date_times_accept_both_precision_levels() {
        assert_eq!(format_date_time("2026-08-23T14:30"), "23/08/2026, 14:30");
        assert_eq!(format_date_time("2026-08-23T14:30:59"), "23/08/2026, 14:30");
        assert_eq!(format_date_time("amanhã"), "amanhã");
    }

    #[test]
    fn months_are_spelled_out() {
        assert_eq!(format_month("2026-08"), "agosto de 2026");
        assert_eq!(format_month("2026-01"), "janeiro de 2026");
        assert_eq!(format_month("2026-13"), "2026-13");
        assert_eq!(format_month("2026-08-01"), "2026-08-01");
        assert_eq!(format_month("agosto"), "agosto");
    }

    #[test]
    fn maintenance_types_have_display_names() {
        assert_eq!(maintenance_type_label("mensal"), "Manutenção Mensal");
        assert_eq!(maintenance_type_label("anual"), "Manutenção Anual");
        assert_eq!(maintenance_type_label("sob demanda"), "sob demanda");
    }

    #[test]
    fn money_parses_brazilian_input() {
        assert_eq!(parse_money("150,00"), 150.0);
        assert_eq!(parse_money("R$ 1.234,56"), 1234.56);
        assert_eq!(parse_money(""), 0.0);
        assert_eq!(parse_money("abc"), 0.0);
    }

    #[test]
    fn money_formats_without_grouping() {
        assert_eq!(format_money(150.0), "R$ 150,00");
        assert_eq!(format_money(1234.5), "R$ 1234,50");
        assert_eq!(format_money(0.0), "R$ 0,00");
    }

    #[test]
    fn work_orders_open_with_a_numbered_header() {
        let blocks = work_order(&FieldMap::new());
        assert!(matches!(
            &blocks[0],
            ContentBlock::Header {
                number_prefix: Some(prefix),
                ..
            } if prefix == "OS Nº"
        ));
        let sections: Vec<&str> = blocks
            .iter()
            .filter_map(|block| match block {
                ContentBlock::SectionTitle(title) => Some(title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            sections,
            vec![
                "INFORMAÇÕES BÁSICAS",
                "DADOS DA CONTRATANTE",
                "DADOS DA CONTRATADA",
                "TÉCNICO RESPONSÁVEL",
                "DESCRIÇÃO DA SOLICITAÇÃO",
            ]
        );
    }

    #[test]
    fn each_form_signs_the_way_its_paper_original_does() {
        let order = work_order(&FieldMap::new());
        assert!(order.iter().any(|block| matches!(
            block,
            ContentBlock::SignaturePair { heading: Some(heading), left, right }
                if heading == "ASSINATURAS" && left == "Contratante" && right == "Contratada"
        )));

        let paid = receipt(&FieldMap::new());
        assert!(paid.iter().any(|block| matches!(
            block,
            ContentBlock::SignatureRule(caption) if caption == "Assinatura do Responsável"
        )));
        assert!(!paid
            .iter()
            .any(|block| matches!(block, ContentBlock::SignaturePair { .. })));
    }

    #[test]
    fn receipts_total_the_two_benefits() {
        let fields = fields_from(&[
            ("vale_transporte", "100,00"),
            ("vale_alimentacao", "80,50"),
        ]);
        let blocks = receipt(&fields);
        assert!(blocks.iter().any(|block| matches!(
            block,
            ContentBlock::FieldRow { label, value }
                if label == "TOTAL:" && value == "R$ 180,50"
        )));
    }

    #[test]
    fn optional_receipt_rows_only_appear_when_filled() {
        let bare = receipt(&FieldMap::new());
        assert!(!bare.iter().any(|block| matches!(
            block,
            ContentBlock::FieldRow { label, .. } if label == "Matrícula:"
        )));
        assert!(!bare.iter().any(|block| matches!(
            block,
            ContentBlock::FieldRow { label, .. } if label == "Período de Referência:"
        )));

        let fields = fields_from(&[
            ("funcionario_matricula", "12345"),
            ("periodo_referencia", "2026-08"),
        ]);
        let full = receipt(&fields);
        assert!(full.iter().any(|block| matches!(
            block,
            ContentBlock::FieldRow { label, value }
                if label == "Matrícula:" && value == "12345"
        )));
        assert!(full.iter().any(|block| matches!(
            block,
            ContentBlock::FieldRow { label, value }
                if label == "Período de Referência:" && value == "agosto de 2026"
        )));
    }
}
