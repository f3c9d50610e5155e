// Integration tests for the printable invoice layout
//
// The first page holds 32 table rows below the header blocks of a form
// without customer data; the totals block needs the row height to stay at
// or above 120pt, which 30 rows leave and 31 rows do not.

#[path = "../helpers/mod.rs"]
mod helpers;

use facturador::core::AppError;
use facturador::documents::models::{Align, DrawOp, Font, InvoiceLayout, PAGE_HEIGHT};
use facturador::documents::HelveticaMetrics;
use facturador::InvoiceForm;
use helpers::TestDataFactory;

fn build(form: &InvoiceForm) -> InvoiceLayout {
    InvoiceLayout::build(form, &HelveticaMetrics).expect("layout")
}

#[test]
fn test_empty_form_cannot_be_laid_out() {
    let result = InvoiceLayout::build(&InvoiceForm::new(), &HelveticaMetrics);
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn test_header_blocks_are_verbatim() {
    let layout = build(&TestDataFactory::complete_form());
    let texts = layout.pages[0].texts();

    let expected = [
        "FACTURA",
        "Agrícola León Lara S.C.",
        "CIF: J91305503",
        "C/ Alcade José de la Bandera 15, 1ºC",
        "41003 Sevilla",
        "Sevilla",
        "Tel: 954 000 000",
        "Email: administracion@agricolaleonlara.es",
        "Nº de factura: 2025-014",
        "Fecha: 15/03/2025",
        "Concepto: Campaña de cítricos 2025",
        "Cliente",
        "Frutas del Guadalquivir S.L.",
        "NIF/CIF: B41000000",
        "Polígono Store, nave 4",
        "41008, Sevilla",
    ];
    assert_eq!(&texts[..expected.len()], &expected[..]);
}

#[test]
fn test_item_rows_and_totals_text() {
    let layout = build(&TestDataFactory::complete_form());
    let texts = layout.texts();

    for text in [
        "Cantidad",
        "Descripción",
        "Precio",
        "Importe",
        "1250,5",
        "Naranja navelina (kgs)",
        "0,42",
        "525,21",
        "18,50",
        "222,00",
        "95,00",
        "Base imponible:",
        "842,21",
        "IVA 21%:",
        "176,86",
        "Retención 2%:",
        "16,84",
        "Total factura:",
        "1002,23",
        "Pago mediante transferencia a 30 días.",
    ] {
        assert!(texts.contains(&text), "missing {:?}", text);
    }
}

#[test]
fn test_total_is_bold_and_right_aligned() {
    let layout = build(&TestDataFactory::complete_form());

    match layout.pages[0].find_text("1002,23") {
        Some(DrawOp::Text { font, size, align, .. }) => {
            assert_eq!(*font, Font::HelveticaBold);
            assert_eq!(*size, 11.0);
            assert_eq!(*align, Align::Right);
        }
        other => panic!("total not drawn: {:?}", other),
    }
}

#[test]
fn test_long_description_wraps_without_repeating_amounts() {
    let mut form = InvoiceForm::new();
    let description = "Naranja navelina de primera categoría recolectada a mano en la finca \
                       de la vega y transportada en cajas de madera al almacén de Sevilla";
    form.add_line("2", description, "7,5").unwrap();

    let layout = build(&form);
    let page = &layout.pages[0];
    let column_x = match page.ops.iter().find(|op| {
        op.text()
            .map_or(false, |t| t.starts_with("Naranja navelina"))
    }) {
        Some(DrawOp::Text { x, .. }) => *x,
        other => panic!("description not drawn: {:?}", other),
    };
    let description_lines: Vec<&str> = page
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text {
                x,
                font: Font::Helvetica,
                text,
                ..
            } if (*x - column_x).abs() < 1e-3 => Some(text.as_str()),
            _ => None,
        })
        .collect();

    assert!(description_lines.len() > 1, "description should wrap");
    assert_eq!(
        description_lines.join(" "),
        description.split_whitespace().collect::<Vec<_>>().join(" ")
    );
    // Quantity and unit price only on the first line of the row
    assert_eq!(page.texts().iter().filter(|t| **t == "2").count(), 1);
    assert_eq!(page.texts().iter().filter(|t| **t == "7,50").count(), 1);
}

#[test]
fn test_thirty_rows_fit_on_one_page() {
    let layout = build(&TestDataFactory::form_with_lines(30));

    assert_eq!(layout.page_count(), 1);
    assert!(layout.pages[0].find_text("Total factura:").is_some());
}

#[test]
fn test_totals_move_to_new_page_without_table_header() {
    let layout = build(&TestDataFactory::form_with_lines(31));

    assert_eq!(layout.page_count(), 2);
    let second = &layout.pages[1];
    assert!(second.find_text("Cantidad").is_none());
    assert!(second.find_text("Naranja variedad 31").is_none());
    assert!(second.find_text("Base imponible:").is_some());

    match second.find_text("Base imponible:") {
        Some(DrawOp::Text { y, .. }) => assert!(*y > PAGE_HEIGHT - 150.0),
        other => panic!("totals not drawn: {:?}", other),
    }
}

#[test]
fn test_long_table_repeats_header_on_next_page() {
    let layout = build(&TestDataFactory::form_with_lines(40));

    assert_eq!(layout.page_count(), 2);
    let first = &layout.pages[0];
    let second = &layout.pages[1];

    assert!(first.find_text("Naranja variedad 32").is_some());
    assert!(first.find_text("Naranja variedad 33").is_none());

    assert!(matches!(second.ops[0], DrawOp::FillRect { .. }));
    assert_eq!(second.texts()[0], "Cantidad");
    assert!(second.find_text("Naranja variedad 33").is_some());
    assert!(second.find_text("Naranja variedad 40").is_some());
    assert!(second.find_text("Total factura:").is_some());
    assert!(second.find_text("FACTURA").is_none());
}

#[test]
fn test_many_rows_span_several_pages() {
    let layout = build(&TestDataFactory::form_with_lines(150));

    assert_eq!(layout.page_count(), 4);
    for page in &layout.pages[1..] {
        assert!(matches!(page.ops[0], DrawOp::FillRect { .. }));
        assert_eq!(page.texts()[0], "Cantidad");
    }
    assert_eq!(
        layout.texts().iter().filter(|t| t.starts_with("Naranja variedad ")).count(),
        150
    );
}
