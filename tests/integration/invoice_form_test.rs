// Integration tests for the invoice form workflow
//
// Covers adding and removing lines, rate edits, and loading drafts, with the
// totals read back after every change as the form layer does.

#[path = "../helpers/mod.rs"]
mod helpers;

use facturador::core::AppError;
use facturador::invoices::models::{InvoiceDraft, EMPTY_DESCRIPTION_MESSAGE, INVALID_AMOUNTS_MESSAGE};
use facturador::InvoiceForm;
use helpers::TestDataFactory;
use rust_decimal_macros::dec;

#[test]
fn test_empty_description_does_not_add_line() {
    let mut form = TestDataFactory::form_with_lines(2);

    let err = form.add_line("3", "   ", "10").unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(err.user_message(), EMPTY_DESCRIPTION_MESSAGE);
    assert_eq!(form.items().len(), 2);
}

#[test]
fn test_malformed_amounts_do_not_add_line() {
    let mut form = InvoiceForm::new();

    let err = form.add_line("tres", "Naranjas", "10").unwrap_err();
    assert!(matches!(err, AppError::Parse(_)));
    assert_eq!(err.user_message(), INVALID_AMOUNTS_MESSAGE);

    let err = form.add_line("3", "Naranjas", "").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(form.items().is_empty());
    assert_eq!(form.totals().total_amount, dec!(0));
}

#[test]
fn test_totals_follow_every_edit() {
    let mut form = InvoiceForm::new();
    assert_eq!(form.totals().total_amount, dec!(0));

    form.add_line("3", "Naranjas", "10,00").unwrap();
    assert_eq!(form.totals().total_amount, dec!(35.70));

    form.set_withholding_rate_text("0");
    assert_eq!(form.totals().total_amount, dec!(36.30));

    // Mid-edit rate text: counts as 0 until it parses again
    form.set_vat_rate_text("2");
    form.set_vat_rate_text("");
    assert_eq!(form.totals().total_amount, dec!(30.00));
    form.set_vat_rate_text("21");

    form.add_line("0,5", "Limones", "3,33").unwrap();
    // 0.5 × 3.33 = 1.665 -> 1.67
    let totals = form.totals();
    assert_eq!(totals.base_amount, dec!(31.67));
    assert_eq!(totals.vat_amount, dec!(6.65));
    assert_eq!(totals.total_amount, dec!(38.32));

    form.remove_line(0).unwrap();
    assert_eq!(form.totals().base_amount, dec!(1.67));
}

#[test]
fn test_complete_form_totals() {
    let form = TestDataFactory::complete_form();
    let formatted = form.totals().formatted();

    assert_eq!(formatted.base, "842,21");
    assert_eq!(formatted.vat, "176,86");
    assert_eq!(formatted.withholding, "16,84");
    assert_eq!(formatted.total, "1002,23");
}

#[test]
fn test_remove_selected_lines() {
    let mut form = TestDataFactory::form_with_lines(5);

    let removed = form.remove_lines(&[4, 1]).unwrap();

    assert_eq!(removed.len(), 2);
    assert_eq!(removed[0].description, "Naranja variedad 2");
    assert_eq!(removed[1].description, "Naranja variedad 5");
    assert_eq!(form.items().len(), 3);
    assert_eq!(form.totals().base_amount, dec!(30.00));
}

#[test]
fn test_remove_without_selection() {
    let mut form = TestDataFactory::form_with_lines(1);

    let err = form.remove_lines(&[]).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(form.items().len(), 1);
}

#[test]
fn test_draft_builds_same_form() {
    let from_draft = InvoiceForm::from_draft(TestDataFactory::draft(), InvoiceForm::new()).unwrap();
    let typed = TestDataFactory::complete_form();

    assert_eq!(from_draft.items(), typed.items());
    assert_eq!(from_draft.details, typed.details);
    assert_eq!(from_draft.customer, typed.customer);
    assert_eq!(from_draft.totals(), typed.totals());
}

#[test]
fn test_draft_from_json_file_content() {
    let json = r#"{
        "number": "7",
        "date": "01/02/2025",
        "concept": "Campaña 2025",
        "customer": { "name": "Cliente S.L.", "tax_id": "B00000000" },
        "vat_rate": "21",
        "withholding_rate": "2",
        "notes": "Pago a 30 días",
        "items": [ { "quantity": "3", "description": "Naranjas", "unit_price": "10,00" } ]
    }"#;

    let draft = InvoiceDraft::from_json(json).unwrap();
    let form = InvoiceForm::from_draft(draft, InvoiceForm::new()).unwrap();

    assert_eq!(form.default_file_name(), "Factura_7.pdf");
    assert_eq!(form.customer.city_line(), "");
    assert_eq!(form.totals().formatted().total, "35,70");
}

#[test]
fn test_draft_with_bad_line_is_rejected() {
    let mut draft = TestDataFactory::draft();
    draft.items.push(TestDataFactory::draft_line("1", "Cajas", "1,2,3"));

    let err = InvoiceForm::from_draft(draft, InvoiceForm::new()).unwrap_err();

    assert!(matches!(err, AppError::Parse(_)));
    assert!(err.user_message().starts_with("Línea 4:"));
}
