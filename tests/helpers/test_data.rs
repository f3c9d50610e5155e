// Test Data Factory
//
// Builds invoice forms and drafts with realistic content.

#![allow(dead_code)]

use facturador::invoices::models::{Customer, DraftLineItem, InvoiceDraft};
use facturador::InvoiceForm;

/// Test data factory for invoice forms and drafts
pub struct TestDataFactory;

impl TestDataFactory {
    /// Customer with every field filled in
    pub fn customer() -> Customer {
        Customer {
            name: "Frutas del Guadalquivir S.L.".to_string(),
            tax_id: "B41000000".to_string(),
            address: "Polígono Store, nave 4".to_string(),
            city: "Sevilla".to_string(),
            postal_code: "41008".to_string(),
        }
    }

    /// Form without customer data and `count` lines of 1 × 10,00
    pub fn form_with_lines(count: usize) -> InvoiceForm {
        let mut form = InvoiceForm::new();
        for i in 0..count {
            form.add_line("1", &format!("Naranja variedad {}", i + 1), "10")
                .expect("valid line");
        }
        form
    }

    /// Fully filled form with three lines
    pub fn complete_form() -> InvoiceForm {
        let mut form = InvoiceForm::new();
        form.details.number = "2025-014".to_string();
        form.details.date = "15/03/2025".to_string();
        form.details.concept = "Campaña de cítricos 2025".to_string();
        form.details.notes = "Pago mediante transferencia a 30 días.".to_string();
        form.customer = Self::customer();

        form.add_line("1250,5", "Naranja navelina (kgs)", "0,42")
            .expect("valid line");
        form.add_line("12", "Horas de recolección", "18,50")
            .expect("valid line");
        form.add_line("1", "Transporte a almacén", "95")
            .expect("valid line");
        form
    }

    /// Draft with the same content as `complete_form`
    pub fn draft() -> InvoiceDraft {
        InvoiceDraft {
            number: Some("2025-014".to_string()),
            date: Some("15/03/2025".to_string()),
            concept: "Campaña de cítricos 2025".to_string(),
            notes: "Pago mediante transferencia a 30 días.".to_string(),
            customer: Self::customer(),
            vat_rate: Some("21".to_string()),
            withholding_rate: Some("2".to_string()),
            items: vec![
                Self::draft_line("1250,5", "Naranja navelina (kgs)", "0,42"),
                Self::draft_line("12", "Horas de recolección", "18,50"),
                Self::draft_line("1", "Transporte a almacén", "95"),
            ],
        }
    }

    pub fn draft_line(quantity: &str, description: &str, unit_price: &str) -> DraftLineItem {
        DraftLineItem {
            quantity: quantity.to_string(),
            description: description.to_string(),
            unit_price: unit_price.to_string(),
        }
    }
}
