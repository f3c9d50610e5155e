// Invoice header data: issuer, customer and invoice metadata
//
// The issuer block is fixed and printed verbatim on every invoice. Customer
// and metadata fields are free text and may be left blank; blank fields are
// simply not printed.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date format used on the form and on the printed invoice
pub const INVOICE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Fixed issuer block printed at the top of every invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyProfile {
    pub name: &'static str,
    pub address_lines: [&'static str; 6],
}

impl CompanyProfile {
    pub const fn agricola_leon_lara() -> Self {
        Self {
            name: "Agrícola León Lara S.C.",
            address_lines: [
                "CIF: J91305503",
                "C/ Alcade José de la Bandera 15, 1ºC",
                "41003 Sevilla",
                "Sevilla",
                "Tel: 954 000 000",
                "Email: administracion@agricolaleonlara.es",
            ],
        }
    }
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self::agricola_leon_lara()
    }
}

/// Customer block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    /// Name or company name
    pub name: String,

    /// NIF / CIF
    pub tax_id: String,

    pub address: String,

    pub city: String,

    pub postal_code: String,
}

impl Customer {
    /// `"41003, Sevilla"`, skipping whichever part is blank
    pub fn city_line(&self) -> String {
        [self.postal_code.trim(), self.city.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Invoice number, date, concept and footer notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceDetails {
    /// Free-form invoice number (no sequence validation)
    pub number: String,

    /// Invoice date as typed, `dd/mm/yyyy` by default
    pub date: String,

    /// Campaign / concept, printed only when present
    pub concept: String,

    /// Footer notes, printed under the totals only when present
    pub notes: String,
}

impl InvoiceDetails {
    pub fn new(number: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            date: date.format(INVOICE_DATE_FORMAT).to_string(),
            concept: String::new(),
            notes: String::new(),
        }
    }

    /// File name offered when exporting, e.g. `Factura_7.pdf`
    pub fn default_file_name(&self) -> String {
        format!("Factura_{}.pdf", self.number)
    }
}

impl Default for InvoiceDetails {
    fn default() -> Self {
        Self::new("1", Local::now().date_naive())
    }
}

/// One line item as raw field text, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftLineItem {
    pub quantity: String,
    pub description: String,
    pub unit_price: String,
}

/// Complete invoice as raw input, e.g. loaded from a JSON file
///
/// Every field is optional; missing ones take the defaults of a fresh form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceDraft {
    pub number: Option<String>,
    pub date: Option<String>,
    pub concept: String,
    pub notes: String,
    pub customer: Customer,
    pub vat_rate: Option<String>,
    pub withholding_rate: Option<String>,
    pub items: Vec<DraftLineItem>,
}

impl InvoiceDraft {
    /// Parse a draft from JSON text
    pub fn from_json(json: &str) -> crate::core::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
