use std::fmt;

/// The two flat-rate taxes an invoice carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxKind {
    /// IVA, added to the base amount
    Vat,

    /// IRPF retention, subtracted from the base-plus-VAT figure
    Withholding,
}

impl TaxKind {
    /// Label used in the totals block of the printed invoice
    pub fn label(&self) -> &'static str {
        match self {
            TaxKind::Vat => "IVA",
            TaxKind::Withholding => "Retención",
        }
    }

    /// Label of the rate input field
    pub fn field_label(&self) -> &'static str {
        match self {
            TaxKind::Vat => "IVA %",
            TaxKind::Withholding => "Retención IRPF %",
        }
    }

    /// Rate text a fresh form starts with
    pub fn default_rate_text(&self) -> &'static str {
        match self {
            TaxKind::Vat => "21",
            TaxKind::Withholding => "2",
        }
    }
}

impl fmt::Display for TaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxKind::Vat => write!(f, "vat"),
            TaxKind::Withholding => write!(f, "withholding"),
        }
    }
}
