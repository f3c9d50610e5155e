use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::currency;

/// Invoice totals, derived from the item list and the two rates
///
/// Never stored: recomputed whenever an item or a rate changes.
/// `total_amount = base_amount + vat_amount - withholding_amount`, where both
/// tax amounts were rounded to cents on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of all line totals (base imponible)
    pub base_amount: Decimal,

    /// IVA percentage actually applied (0 when the field did not parse)
    pub vat_rate: Decimal,

    pub vat_amount: Decimal,

    /// IRPF percentage actually applied (0 when the field did not parse)
    pub withholding_rate: Decimal,

    pub withholding_amount: Decimal,

    pub total_amount: Decimal,
}

/// Totals ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedTotals {
    pub base: String,
    pub vat_rate: String,
    pub vat: String,
    pub withholding_rate: String,
    pub withholding: String,
    pub total: String,
}

impl InvoiceTotals {
    /// Totals of an invoice with no items
    pub fn zero(vat_rate: Decimal, withholding_rate: Decimal) -> Self {
        Self {
            base_amount: Decimal::ZERO,
            vat_rate,
            vat_amount: Decimal::ZERO,
            withholding_rate,
            withholding_amount: Decimal::ZERO,
            total_amount: Decimal::ZERO,
        }
    }

    pub fn formatted(&self) -> FormattedTotals {
        FormattedTotals {
            base: currency::format_currency(self.base_amount),
            vat_rate: currency::format_rate(self.vat_rate),
            vat: currency::format_currency(self.vat_amount),
            withholding_rate: currency::format_rate(self.withholding_rate),
            withholding: currency::format_currency(self.withholding_amount),
            total: currency::format_currency(self.total_amount),
        }
    }
}
