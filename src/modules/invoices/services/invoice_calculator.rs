use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{currency, Result};
use crate::modules::invoices::models::{line_total, InvoiceTotals, LineItem};
use crate::modules::taxes::{TaxCalculator, TaxKind};

/// Stateless invoice arithmetic and Spanish-locale formatting
///
/// Holds nothing between calls: the caller passes the item list and the raw
/// rate texts every time, and gets the same totals back for the same input.
pub struct InvoiceCalculator {
    taxes: TaxCalculator,
}

impl InvoiceCalculator {
    pub fn new() -> Self {
        Self {
            taxes: TaxCalculator::new(),
        }
    }

    /// Parse a decimal typed with either `,` or `.` as separator
    pub fn parse_decimal(&self, text: &str) -> Result<Decimal> {
        currency::parse_decimal(text)
    }

    /// round_half_up(quantity × unit_price, 2)
    pub fn line_total(&self, quantity: Decimal, unit_price: Decimal) -> Decimal {
        line_total(quantity, unit_price)
    }

    /// Compute base, VAT, withholding and total for an item list
    ///
    /// Rate texts that do not parse count as 0; this never fails.
    /// Each tax amount is rounded to cents before being combined, the total
    /// itself is not rounded again.
    ///
    /// Amounts that would overflow a `Decimal` never panic: a tax out of range
    /// is applied at 0 %, and so are both taxes when their sum with the base
    /// is out of range. The base saturates; `InvoiceForm` rejects any line
    /// that would push it that far.
    pub fn compute_totals(
        &self,
        items: &[LineItem],
        vat_rate_text: &str,
        withholding_rate_text: &str,
    ) -> InvoiceTotals {
        if items.is_empty() {
            return InvoiceTotals::zero(
                self.taxes.resolve_rate(TaxKind::Vat, vat_rate_text),
                self.taxes
                    .resolve_rate(TaxKind::Withholding, withholding_rate_text),
            );
        }

        let base_amount = items
            .iter()
            .fold(Decimal::ZERO, |sum, item| sum.saturating_add(item.total()));

        let (vat_rate, vat_amount) =
            self.taxes
                .apply_rate(TaxKind::Vat, base_amount, vat_rate_text);
        let (withholding_rate, withholding_amount) =
            self.taxes
                .apply_rate(TaxKind::Withholding, base_amount, withholding_rate_text);

        let total_amount = base_amount
            .checked_add(vat_amount)
            .and_then(|amount| amount.checked_sub(withholding_amount));

        match total_amount {
            Some(total_amount) => InvoiceTotals {
                base_amount,
                vat_rate,
                vat_amount,
                withholding_rate,
                withholding_amount,
                total_amount,
            },
            None => {
                debug!(%base_amount, "Taxes push the total out of range, using 0");
                InvoiceTotals {
                    base_amount,
                    total_amount: base_amount,
                    ..InvoiceTotals::zero(Decimal::ZERO, Decimal::ZERO)
                }
            }
        }
    }

    pub fn format_currency(&self, amount: Decimal) -> String {
        currency::format_currency(amount)
    }

    pub fn format_quantity(&self, amount: Decimal) -> String {
        currency::format_quantity(amount)
    }

    pub fn format_rate(&self, amount: Decimal) -> String {
        currency::format_rate(amount)
    }
}

impl Default for InvoiceCalculator {
    fn default() -> Self {
        Self::new()
    }
}
