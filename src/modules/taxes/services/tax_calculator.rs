use rust_decimal::Decimal;
use tracing::debug;

use crate::core::currency::{self, CURRENCY_SCALE};
use crate::modules::taxes::models::TaxKind;

/// TaxCalculator turns percentage rate fields into rounded tax amounts
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Parse a rate field, treating anything unparseable as 0
    ///
    /// Rate fields are re-read on every keystroke, so a half-typed value must
    /// never stop the totals from being displayed.
    pub fn resolve_rate(&self, kind: TaxKind, rate_text: &str) -> Decimal {
        match currency::parse_decimal(rate_text) {
            Ok(rate) => rate,
            Err(err) => {
                debug!(tax = %kind, input = rate_text, error = %err, "Rate not parseable, using 0");
                Decimal::ZERO
            }
        }
    }

    /// Tax amount for a base at a percentage rate
    ///
    /// Formula: round_half_up(base × rate / 100, 2). An amount that does not
    /// fit in a `Decimal` is 0.
    pub fn calculate_tax(&self, base: Decimal, rate_percent: Decimal) -> Decimal {
        self.checked_tax(base, rate_percent).unwrap_or(Decimal::ZERO)
    }

    /// Tax amount, or `None` when `base × rate` overflows
    pub fn checked_tax(&self, base: Decimal, rate_percent: Decimal) -> Option<Decimal> {
        let amount = base
            .checked_mul(rate_percent)?
            .checked_div(Decimal::ONE_HUNDRED)?;
        Some(currency::round_half_up(amount, CURRENCY_SCALE))
    }

    /// Resolve a rate field and apply it to `base`
    ///
    /// Returns the rate actually applied and the tax amount. A rate whose tax
    /// is out of range is applied as 0, like a rate that does not parse.
    pub fn apply_rate(&self, kind: TaxKind, base: Decimal, rate_text: &str) -> (Decimal, Decimal) {
        let rate = self.resolve_rate(kind, rate_text);
        match self.checked_tax(base, rate) {
            Some(amount) => (rate, amount),
            None => {
                debug!(tax = %kind, %base, %rate, "Tax out of range, using 0");
                (Decimal::ZERO, Decimal::ZERO)
            }
        }
    }

    /// Totals block label, e.g. `"IVA 21%"`
    pub fn label(&self, kind: TaxKind, rate_percent: Decimal) -> String {
        format!("{} {}", kind.label(), currency::format_rate(rate_percent))
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
