//! Euro amounts for Spanish invoices: decimal input parsing, rounding rules
//! and decimal-comma display formatting.
//!
//! Currency and quantities round half-up (ties away from zero). Rates round
//! half-to-even, which is what the rate fields have always displayed.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::core::error::{AppError, Result};

/// Decimal places for euro amounts
pub const CURRENCY_SCALE: u32 = 2;

/// Decimal places kept when displaying quantities (kgs, hours, ...)
pub const QUANTITY_SCALE: u32 = 3;

/// Decimal places kept when displaying percentage rates
pub const RATE_SCALE: u32 = 2;

/// Symbol shown next to amount field labels
pub const CURRENCY_SYMBOL: &str = "€";

/// Parse user input that may use either `,` or `.` as decimal separator
///
/// Every comma is normalized to a point before parsing, so `"12,50"` and
/// `"12.50"` are the same value. Empty input is an error.
pub fn parse_decimal(text: &str) -> Result<Decimal> {
    let normalized = text.replace(',', ".");
    let normalized = normalized.trim();

    if normalized.is_empty() {
        return Err(AppError::parse("Empty decimal input"));
    }

    Decimal::from_str(normalized)
        .or_else(|err| {
            if normalized.contains(|c: char| c == 'e' || c == 'E') {
                Decimal::from_scientific(&normalized.to_ascii_lowercase())
            } else {
                Err(err)
            }
        })
        .map_err(|_| AppError::parse(format!("Invalid decimal number: {}", text.trim())))
}

/// Round to `dp` decimal places, ties away from zero
pub fn round_half_up(amount: Decimal, dp: u32) -> Decimal {
    amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to `dp` decimal places, ties to the even neighbour
pub fn round_half_even(amount: Decimal, dp: u32) -> Decimal {
    amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
}

/// Format an euro amount with exactly two decimals and a decimal comma
///
/// `1234.5` → `"1234,50"`. No thousands separator.
pub fn format_currency(amount: Decimal) -> String {
    to_fixed(round_half_up(amount, CURRENCY_SCALE), CURRENCY_SCALE).replace('.', ",")
}

/// Format a quantity with up to three decimals, trailing zeros removed
///
/// `2.000` → `"2"`, `2.500` → `"2,5"`.
pub fn format_quantity(amount: Decimal) -> String {
    let text = strip_trailing_zeros(to_fixed(
        round_half_up(amount, QUANTITY_SCALE),
        QUANTITY_SCALE,
    ));
    text.replace('.', ",")
}

/// Format a percentage rate with up to two decimals and a `%` suffix
///
/// `21` → `"21%"`, `2.5` → `"2,5%"`.
pub fn format_rate(amount: Decimal) -> String {
    let text = strip_trailing_zeros(to_fixed(round_half_even(amount, RATE_SCALE), RATE_SCALE));
    format!("{}%", text.replace('.', ","))
}

fn to_fixed(mut amount: Decimal, scale: u32) -> String {
    amount.rescale(scale);
    amount.to_string()
}

fn strip_trailing_zeros(text: String) -> String {
    if !text.contains('.') {
        return text;
    }

    let stripped = text.trim_end_matches('0').trim_end_matches('.');
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}
