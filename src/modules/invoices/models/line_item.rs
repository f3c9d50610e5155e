// LineItem model with total calculation
//
// A line item is one row of the invoice table: a quantity (kgs, hours, ...),
// a free-text description and a unit price. Items are immutable once added
// to the form; a wrong row is removed and entered again.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::currency::{self, CURRENCY_SCALE};
use crate::core::{AppError, Result};

/// Message shown when quantity or unit price cannot be read
pub const INVALID_AMOUNTS_MESSAGE: &str = "Revisa la cantidad y el precio unitario.";

/// Message shown when the description is blank
pub const EMPTY_DESCRIPTION_MESSAGE: &str = "La descripción no puede estar vacía.";

/// Represents a single line item in an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Quantity, exact decimal (may carry more than 3 decimals)
    pub quantity: Decimal,

    /// Description of the product or service (trimmed, never empty)
    pub description: String,

    /// Price per unit in euros
    pub unit_price: Decimal,
}

impl LineItem {
    /// Create a new line item with validation
    ///
    /// # Arguments
    /// * `quantity` - Exact decimal quantity
    /// * `description` - Product/service description, trimmed; must not be empty
    /// * `unit_price` - Price per unit
    ///
    /// A product of quantity and price that does not fit in a `Decimal` is
    /// rejected like an unreadable amount.
    pub fn new(quantity: Decimal, description: &str, unit_price: Decimal) -> Result<Self> {
        if quantity.checked_mul(unit_price).is_none() {
            return Err(AppError::parse(INVALID_AMOUNTS_MESSAGE));
        }

        let description = description.trim();
        if description.is_empty() {
            return Err(AppError::validation(EMPTY_DESCRIPTION_MESSAGE));
        }

        Ok(Self {
            quantity,
            description: description.to_string(),
            unit_price,
        })
    }

    /// Build a line item from the raw text of the three input fields
    ///
    /// Quantity and unit price are checked before the description, so a row
    /// with every field wrong reports the amounts first.
    pub fn from_input(quantity_text: &str, description: &str, unit_price_text: &str) -> Result<Self> {
        if quantity_text.trim().is_empty() || unit_price_text.trim().is_empty() {
            return Err(AppError::validation(INVALID_AMOUNTS_MESSAGE));
        }

        let quantity = currency::parse_decimal(quantity_text)
            .map_err(|_| AppError::parse(INVALID_AMOUNTS_MESSAGE))?;
        let unit_price = currency::parse_decimal(unit_price_text)
            .map_err(|_| AppError::parse(INVALID_AMOUNTS_MESSAGE))?;

        Self::new(quantity, description, unit_price)
    }

    /// Line total
    ///
    /// Formula: round_half_up(quantity × unit_price, 2)
    pub fn total(&self) -> Decimal {
        line_total(self.quantity, self.unit_price)
    }
}

/// Rounded product of quantity and unit price
///
/// Saturates at the `Decimal` bounds; `LineItem::new` never lets such a
/// product through.
pub fn line_total(quantity: Decimal, unit_price: Decimal) -> Decimal {
    currency::round_half_up(quantity.saturating_mul(unit_price), CURRENCY_SCALE)
}
