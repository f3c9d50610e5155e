pub mod currency;
pub mod error;

pub use currency::{format_currency, format_quantity, format_rate, parse_decimal, round_half_up};
pub use error::{AppError, Result};
