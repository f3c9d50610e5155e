//! Facturador: invoice totals, Spanish-locale formatting and PDF invoices
//!
//! The calculator core ([`InvoiceCalculator`]) is pure and stateless. The
//! [`InvoiceForm`] holds the item list and rate texts being edited, and the
//! documents module lays the form out and renders it to PDF.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{AppError, Result};
pub use modules::documents;
pub use modules::invoices;
pub use modules::invoices::{InvoiceCalculator, InvoiceForm, InvoiceTotals, LineItem};
pub use modules::taxes;
