mod invoice_calculator;
mod invoice_form;

pub use invoice_calculator::InvoiceCalculator;
pub use invoice_form::{InvoiceForm, EMPTY_INVOICE_MESSAGE, EMPTY_SELECTION_MESSAGE};
