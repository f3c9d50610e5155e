mod invoice;
mod line_item;
mod totals;

pub use invoice::{
    CompanyProfile, Customer, DraftLineItem, InvoiceDetails, InvoiceDraft, INVOICE_DATE_FORMAT,
};
pub use line_item::{line_total, LineItem, EMPTY_DESCRIPTION_MESSAGE, INVALID_AMOUNTS_MESSAGE};
pub use totals::{FormattedTotals, InvoiceTotals};
