pub mod documents;
pub mod invoices;
pub mod taxes;
