// Documents module: printable invoice layout and PDF output

pub mod models;
pub mod services;

pub use models::InvoiceLayout;
pub use services::{export_pdf, render_pdf, HelveticaMetrics, PdfRenderer};
