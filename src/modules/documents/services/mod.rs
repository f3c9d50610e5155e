mod export;
mod invoice_layout;
mod pdf_renderer;
mod text_metrics;

pub use export::{export_pdf, render_pdf};
pub use pdf_renderer::PdfRenderer;
pub use text_metrics::{wrap_text, HelveticaMetrics, TextMetrics};
