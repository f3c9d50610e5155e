use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::Result;
use crate::modules::documents::models::InvoiceLayout;
use crate::modules::documents::services::{HelveticaMetrics, PdfRenderer};
use crate::modules::invoices::InvoiceForm;

/// Lay out, render and write an invoice PDF to `path`
///
/// Nothing is written when the form has no lines.
pub fn export_pdf(form: &InvoiceForm, path: &Path) -> Result<PathBuf> {
    let pdf = render_pdf(form)?;
    fs::write(path, &pdf)?;

    info!(
        path = %path.display(),
        number = %form.details.number,
        bytes = pdf.len(),
        "Invoice exported"
    );
    Ok(path.to_path_buf())
}

/// PDF bytes of an invoice
pub fn render_pdf(form: &InvoiceForm) -> Result<Vec<u8>> {
    let metrics = HelveticaMetrics::new();
    let layout = InvoiceLayout::build(form, &metrics)?;
    let title = format!("Factura {}", form.details.number);
    PdfRenderer::new(&metrics).render(&layout, &title)
}
