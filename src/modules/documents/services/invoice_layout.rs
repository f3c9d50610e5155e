use tracing::debug;

use crate::core::{currency, Result};
use crate::modules::documents::models::{
    Align, DrawOp, Font, InvoiceLayout, Page, MARGIN, PAGE_HEIGHT, PAGE_WIDTH,
};
use crate::modules::documents::services::text_metrics::{wrap_text, TextMetrics};
use crate::modules::invoices::InvoiceForm;
use crate::modules::taxes::{TaxCalculator, TaxKind};

/// Table rows are not started below this height
const ROW_BREAK_Y: f32 = 100.0;

/// The totals block needs at least this much room
const TOTALS_BREAK_Y: f32 = 120.0;

const ROW_HEIGHT: f32 = 16.0;
const HEADER_BAND_HEIGHT: f32 = 18.0;
const HEADER_GRAY: f32 = 0.827;
const CELL_PADDING: f32 = 5.0;

const TABLE_HEADERS: [&str; 4] = ["Cantidad", "Descripción", "Precio", "Importe"];

/// Column geometry of the item table
#[derive(Debug, Clone, Copy)]
struct TableColumns {
    x_start: f32,
    widths: [f32; 4],
}

impl TableColumns {
    fn new(x_start: f32, table_width: f32) -> Self {
        Self {
            x_start,
            widths: [
                table_width * 0.18,
                table_width * 0.48,
                table_width * 0.17,
                table_width * 0.17,
            ],
        }
    }

    fn width(&self) -> f32 {
        self.widths.iter().sum()
    }

    fn quantity_right(&self) -> f32 {
        self.x_start + self.widths[0] - CELL_PADDING
    }

    fn description_x(&self) -> f32 {
        self.x_start + self.widths[0] + CELL_PADDING
    }

    fn description_width(&self) -> f32 {
        self.widths[1] - 2.0 * CELL_PADDING
    }

    fn unit_price_right(&self) -> f32 {
        self.x_start + self.widths[0] + self.widths[1] + self.widths[2] - CELL_PADDING
    }

    fn total_right(&self) -> f32 {
        self.x_start + self.width() - CELL_PADDING
    }

    /// Left edge of the totals labels, under the price column
    fn totals_x(&self) -> f32 {
        self.x_start + self.widths[0] + self.widths[1]
    }
}

/// Accumulates drawing operations page by page
struct PageCanvas {
    pages: Vec<Page>,
    current: Page,
}

impl PageCanvas {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Page::default(),
        }
    }

    fn text(&mut self, font: Font, size: f32, x: f32, y: f32, text: impl Into<String>) {
        self.push_text(font, size, x, y, Align::Left, text.into());
    }

    fn text_right(&mut self, font: Font, size: f32, x: f32, y: f32, text: impl Into<String>) {
        self.push_text(font, size, x, y, Align::Right, text.into());
    }

    fn push_text(&mut self, font: Font, size: f32, x: f32, y: f32, align: Align, text: String) {
        if text.is_empty() {
            return;
        }
        self.current.ops.push(DrawOp::Text {
            x,
            y,
            font,
            size,
            align,
            text,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, gray: f32) {
        self.current.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
            gray,
        });
    }

    fn new_page(&mut self) {
        let finished = std::mem::take(&mut self.current);
        self.pages.push(finished);
    }

    fn finish(mut self) -> InvoiceLayout {
        self.new_page();
        InvoiceLayout { pages: self.pages }
    }
}

impl InvoiceLayout {
    /// Lay out an invoice on A4 pages
    ///
    /// Fails when the form has no lines. Long item tables continue on new
    /// pages with the table header repeated.
    pub fn build(form: &InvoiceForm, metrics: &dyn TextMetrics) -> Result<Self> {
        form.ensure_exportable()?;

        let mut canvas = PageCanvas::new();
        let x_start = MARGIN;
        let y_start = PAGE_HEIGHT - MARGIN;

        // Issuer
        canvas.text(Font::HelveticaBold, 16.0, x_start, y_start, "FACTURA");

        let mut y_company = y_start - 20.0;
        canvas.text(Font::Helvetica, 10.0, x_start, y_company, form.company.name);
        y_company -= 12.0;
        for line in form.company.address_lines {
            canvas.text(Font::Helvetica, 10.0, x_start, y_company, line);
            y_company -= 12.0;
        }

        // Invoice number, date and concept
        let details = &form.details;
        let x_invoice = PAGE_WIDTH - MARGIN - 200.0;
        let y_invoice = y_start - 20.0;
        canvas.text(
            Font::HelveticaBold,
            10.0,
            x_invoice,
            y_invoice,
            format!("Nº de factura: {}", details.number),
        );
        canvas.text(
            Font::HelveticaBold,
            10.0,
            x_invoice,
            y_invoice - 14.0,
            format!("Fecha: {}", details.date),
        );
        if !details.concept.trim().is_empty() {
            canvas.text(
                Font::HelveticaBold,
                10.0,
                x_invoice,
                y_invoice - 28.0,
                format!("Concepto: {}", details.concept),
            );
        }

        // Customer
        let customer = &form.customer;
        let mut y_client = y_company - 10.0;
        canvas.text(Font::HelveticaBold, 10.0, x_start, y_client, "Cliente");
        y_client -= 14.0;
        canvas.text(Font::Helvetica, 10.0, x_start, y_client, customer.name.as_str());
        y_client -= 12.0;
        if !customer.tax_id.trim().is_empty() {
            canvas.text(
                Font::Helvetica,
                10.0,
                x_start,
                y_client,
                format!("NIF/CIF: {}", customer.tax_id),
            );
            y_client -= 12.0;
        }
        if !customer.address.trim().is_empty() {
            canvas.text(Font::Helvetica, 10.0, x_start, y_client, customer.address.as_str());
            y_client -= 12.0;
        }
        let city_line = customer.city_line();
        if !city_line.is_empty() {
            canvas.text(Font::Helvetica, 10.0, x_start, y_client, city_line);
            y_client -= 12.0;
        }

        // Items
        let columns = TableColumns::new(x_start, PAGE_WIDTH - 2.0 * MARGIN);
        let mut y = draw_table_header(&mut canvas, &columns, y_client - 20.0);

        for item in form.items() {
            let description_lines = wrap_text(
                &item.description,
                columns.description_width(),
                Font::Helvetica,
                10.0,
                metrics,
            );

            for (line_index, line) in description_lines.into_iter().enumerate() {
                if y < ROW_BREAK_Y {
                    canvas.new_page();
                    y = draw_table_header(&mut canvas, &columns, PAGE_HEIGHT - MARGIN);
                }

                if line_index == 0 {
                    canvas.text_right(
                        Font::Helvetica,
                        10.0,
                        columns.quantity_right(),
                        y,
                        currency::format_quantity(item.quantity),
                    );
                    canvas.text_right(
                        Font::Helvetica,
                        10.0,
                        columns.unit_price_right(),
                        y,
                        currency::format_currency(item.unit_price),
                    );
                    canvas.text_right(
                        Font::Helvetica,
                        10.0,
                        columns.total_right(),
                        y,
                        currency::format_currency(item.total()),
                    );
                }

                canvas.text(Font::Helvetica, 10.0, columns.description_x(), y, line);
                y -= ROW_HEIGHT;
            }
        }

        if y < TOTALS_BREAK_Y {
            canvas.new_page();
            y = PAGE_HEIGHT - MARGIN - 40.0;
        }

        // Totals
        let totals = form.totals();
        let taxes = TaxCalculator::new();
        let totals_x = columns.totals_x();
        let value_x = columns.total_right();
        let mut totals_y = y - 10.0;

        let rows = [
            ("Base imponible:".to_string(), totals.base_amount),
            (
                format!("{}:", taxes.label(TaxKind::Vat, totals.vat_rate)),
                totals.vat_amount,
            ),
            (
                format!("{}:", taxes.label(TaxKind::Withholding, totals.withholding_rate)),
                totals.withholding_amount,
            ),
        ];
        for (label, amount) in rows {
            canvas.text(Font::Helvetica, 10.0, totals_x, totals_y, label);
            canvas.text_right(
                Font::Helvetica,
                10.0,
                value_x,
                totals_y,
                currency::format_currency(amount),
            );
            totals_y -= 14.0;
        }

        canvas.text(Font::HelveticaBold, 11.0, totals_x, totals_y, "Total factura:");
        canvas.text_right(
            Font::HelveticaBold,
            11.0,
            value_x,
            totals_y,
            currency::format_currency(totals.total_amount),
        );

        // Footer notes
        totals_y -= 30.0;
        if !details.notes.trim().is_empty() {
            for line in wrap_text(&details.notes, columns.width(), Font::Helvetica, 9.0, metrics) {
                canvas.text(Font::Helvetica, 9.0, x_start, totals_y, line);
                totals_y -= 12.0;
            }
        }

        let layout = canvas.finish();
        debug!(
            pages = layout.page_count(),
            items = form.items().len(),
            "Invoice laid out"
        );
        Ok(layout)
    }
}

/// Grey header band with the four column titles; returns the first row's y
fn draw_table_header(canvas: &mut PageCanvas, columns: &TableColumns, y: f32) -> f32 {
    canvas.fill_rect(
        columns.x_start,
        y - HEADER_BAND_HEIGHT,
        columns.width(),
        HEADER_BAND_HEIGHT,
        HEADER_GRAY,
    );

    let text_y = y - 13.0;
    canvas.text(
        Font::HelveticaBold,
        10.0,
        columns.x_start + CELL_PADDING,
        text_y,
        TABLE_HEADERS[0],
    );
    canvas.text(
        Font::HelveticaBold,
        10.0,
        columns.description_x(),
        text_y,
        TABLE_HEADERS[1],
    );
    canvas.text_right(
        Font::HelveticaBold,
        10.0,
        columns.unit_price_right(),
        text_y,
        TABLE_HEADERS[2],
    );
    canvas.text_right(
        Font::HelveticaBold,
        10.0,
        columns.total_right(),
        text_y,
        TABLE_HEADERS[3],
    );

    y - 24.0
}
