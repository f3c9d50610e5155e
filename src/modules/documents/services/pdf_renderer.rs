use std::io::BufWriter;

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb,
};

use crate::core::{AppError, Result};
use crate::modules::documents::models::{
    Align, DrawOp, Font, InvoiceLayout, PAGE_HEIGHT, PAGE_WIDTH, POINTS_PER_MM,
};
use crate::modules::documents::services::text_metrics::TextMetrics;

fn mm(points: f32) -> Mm {
    Mm(points / POINTS_PER_MM)
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, font: Font) -> &IndirectFontRef {
        match font {
            Font::Helvetica => &self.regular,
            Font::HelveticaBold => &self.bold,
        }
    }
}

/// Draws an [`InvoiceLayout`] into a PDF with printpdf
pub struct PdfRenderer<'a> {
    metrics: &'a dyn TextMetrics,
}

impl<'a> PdfRenderer<'a> {
    /// `metrics` must describe the fonts the renderer uses, so right-aligned
    /// columns line up
    pub fn new(metrics: &'a dyn TextMetrics) -> Self {
        Self { metrics }
    }

    /// Render every page and return the PDF bytes
    pub fn render(&self, layout: &InvoiceLayout, title: &str) -> Result<Vec<u8>> {
        let (doc, first_page, first_layer) =
            PdfDocument::new(title, mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Layer 1");

        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| AppError::render(e.to_string()))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| AppError::render(e.to_string()))?,
        };

        for (index, page) in layout.pages.iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page_index, layer_index) = doc.add_page(
                    mm(PAGE_WIDTH),
                    mm(PAGE_HEIGHT),
                    format!("Layer {}", index + 1),
                );
                doc.get_page(page_index).get_layer(layer_index)
            };

            for op in &page.ops {
                self.draw(&layer, &fonts, op);
            }
        }

        let mut writer = BufWriter::new(Vec::<u8>::new());
        doc.save(&mut writer)
            .map_err(|e| AppError::render(e.to_string()))?;
        writer
            .into_inner()
            .map_err(|e| AppError::render(e.to_string()))
    }

    fn draw(&self, layer: &PdfLayerReference, fonts: &Fonts, op: &DrawOp) {
        match op {
            DrawOp::Text {
                x,
                y,
                font,
                size,
                align,
                text,
            } => {
                let x = match align {
                    Align::Left => *x,
                    Align::Right => (x - self.metrics.string_width(text, *font, *size)).max(0.0),
                };
                layer.use_text(text.as_str(), *size, mm(x), mm(*y), fonts.get(*font));
            }
            DrawOp::FillRect {
                x,
                y,
                width,
                height,
                gray,
            } => {
                layer.set_fill_color(Color::Rgb(Rgb::new(*gray, *gray, *gray, None)));
                let rect = Rect::new(mm(*x), mm(*y), mm(x + width), mm(y + height))
                    .with_mode(PaintMode::Fill);
                layer.add_rect(rect);
                layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
            }
        }
    }
}
