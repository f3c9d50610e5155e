// Positioned drawing operations for a printed invoice
//
// Coordinates are PDF points with the origin at the bottom-left corner of
// an A4 page, the convention every PDF backend shares.

use serde::Serialize;

/// A4 width in points
pub const PAGE_WIDTH: f32 = 595.2756;

/// A4 height in points
pub const PAGE_HEIGHT: f32 = 841.8898;

/// Points per millimetre
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Page margin (20 mm)
pub const MARGIN: f32 = 20.0 * POINTS_PER_MM;

/// Fonts available to the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

/// Which edge of the text the `x` coordinate refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Align {
    Left,
    Right,
}

/// One drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        font: Font,
        size: f32,
        align: Align,
        text: String,
    },
    /// Filled rectangle, `(x, y)` is the bottom-left corner
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        /// 0.0 black .. 1.0 white
        gray: f32,
    },
}

impl DrawOp {
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::FillRect { .. } => None,
        }
    }
}

/// Operations of a single page, in drawing order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// All text drawn on the page, in drawing order
    pub fn texts(&self) -> Vec<&str> {
        self.ops.iter().filter_map(DrawOp::text).collect()
    }

    /// First text operation whose content equals `text`
    pub fn find_text(&self, text: &str) -> Option<&DrawOp> {
        self.ops.iter().find(|op| op.text() == Some(text))
    }
}

/// A laid-out invoice, ready to hand to a renderer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceLayout {
    pub pages: Vec<Page>,
}

impl InvoiceLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Text of every page, concatenated in order
    pub fn texts(&self) -> Vec<&str> {
        self.pages.iter().flat_map(Page::texts).collect()
    }
}
