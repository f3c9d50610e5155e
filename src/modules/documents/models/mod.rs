mod layout;

pub use layout::{
    Align, DrawOp, Font, InvoiceLayout, Page, MARGIN, PAGE_HEIGHT, PAGE_WIDTH, POINTS_PER_MM,
};
