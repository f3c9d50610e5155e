mod tax;

pub use tax::TaxKind;
