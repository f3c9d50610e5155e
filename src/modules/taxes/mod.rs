pub mod models;
pub mod services;

pub use models::TaxKind;
pub use services::TaxCalculator;
