use std::env;
use std::path::PathBuf;

use crate::core::{currency, AppError, Result};
use crate::modules::invoices::InvoiceForm;
use crate::modules::taxes::TaxKind;

/// Defaults applied to every new invoice form
#[derive(Debug, Clone)]
pub struct InvoiceConfig {
    pub vat_rate: String,
    pub withholding_rate: String,
    pub output_dir: PathBuf,
}

impl InvoiceConfig {
    pub fn new(vat_rate: String, withholding_rate: String, output_dir: PathBuf) -> Self {
        Self {
            vat_rate,
            withholding_rate,
            output_dir,
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(InvoiceConfig::new(
            env::var("DEFAULT_VAT_RATE")
                .unwrap_or_else(|_| TaxKind::Vat.default_rate_text().to_string()),
            env::var("DEFAULT_WITHHOLDING_RATE")
                .unwrap_or_else(|_| TaxKind::Withholding.default_rate_text().to_string()),
            env::var("INVOICE_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        ))
    }

    /// Default rates must be valid non-negative numbers
    ///
    /// Unlike the rate fields of a form, a broken default is a setup mistake
    /// and is reported instead of silently becoming 0.
    pub fn validate(&self) -> Result<()> {
        for (name, kind, text) in [
            ("DEFAULT_VAT_RATE", TaxKind::Vat, &self.vat_rate),
            ("DEFAULT_WITHHOLDING_RATE", TaxKind::Withholding, &self.withholding_rate),
        ] {
            let rate = currency::parse_decimal(text).map_err(|_| {
                AppError::Configuration(format!(
                    "Invalid {} ({}): {}",
                    name,
                    kind.field_label(),
                    text
                ))
            })?;
            if rate.is_sign_negative() {
                return Err(AppError::Configuration(format!(
                    "{} ({}) cannot be negative",
                    name,
                    kind.field_label()
                )));
            }
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(AppError::Configuration(
                "INVOICE_OUTPUT_DIR cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Empty form carrying the configured default rates
    pub fn new_form(&self) -> InvoiceForm {
        InvoiceForm::with_rates(&self.vat_rate, &self.withholding_rate)
    }
}
