use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::core::{currency, AppError, Result};
use crate::modules::invoices::models::{
    CompanyProfile, Customer, InvoiceDetails, InvoiceDraft, InvoiceTotals, LineItem,
    INVALID_AMOUNTS_MESSAGE,
};
use crate::modules::invoices::services::InvoiceCalculator;
use crate::modules::taxes::TaxKind;

/// Message shown when removing with nothing selected
pub const EMPTY_SELECTION_MESSAGE: &str = "Selecciona una línea para eliminarla.";

/// Message shown when exporting an invoice without lines
pub const EMPTY_INVOICE_MESSAGE: &str = "Añade al menos una línea antes de exportar.";

/// Everything the invoice form holds while it is being filled in
///
/// Owned by a single caller; the calculator is consulted on every read of
/// the totals, so the form never caches derived amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceForm {
    pub company: CompanyProfile,
    pub details: InvoiceDetails,
    pub customer: Customer,
    items: Vec<LineItem>,
    vat_rate_text: String,
    withholding_rate_text: String,
}

impl InvoiceForm {
    /// Fresh form: invoice number 1, today's date, IVA 21 % and IRPF 2 %
    pub fn new() -> Self {
        Self::with_rates(
            TaxKind::Vat.default_rate_text(),
            TaxKind::Withholding.default_rate_text(),
        )
    }

    /// Fresh form with the given default rate texts
    pub fn with_rates(vat_rate_text: &str, withholding_rate_text: &str) -> Self {
        Self {
            company: CompanyProfile::default(),
            details: InvoiceDetails::default(),
            customer: Customer::default(),
            items: Vec::new(),
            vat_rate_text: vat_rate_text.to_string(),
            withholding_rate_text: withholding_rate_text.to_string(),
        }
    }

    /// Build a form from a draft, validating every line as if typed in
    ///
    /// `defaults` supplies the form that missing draft fields fall back to.
    /// The first invalid line aborts with its error.
    pub fn from_draft(draft: InvoiceDraft, defaults: InvoiceForm) -> Result<Self> {
        let mut form = defaults;

        if let Some(number) = draft.number {
            form.details.number = number;
        }
        if let Some(date) = draft.date {
            form.details.date = date;
        }
        form.details.concept = draft.concept;
        form.details.notes = draft.notes;
        form.customer = draft.customer;

        if let Some(vat_rate) = draft.vat_rate {
            form.set_vat_rate_text(vat_rate);
        }
        if let Some(withholding_rate) = draft.withholding_rate {
            form.set_withholding_rate_text(withholding_rate);
        }

        for (index, line) in draft.items.iter().enumerate() {
            form.add_line(&line.quantity, &line.description, &line.unit_price)
                .map_err(|err| match err {
                    AppError::Parse(msg) => AppError::Parse(format!("Línea {}: {}", index + 1, msg)),
                    AppError::Validation(msg) => {
                        AppError::Validation(format!("Línea {}: {}", index + 1, msg))
                    }
                    other => other,
                })?;
        }

        Ok(form)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn vat_rate_text(&self) -> &str {
        &self.vat_rate_text
    }

    pub fn withholding_rate_text(&self) -> &str {
        &self.withholding_rate_text
    }

    pub fn set_vat_rate_text(&mut self, text: impl Into<String>) {
        self.vat_rate_text = text.into();
    }

    pub fn set_withholding_rate_text(&mut self, text: impl Into<String>) {
        self.withholding_rate_text = text.into();
    }

    /// Validate the three line fields and append the item
    ///
    /// On error the item list is left untouched. A line that would push the
    /// base amount past the `Decimal` range is rejected.
    pub fn add_line(
        &mut self,
        quantity_text: &str,
        description: &str,
        unit_price_text: &str,
    ) -> Result<&LineItem> {
        let item = LineItem::from_input(quantity_text, description, unit_price_text)
            .and_then(|item| self.ensure_base_fits(&item).map(|_| item));
        let item = match item {
            Ok(item) => item,
            Err(err) => {
                warn!(error = %err, "Line rejected");
                return Err(err);
            }
        };

        info!(
            quantity = %currency::format_quantity(item.quantity),
            description = %item.description,
            total = %currency::format_currency(item.total()),
            "Line added"
        );

        let index = self.items.len();
        self.items.push(item);
        Ok(&self.items[index])
    }

    fn ensure_base_fits(&self, item: &LineItem) -> Result<()> {
        self.items
            .iter()
            .try_fold(item.total(), |sum, existing| sum.checked_add(existing.total()))
            .map(|_| ())
            .ok_or_else(|| AppError::validation(INVALID_AMOUNTS_MESSAGE))
    }

    /// Remove one line by its position
    pub fn remove_line(&mut self, index: usize) -> Result<LineItem> {
        if index >= self.items.len() {
            return Err(AppError::validation(format!(
                "No existe la línea {} (hay {})",
                index + 1,
                self.items.len()
            )));
        }

        let removed = self.items.remove(index);
        info!(index, description = %removed.description, "Line removed");
        Ok(removed)
    }

    /// Remove every selected line at once
    ///
    /// Duplicated indices are ignored. If any index is out of range nothing
    /// is removed. Returned items keep their original order.
    pub fn remove_lines(&mut self, indices: &[usize]) -> Result<Vec<LineItem>> {
        if indices.is_empty() {
            return Err(AppError::validation(EMPTY_SELECTION_MESSAGE));
        }

        let selected: BTreeSet<usize> = indices.iter().copied().collect();
        if let Some(&last) = selected.iter().next_back() {
            if last >= self.items.len() {
                return Err(AppError::validation(format!(
                    "No existe la línea {} (hay {})",
                    last + 1,
                    self.items.len()
                )));
            }
        }

        let mut removed = Vec::with_capacity(selected.len());
        for &index in selected.iter().rev() {
            removed.push(self.items.remove(index));
        }
        removed.reverse();

        info!(count = removed.len(), "Lines removed");
        Ok(removed)
    }

    /// Current totals for the item list and rate texts
    pub fn totals(&self) -> InvoiceTotals {
        InvoiceCalculator::new().compute_totals(
            &self.items,
            &self.vat_rate_text,
            &self.withholding_rate_text,
        )
    }

    /// An invoice needs at least one line before it can be exported
    pub fn ensure_exportable(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(AppError::validation(EMPTY_INVOICE_MESSAGE));
        }
        Ok(())
    }

    pub fn default_file_name(&self) -> String {
        self.details.default_file_name()
    }
}

impl Default for InvoiceForm {
    fn default() -> Self {
        Self::new()
    }
}
