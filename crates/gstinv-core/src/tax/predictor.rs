//! GST prediction for extracted line items.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::models::config::TaxConfig;
use crate::models::invoice::{InvoiceRecord, LineItem};
use crate::models::tax::{
    Reconciliation, TaxBreakdown, TaxPrediction, TaxSummary, TaxedLineItem,
};

use super::category::categorize;

/// Decimal places used for reported totals.
const REPORT_DP: u32 = 2;

/// Predicts GST for an invoice and reconciles it with the extracted total.
///
/// Transactions are treated as intra-state: the tax is split evenly into
/// CGST and SGST and IGST is always zero.
#[derive(Debug, Clone)]
pub struct TaxPredictor {
    /// Relative tolerance for the reconciliation check.
    match_tolerance: Decimal,
}

impl TaxPredictor {
    pub fn new() -> Self {
        Self::from_config(&TaxConfig::default())
    }

    pub fn from_config(config: &TaxConfig) -> Self {
        Self {
            match_tolerance: config.match_tolerance,
        }
    }

    /// Set the reconciliation tolerance (0.10 = 10%).
    pub fn with_match_tolerance(mut self, tolerance: Decimal) -> Self {
        self.match_tolerance = tolerance;
        self
    }

    /// Predict taxes for every line item of `record`.
    pub fn predict(&self, record: &InvoiceRecord) -> TaxPrediction {
        let items: Vec<TaxedLineItem> = record.line_items.iter().map(apply_tax).collect();

        let total_taxable: Decimal = items.iter().map(|i| i.amount).sum();
        let total_tax: Decimal = items.iter().map(|i| i.tax_amount).sum();
        let half_tax = total_tax / Decimal::TWO;

        let predicted_total = (total_taxable + total_tax).round_dp(REPORT_DP);

        info!(
            "Predicted tax {} on taxable {} across {} items",
            total_tax,
            total_taxable,
            items.len()
        );

        TaxPrediction {
            line_items_with_tax: items,
            tax_summary: TaxSummary {
                total_taxable_amount: total_taxable.round_dp(REPORT_DP),
                total_tax_amount: total_tax.round_dp(REPORT_DP),
                tax_breakdown: TaxBreakdown {
                    cgst: half_tax.round_dp(REPORT_DP),
                    sgst: half_tax.round_dp(REPORT_DP),
                    igst: Decimal::ZERO,
                },
            },
            predicted_total,
            validation: self.reconcile(predicted_total, record.total_amount),
        }
    }

    /// Compare predicted and extracted totals. `None` when nothing was extracted.
    pub fn reconcile(&self, predicted_total: Decimal, extracted_total: Decimal) -> Option<Reconciliation> {
        if extracted_total <= Decimal::ZERO {
            return None;
        }

        let difference = (predicted_total - extracted_total).abs();
        // A tolerance so large that the limit overflows accepts everything.
        let match_threshold = extracted_total
            .checked_mul(self.match_tolerance)
            .map_or(true, |limit| difference < limit);

        debug!(
            "Reconciliation: predicted {} vs extracted {} (match: {})",
            predicted_total, extracted_total, match_threshold
        );

        Some(Reconciliation {
            extracted_total,
            predicted_total,
            difference: difference.round_dp(REPORT_DP),
            match_threshold,
        })
    }
}

impl Default for TaxPredictor {
    fn default() -> Self {
        Self::new()
    }
}

/// Categorize a line item and compute its tax.
pub fn apply_tax(item: &LineItem) -> TaxedLineItem {
    let category = categorize(&item.description);
    let tax_rate = category.rate();
    let tax_amount = item.amount * tax_rate / Decimal::ONE_HUNDRED;

    TaxedLineItem {
        description: item.description.clone(),
        amount: item.amount,
        category,
        tax_rate,
        tax_amount,
        total_with_tax: item.amount + tax_amount,
        original_line: item.line_text.clone(),
    }
}

/// Predict taxes with default settings.
///
/// `raw_text` is not used; only the extracted line items and total matter.
pub fn predict_tax(_raw_text: &str, record: &InvoiceRecord) -> TaxPrediction {
    TaxPredictor::new().predict(record)
}
