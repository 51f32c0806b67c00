//! Invoice data extracted from OCR text.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tax::TaxPrediction;

/// Structured fields extracted from one invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Invoice number/identifier (empty when not found).
    pub invoice_number: String,

    /// Invoice date, `YYYY-MM-DD` when it could be normalized.
    pub invoice_date: String,

    /// GST identification number (empty when not found).
    pub gstin: String,

    /// Vendor name, taken from the top of the document.
    pub vendor_name: String,

    /// Vendor address. Not extracted yet, always empty.
    pub vendor_address: String,

    /// Grand total as printed on the invoice (0 when not found).
    pub total_amount: Decimal,

    /// Line items in source order.
    pub line_items: Vec<LineItem>,

    /// Source text the record was extracted from.
    pub raw_text: String,

    /// Missing-field issues, set by [`InvoiceRecord::with_validation`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_issues: Option<Vec<String>>,

    /// Whether validation found no issues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_valid: Option<bool>,
}

/// A description/amount pair found on a single line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item description (text before the first number).
    pub description: String,

    /// First number on the line.
    pub amount: Decimal,

    /// The trimmed source line.
    pub line_text: String,
}

impl InvoiceRecord {
    /// Create an empty record for the given source text.
    pub fn empty(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            ..Self::default()
        }
    }

    /// Check for missing fields and return the issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.invoice_number.is_empty() {
            issues.push("Invoice number not found".to_string());
        }

        if self.invoice_date.is_empty() {
            issues.push("Invoice date not found".to_string());
        }

        if self.vendor_name.is_empty() {
            issues.push("Vendor name not found".to_string());
        }

        if self.total_amount.is_zero() {
            issues.push("Total amount not found or is zero".to_string());
        }

        if self.gstin.is_empty() {
            issues.push("GSTIN not found".to_string());
        }

        issues
    }

    /// Annotate the record with its validation result.
    pub fn with_validation(mut self) -> Self {
        let issues = self.validate();
        self.is_valid = Some(issues.is_empty());
        self.validation_issues = Some(issues);
        self
    }
}

/// Extraction and prediction results for one source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedInvoice {
    /// Source file name (`-` for stdin).
    pub filename: String,

    /// Text handed to the extractor.
    pub raw_text: String,

    /// Extracted invoice fields.
    pub invoice_data: InvoiceRecord,

    /// Predicted taxes for the extracted line items.
    pub tax_data: TaxPrediction,
}
