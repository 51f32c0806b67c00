//! Rule-based invoice field extractor.

use std::time::Instant;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::invoice::InvoiceRecord;

use super::line_items::extract_line_items_limited;
use super::rules::patterns::*;
use super::rules::{extract_date, extract_total_amount, first_capture, PatternRule, RuleMatch};

/// Extracts structured fields from raw OCR text.
#[derive(Debug, Clone)]
pub struct InvoiceFieldExtractor {
    /// Maximum number of line items kept.
    max_line_items: usize,
    /// Number of leading lines searched for the vendor name.
    vendor_scan_lines: usize,
    /// Smallest plausible total.
    min_amount: Decimal,
    /// Largest plausible total.
    max_amount: Decimal,
}

impl InvoiceFieldExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            max_line_items: config.max_line_items,
            vendor_scan_lines: config.vendor_scan_lines,
            min_amount: config.min_amount,
            max_amount: config.max_amount,
        }
    }

    /// Set the line item cap.
    pub fn with_max_line_items(mut self, max: usize) -> Self {
        self.max_line_items = max;
        self
    }

    /// Set how many leading lines may hold the vendor name.
    pub fn with_vendor_scan_lines(mut self, lines: usize) -> Self {
        self.vendor_scan_lines = lines;
        self
    }

    /// Set the plausible range for the invoice total.
    pub fn with_amount_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.min_amount = min;
        self.max_amount = max;
        self
    }

    /// Extract all fields. Fields that cannot be found are left empty.
    pub fn extract(&self, text: &str) -> InvoiceRecord {
        if text.is_empty() {
            return InvoiceRecord::empty(text);
        }

        let start = Instant::now();
        info!("Extracting invoice fields from {} characters of text", text.len());

        let record = InvoiceRecord {
            invoice_number: self.extract_invoice_number(text).into_option().unwrap_or_default(),
            invoice_date: extract_date(text).into_option().unwrap_or_default(),
            gstin: self.extract_gstin(text).into_option().unwrap_or_default(),
            vendor_name: self.extract_vendor_name(text).into_option().unwrap_or_default(),
            vendor_address: String::new(),
            total_amount: extract_total_amount(text, self.min_amount, self.max_amount),
            line_items: extract_line_items_limited(text, self.max_line_items),
            raw_text: text.to_string(),
            validation_issues: None,
            is_valid: None,
        };

        debug!(
            "Extracted invoice '{}' with {} line items in {:?}",
            record.invoice_number,
            record.line_items.len(),
            start.elapsed()
        );

        record
    }

    fn extract_invoice_number(&self, text: &str) -> RuleMatch<String> {
        let rules = [
            PatternRule::new("labeled_invoice_number", &INVOICE_NUMBER_LABELED),
            PatternRule::new("unlabeled_invoice_number", &INVOICE_NUMBER_UNLABELED),
            PatternRule::new("hash_invoice_number", &INVOICE_NUMBER_HASH),
        ];
        first_capture(&rules, text)
    }

    fn extract_gstin(&self, text: &str) -> RuleMatch<String> {
        first_capture(&[PatternRule::new("gstin", &GSTIN)], text).map(|g| g.to_uppercase())
    }

    fn extract_vendor_name(&self, text: &str) -> RuleMatch<String> {
        text.split('\n')
            .take(self.vendor_scan_lines)
            .find(|line| {
                line.trim().chars().count() > 3
                    && !VENDOR_EXCLUDED.is_match(line)
                    && !NUMERIC_PUNCTUATION_ONLY.is_match(line)
            })
            .map(|line| line.trim().to_string())
            .into()
    }
}

impl Default for InvoiceFieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract invoice fields with default settings.
pub fn extract_fields(raw_text: &str) -> InvoiceRecord {
    InvoiceFieldExtractor::new().extract(raw_text)
}
