//! Core library for GST invoice digitization.
//!
//! This crate provides:
//! - OCR text cleanup
//! - Invoice field extraction (number, date, GSTIN, vendor, total, line items)
//! - Rule-based GST category and rate prediction with total reconciliation
//! - Plain-text tax reports and JSON/CSV exports

pub mod error;
pub mod export;
pub mod invoice;
pub mod models;
pub mod tax;
pub mod text;

pub use error::{GstError, Result};
pub use invoice::{extract_fields, extract_line_items, InvoiceFieldExtractor};
pub use invoice::rules::dates::normalize_date;
pub use models::config::GstConfig;
pub use models::invoice::{InvoiceRecord, LineItem, ProcessedInvoice};
pub use models::tax::{
    Reconciliation, TaxBreakdown, TaxCategory, TaxPrediction, TaxSummary, TaxedLineItem,
};
pub use tax::{categorize, generate_tax_report, predict_tax, update_tax_category, TaxPredictor};
pub use text::clean_extracted_text;
