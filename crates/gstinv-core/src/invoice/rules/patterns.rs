//! Common regex patterns for GST invoice extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Invoice number patterns, tried in this order
    pub static ref INVOICE_NUMBER_LABELED: Regex = Regex::new(
        r"(?i)(?:invoice|inv|bill)\s*(?:no|number|#)?\s*:?\s*([A-Z0-9\-/]+)"
    ).unwrap();

    pub static ref INVOICE_NUMBER_UNLABELED: Regex = Regex::new(
        r"(?i)(?:invoice|inv|bill)\s+([A-Z0-9\-/]{3,})"
    ).unwrap();

    pub static ref INVOICE_NUMBER_HASH: Regex = Regex::new(
        r"(?i)#\s*([A-Z0-9\-/]+)"
    ).unwrap();

    // Invoice date patterns, tried in this order
    pub static ref DATE_LABELED: Regex = Regex::new(
        r"(?i)(?:date|dated)\s*:?\s*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\b"
    ).unwrap();

    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"\b(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\b"
    ).unwrap();

    pub static ref DATE_TEXTUAL: Regex = Regex::new(
        r"\b(\d{1,2}\s+[A-Za-z]+\s+\d{2,4})\b"
    ).unwrap();

    // Date shapes accepted by the normalizer
    pub static ref SHAPE_DMY_SLASH_LONG: Regex = Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").unwrap();
    pub static ref SHAPE_DMY_DASH_LONG: Regex = Regex::new(r"^\d{1,2}-\d{1,2}-\d{4}$").unwrap();
    pub static ref SHAPE_DMY_SLASH_SHORT: Regex = Regex::new(r"^\d{1,2}/\d{1,2}/\d{2}$").unwrap();
    pub static ref SHAPE_DMY_DASH_SHORT: Regex = Regex::new(r"^\d{1,2}-\d{1,2}-\d{2}$").unwrap();
    pub static ref SHAPE_YMD_DASH: Regex = Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").unwrap();

    // GSTIN: 2 digits, 5 letters, 4 digits, letter, entity code, 'Z', check character
    pub static ref GSTIN: Regex = Regex::new(
        r"(?i)(?:(?:gstin|gst)\s*:?\s*)?([0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z])"
    ).unwrap();

    // Total amount candidates (Indian format: 1,23,456.78 or 5900.00)
    pub static ref TOTAL_LABELED: Regex = Regex::new(
        r"(?i)(?:total|amount|sum)\s*:?\s*(?:rs\.?|₹)?\s*(\d+(?:,\d{3})*(?:\.\d{2})?)"
    ).unwrap();

    pub static ref TOTAL_CURRENCY_PREFIX: Regex = Regex::new(
        r"(?i)(?:rs\.?|₹)\s*(\d+(?:,\d{3})*(?:\.\d{2})?)"
    ).unwrap();

    pub static ref TOTAL_CURRENCY_SUFFIX: Regex = Regex::new(
        r"(?i)(\d+(?:,\d{3})*(?:\.\d{2})?)\s*(?:rs\.?|₹)"
    ).unwrap();

    // Vendor name filters
    pub static ref VENDOR_EXCLUDED: Regex = Regex::new(
        r"(?i)^\d|invoice|bill|date|\bgst(?:in)?\b"
    ).unwrap();

    pub static ref NUMERIC_PUNCTUATION_ONLY: Regex = Regex::new(
        r"^[\d\s\-/:.]+$"
    ).unwrap();

    // Line items
    pub static ref LINE_ITEM_CANDIDATE: Regex = Regex::new(
        r"[a-zA-Z].*\d"
    ).unwrap();

    pub static ref LINE_ITEM_AMOUNT: Regex = Regex::new(
        r"\d+(?:\.\d{2})?"
    ).unwrap();

    pub static ref LINE_ITEM_LABEL: Regex = Regex::new(
        r"(?i)^(?:invoice|inv|bill|date|dated|gstin|gst|cgst|sgst|igst|sub\s*total|grand\s*total|total)\b"
    ).unwrap();
}
