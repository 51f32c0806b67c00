//! OCR text cleanup.

use crate::error::{GstError, Result};

/// Trim every line and drop blank ones.
pub fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reject text that is too short to hold an invoice.
///
/// Length is measured in characters of the trimmed text.
pub fn ensure_min_length(text: &str, min: usize) -> Result<()> {
    let len = text.trim().chars().count();
    if len < min {
        return Err(GstError::InsufficientText { len, min });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_extracted_text() {
        let raw = "  Acme Corp  \n\n\t\nInvoice No: 12 \r\n   \nTotal: 100.00";
        assert_eq!(
            clean_extracted_text(raw),
            "Acme Corp\nInvoice No: 12\nTotal: 100.00"
        );
    }

    #[test]
    fn test_clean_empty() {
        assert_eq!(clean_extracted_text(""), "");
        assert_eq!(clean_extracted_text("\n \n"), "");
    }

    #[test]
    fn test_ensure_min_length() {
        assert!(ensure_min_length("Invoice 42 total", 10).is_ok());
        assert!(matches!(
            ensure_min_length("  short  ", 10),
            Err(GstError::InsufficientText { len: 5, min: 10 })
        ));
    }
}
