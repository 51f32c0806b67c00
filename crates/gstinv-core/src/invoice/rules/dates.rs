//! Date extraction and normalization.

use chrono::NaiveDate;
use regex::Regex;

use super::patterns::{
    DATE_LABELED, DATE_NUMERIC, DATE_TEXTUAL, SHAPE_DMY_DASH_LONG, SHAPE_DMY_DASH_SHORT,
    SHAPE_DMY_SLASH_LONG, SHAPE_DMY_SLASH_SHORT, SHAPE_YMD_DASH,
};
use super::{first_capture, PatternRule, RuleMatch};

/// Canonical output format.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// An input layout the normalizer understands.
struct DateFormat {
    shape: &'static Regex,
    format: &'static str,
}

/// Input layouts in the order they are tried.
fn date_formats() -> [DateFormat; 5] {
    [
        DateFormat { shape: &SHAPE_DMY_SLASH_LONG, format: "%d/%m/%Y" },
        DateFormat { shape: &SHAPE_DMY_DASH_LONG, format: "%d-%m-%Y" },
        DateFormat { shape: &SHAPE_DMY_SLASH_SHORT, format: "%d/%m/%y" },
        DateFormat { shape: &SHAPE_DMY_DASH_SHORT, format: "%d-%m-%y" },
        DateFormat { shape: &SHAPE_YMD_DASH, format: CANONICAL_FORMAT },
    ]
}

/// Parse a date in any supported layout.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    date_formats()
        .iter()
        .filter(|f| f.shape.is_match(text))
        .find_map(|f| NaiveDate::parse_from_str(text, f.format).ok())
}

/// Convert a date string to `YYYY-MM-DD`.
///
/// Text that matches no supported layout is returned unchanged, so callers
/// cannot assume the result is canonical.
pub fn normalize_date(text: &str) -> String {
    match parse_date(text) {
        Some(date) => date.format(CANONICAL_FORMAT).to_string(),
        None => text.to_string(),
    }
}

/// Date strategies in the order they are tried.
fn date_rules() -> [PatternRule; 3] {
    [
        PatternRule::new("labeled_date", &DATE_LABELED),
        PatternRule::new("numeric_date", &DATE_NUMERIC),
        PatternRule::new("textual_date", &DATE_TEXTUAL),
    ]
}

/// Find the invoice date in text and normalize it.
pub fn extract_date(text: &str) -> RuleMatch<String> {
    first_capture(&date_rules(), text).map(|raw| normalize_date(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_supported_layouts() {
        assert_eq!(normalize_date("15/03/2024"), "2024-03-15");
        assert_eq!(normalize_date("15-03-2024"), "2024-03-15");
        assert_eq!(normalize_date("15/03/24"), "2024-03-15");
        assert_eq!(normalize_date("15-03-24"), "2024-03-15");
        assert_eq!(normalize_date("5/3/2024"), "2024-03-05");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        assert_eq!(normalize_date("2024-03-15"), "2024-03-15");
        assert_eq!(normalize_date(&normalize_date("01/12/2023")), "2023-12-01");
    }

    #[test]
    fn test_unparseable_date_is_returned_unchanged() {
        assert_eq!(normalize_date("15 March 2024"), "15 March 2024");
        assert_eq!(normalize_date("32/01/2024"), "32/01/2024");
        assert_eq!(normalize_date("15.03.2024"), "15.03.2024");
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn test_extract_labeled_date_first() {
        let text = "Due 01/04/2024\nDate: 15/03/2024";
        assert_eq!(extract_date(text), RuleMatch::Found("2024-03-15".to_string()));
    }

    #[test]
    fn test_extract_bare_and_textual_dates() {
        assert_eq!(
            extract_date("Issued on 7-1-24 at noon"),
            RuleMatch::Found("2024-01-07".to_string())
        );
        assert_eq!(
            extract_date("Acme Corp\n15 March 2024"),
            RuleMatch::Found("15 March 2024".to_string())
        );
        assert_eq!(extract_date("no date here"), RuleMatch::NotFound);
    }
}
