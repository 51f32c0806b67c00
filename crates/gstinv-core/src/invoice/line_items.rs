//! Line item extraction.
//!
//! Each line is examined on its own: the first number on a line that has a
//! letter before it becomes the amount, and the text before that number the
//! description. There is no column or multi-line handling.

use rust_decimal::Decimal;

use crate::models::invoice::LineItem;

use super::rules::parse_amount;
use super::rules::patterns::{LINE_ITEM_AMOUNT, LINE_ITEM_CANDIDATE, LINE_ITEM_LABEL};

/// Default cap on extracted items.
pub const MAX_LINE_ITEMS: usize = 20;

/// Largest amount accepted for a single item (10^15).
///
/// Keeps per-item tax and invoice sums inside `Decimal` range.
pub const MAX_LINE_ITEM_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Parse a single line into a line item.
pub fn parse_line_item(line: &str) -> Option<LineItem> {
    if !LINE_ITEM_CANDIDATE.is_match(line) {
        return None;
    }

    let number = LINE_ITEM_AMOUNT.find(line)?;
    let amount = parse_amount(number.as_str())?;
    let description = line[..number.start()].trim();

    if description.is_empty() || amount <= Decimal::ZERO || amount > MAX_LINE_ITEM_AMOUNT {
        return None;
    }

    // Lines opening with a header or total label
    if LINE_ITEM_LABEL.is_match(description) {
        return None;
    }

    Some(LineItem {
        description: description.to_string(),
        amount,
        line_text: line.trim().to_string(),
    })
}

/// Extract up to `limit` line items in source order.
pub fn extract_line_items_limited(text: &str, limit: usize) -> Vec<LineItem> {
    text.split('\n')
        .filter_map(parse_line_item)
        .take(limit)
        .collect()
}

/// Extract up to [`MAX_LINE_ITEMS`] line items in source order.
pub fn extract_line_items(text: &str) -> Vec<LineItem> {
    extract_line_items_limited(text, MAX_LINE_ITEMS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_parse_line_item() {
        let item = parse_line_item("  Consulting Service 5000.00  ").unwrap();
        assert_eq!(item.description, "Consulting Service");
        assert_eq!(item.amount, Decimal::from_str("5000.00").unwrap());
        assert_eq!(item.line_text, "Consulting Service 5000.00");
    }

    #[test]
    fn test_first_number_is_the_amount() {
        let item = parse_line_item("Printer paper 2 x 250.00").unwrap();
        assert_eq!(item.description, "Printer paper");
        assert_eq!(item.amount, Decimal::from(2));
    }

    #[test]
    fn test_rejected_lines() {
        // no letter before a number
        assert_eq!(parse_line_item("5000.00 Consulting"), None);
        assert_eq!(parse_line_item("Acme Corp"), None);
        // zero amount
        assert_eq!(parse_line_item("Free sample 0.00"), None);
        // empty description
        assert_eq!(parse_line_item("12 pcs 5.00"), None);
    }

    #[test]
    fn test_amount_ceiling() {
        assert_eq!(MAX_LINE_ITEM_AMOUNT, Decimal::from(1_000_000_000_000_000u64));
        assert!(parse_line_item("Turbine 1000000000000000.00").is_some());
        assert_eq!(parse_line_item("Turbine 1000000000000001"), None);
        assert_eq!(parse_line_item("Widget 10000000000000000000000000000"), None);
    }

    #[test]
    fn test_label_lines_are_not_items() {
        assert_eq!(parse_line_item("Invoice No: INV-001"), None);
        assert_eq!(parse_line_item("Date: 15/03/2024"), None);
        assert_eq!(parse_line_item("GSTIN: 29ABCDE1234F1Z5"), None);
        assert_eq!(parse_line_item("Total: Rs. 5900.00"), None);
        assert_eq!(parse_line_item("CGST @ 9% 450.00"), None);
        assert_eq!(parse_line_item("Subtotal 5000.00"), None);
        assert_eq!(parse_line_item("Grand Total 5900.00"), None);
        assert!(parse_line_item("Taxi service 450.00").is_some());
    }

    #[test]
    fn test_label_words_inside_descriptions_are_kept() {
        let text = "Tax audit service 5000.00\nAmount adjustment fee 200.00\nSum insured rider 300.00";
        let descriptions: Vec<String> = extract_line_items(text)
            .into_iter()
            .map(|item| item.description)
            .collect();
        assert_eq!(
            descriptions,
            vec!["Tax audit service", "Amount adjustment fee", "Sum insured rider"]
        );
        assert!(parse_line_item("Balance sheet review 1200.00").is_some());
    }

    #[test]
    fn test_source_order_and_cap() {
        let text: String = (1..=30)
            .map(|i| format!("Widget batch {}.00\n", i))
            .collect();

        let items = extract_line_items(&text);
        assert_eq!(items.len(), 20);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.amount, Decimal::from(i as i64 + 1));
            assert_eq!(item.description, "Widget batch");
        }
    }

    #[test]
    fn test_custom_limit() {
        let text = "Bolts 10.00\nNuts 20.00\nWashers 30.00";
        assert_eq!(extract_line_items_limited(text, 2).len(), 2);
        assert!(extract_line_items("").is_empty());
    }
}
