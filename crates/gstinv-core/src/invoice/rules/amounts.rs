//! Total amount extraction.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use super::patterns::{TOTAL_CURRENCY_PREFIX, TOTAL_CURRENCY_SUFFIX, TOTAL_LABELED};

/// Parse an amount with optional thousands separators (e.g. "1,234.56").
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned).ok()
}

/// Collect every amount that appears in a currency context.
///
/// Candidates from the labeled, currency-prefixed and currency-suffixed
/// patterns are returned in that order, duplicates included.
pub fn extract_total_candidates(text: &str) -> Vec<Decimal> {
    [&*TOTAL_LABELED, &*TOTAL_CURRENCY_PREFIX, &*TOTAL_CURRENCY_SUFFIX]
        .into_iter()
        .flat_map(|pattern| pattern.captures_iter(text))
        .filter_map(|caps| parse_amount(&caps[1]))
        .collect()
}

/// Pick the invoice total: the largest candidate within `[min, max]`.
///
/// Returns zero when no candidate is in range.
pub fn extract_total_amount(text: &str, min: Decimal, max: Decimal) -> Decimal {
    let candidates: Vec<Decimal> = extract_total_candidates(text)
        .into_iter()
        .filter(|amount| *amount >= min && *amount <= max)
        .collect();

    debug!("Found {} plausible total candidates", candidates.len());

    candidates.into_iter().max().unwrap_or(Decimal::ZERO)
}
