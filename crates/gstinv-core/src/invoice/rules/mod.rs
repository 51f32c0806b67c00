//! Rule-based field extractors for GST invoices.

pub mod amounts;
pub mod dates;
pub mod patterns;

pub use amounts::{extract_total_amount, extract_total_candidates, parse_amount};
pub use dates::{extract_date, normalize_date};

use regex::Regex;
use tracing::debug;

/// Outcome of a single extraction strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleMatch<T> {
    Found(T),
    NotFound,
}

impl<T> RuleMatch<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, RuleMatch::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            RuleMatch::Found(value) => Some(value),
            RuleMatch::NotFound => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RuleMatch<U> {
        match self {
            RuleMatch::Found(value) => RuleMatch::Found(f(value)),
            RuleMatch::NotFound => RuleMatch::NotFound,
        }
    }
}

impl<T> From<Option<T>> for RuleMatch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(RuleMatch::NotFound, RuleMatch::Found)
    }
}

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> RuleMatch<Self::Output>;
}

/// A named regex whose first capture group is the field value.
#[derive(Clone, Copy)]
pub struct PatternRule {
    pub name: &'static str,
    pub pattern: &'static Regex,
}

impl PatternRule {
    pub const fn new(name: &'static str, pattern: &'static Regex) -> Self {
        Self { name, pattern }
    }
}

impl FieldExtractor for PatternRule {
    type Output = String;

    fn extract(&self, text: &str) -> RuleMatch<String> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .into()
    }
}

/// Evaluate rules in order and return the first match.
///
/// Later rules are not evaluated once one has matched.
pub fn first_capture(rules: &[PatternRule], text: &str) -> RuleMatch<String> {
    for rule in rules {
        if let RuleMatch::Found(value) = rule.extract(text) {
            debug!("Rule '{}' matched '{}'", rule.name, value);
            return RuleMatch::Found(value);
        }
    }
    RuleMatch::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;

    lazy_static! {
        static ref DIGITS: Regex = Regex::new(r"(\d+)").unwrap();
        static ref WORD: Regex = Regex::new(r"([a-z]+)").unwrap();
    }

    #[test]
    fn test_pattern_rule_trims_capture() {
        let rule = PatternRule::new("digits", &DIGITS);
        assert_eq!(rule.extract("abc 42"), RuleMatch::Found("42".to_string()));
        assert_eq!(rule.extract("abc"), RuleMatch::NotFound);
    }

    #[test]
    fn test_first_capture_respects_order() {
        let rules = [PatternRule::new("digits", &DIGITS), PatternRule::new("word", &WORD)];
        assert_eq!(first_capture(&rules, "abc 42"), RuleMatch::Found("42".to_string()));
        assert_eq!(first_capture(&rules, "abc"), RuleMatch::Found("abc".to_string()));
        assert_eq!(first_capture(&rules, "!!"), RuleMatch::NotFound);
    }

    #[test]
    fn test_rule_match_conversions() {
        let found: RuleMatch<u32> = Some(3).into();
        assert!(found.is_found());
        assert_eq!(found.map(|v| v * 2).into_option(), Some(6));
        assert_eq!(RuleMatch::<u32>::from(None).into_option(), None);
    }
}
