//! GST categories and tax prediction results.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::GstError;

/// GST category of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxCategory {
    /// Most goods: 12%
    Goods,
    /// Most services: 18%
    Services,
    /// Exempt supplies: 0%
    Exempt,
    /// Luxury and sin goods: 28%
    Luxury,
    /// Essential goods: 5%
    Essential,
}

impl TaxCategory {
    /// All categories, in declaration order.
    pub const ALL: [TaxCategory; 5] = [
        TaxCategory::Goods,
        TaxCategory::Services,
        TaxCategory::Exempt,
        TaxCategory::Luxury,
        TaxCategory::Essential,
    ];

    /// GST rate as a percentage (e.g. 18 for 18%).
    pub fn rate(&self) -> Decimal {
        match self {
            TaxCategory::Goods => Decimal::from(12),
            TaxCategory::Services => Decimal::from(18),
            TaxCategory::Exempt => Decimal::ZERO,
            TaxCategory::Luxury => Decimal::from(28),
            TaxCategory::Essential => Decimal::from(5),
        }
    }

    /// Lower-case category name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxCategory::Goods => "goods",
            TaxCategory::Services => "services",
            TaxCategory::Exempt => "exempt",
            TaxCategory::Luxury => "luxury",
            TaxCategory::Essential => "essential",
        }
    }
}

impl FromStr for TaxCategory {
    type Err = GstError;

    /// Names must match `as_str()` exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| GstError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for TaxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line item annotated with its predicted tax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxedLineItem {
    pub description: String,
    pub amount: Decimal,
    pub category: TaxCategory,
    /// Rate as a percentage.
    pub tax_rate: Decimal,
    pub tax_amount: Decimal,
    pub total_with_tax: Decimal,
    /// Source line of the item.
    pub original_line: String,
}

/// Split of the total tax into its GST components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Central GST.
    pub cgst: Decimal,
    /// State GST.
    pub sgst: Decimal,
    /// Integrated GST, always zero for intra-state supplies.
    pub igst: Decimal,
}

/// Aggregated taxable and tax amounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxSummary {
    pub total_taxable_amount: Decimal,
    pub total_tax_amount: Decimal,
    pub tax_breakdown: TaxBreakdown,
}

/// Comparison of the predicted total with the total found on the invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reconciliation {
    pub extracted_total: Decimal,
    pub predicted_total: Decimal,
    /// Absolute difference, rounded to 2 decimal places.
    pub difference: Decimal,
    /// True when the difference is within tolerance of the extracted total.
    pub match_threshold: bool,
}

/// Tax prediction for a whole invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxPrediction {
    pub line_items_with_tax: Vec<TaxedLineItem>,
    pub tax_summary: TaxSummary,
    pub predicted_total: Decimal,
    /// Present only when the invoice carried a non-zero total.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Reconciliation>,
}
