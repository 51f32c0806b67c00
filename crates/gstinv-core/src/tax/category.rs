//! Keyword-based GST categorization of line items.

use tracing::debug;

use crate::models::tax::TaxCategory;

pub const GOODS_KEYWORDS: &[&str] = &[
    "product", "item", "goods", "material", "equipment", "hardware",
    "supplies", "parts", "components", "tools", "machinery", "device",
    "book", "stationery", "food", "medicine", "clothes", "fabric",
];

pub const SERVICES_KEYWORDS: &[&str] = &[
    "service", "consultation", "support", "maintenance", "repair",
    "installation", "training", "development", "design", "management",
    "hosting", "software", "license", "subscription", "professional",
];

pub const EXEMPT_KEYWORDS: &[&str] = &[
    "education", "healthcare", "medicine", "hospital", "school",
    "book", "newspaper", "milk", "bread", "rice", "wheat", "grain",
];

pub const LUXURY_KEYWORDS: &[&str] = &[
    "luxury", "premium", "car", "automobile", "tobacco", "cigarette",
    "alcohol", "wine", "jewellery", "gold", "diamond", "cosmetic",
];

pub const ESSENTIAL_KEYWORDS: &[&str] = &[
    "food", "grain", "vegetable", "fruit", "milk", "oil", "sugar",
    "salt", "medicine", "drug", "vaccine", "medical",
];

/// Keyword sets in match priority order. Earlier sets win.
pub const CATEGORY_PRIORITY: [(TaxCategory, &[&str]); 5] = [
    (TaxCategory::Exempt, EXEMPT_KEYWORDS),
    (TaxCategory::Luxury, LUXURY_KEYWORDS),
    (TaxCategory::Essential, ESSENTIAL_KEYWORDS),
    (TaxCategory::Services, SERVICES_KEYWORDS),
    (TaxCategory::Goods, GOODS_KEYWORDS),
];

/// Category used when no keyword matches.
pub const DEFAULT_CATEGORY: TaxCategory = TaxCategory::Goods;

/// Categorize an item from its description.
///
/// Keywords are matched as case-insensitive substrings.
pub fn categorize(description: &str) -> TaxCategory {
    let description = description.to_lowercase();

    CATEGORY_PRIORITY
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| description.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Record a manual category correction for an item.
///
/// Corrections are not stored; returns whether `new_category` is exactly
/// one of the lower-case category names.
pub fn update_tax_category(item_description: &str, new_category: &str) -> bool {
    match new_category.parse::<TaxCategory>() {
        Ok(category) => {
            debug!("Category correction for '{}': {}", item_description, category);
            true
        }
        Err(_) => false,
    }
}
