//! Configuration structures for the extraction pipeline.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration for the gstinv pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GstConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Tax prediction configuration.
    pub tax: TaxConfig,

    /// Export configuration.
    pub export: ExportConfig,
}

/// Invoice field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum number of line items kept per invoice.
    pub max_line_items: usize,

    /// Number of leading lines searched for the vendor name.
    pub vendor_scan_lines: usize,

    /// Smallest amount accepted as a total candidate.
    pub min_amount: Decimal,

    /// Largest amount accepted as a total candidate.
    pub max_amount: Decimal,

    /// Minimum OCR text length (characters) worth extracting from.
    pub min_text_length: usize,

    /// Trim lines and drop blank ones before extraction.
    pub normalize_text: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_line_items: 20,
            vendor_scan_lines: 10,
            min_amount: Decimal::from(10),
            max_amount: Decimal::from(1_000_000),
            min_text_length: 10,
            normalize_text: true,
        }
    }
}

/// Tax prediction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxConfig {
    /// Relative tolerance for matching predicted and extracted totals.
    pub match_tolerance: Decimal,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            match_tolerance: Decimal::new(10, 2),
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory timestamped exports are written to.
    pub export_dir: PathBuf,

    /// Tool name recorded in JSON exports.
    pub tool_name: String,

    /// Tool version recorded in JSON exports.
    pub tool_version: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("exports"),
            tool_name: "Invoice Digitization & Tax Prediction Tool".to_string(),
            tool_version: "1.0".to_string(),
        }
    }
}

impl GstConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = GstConfig::default();
        assert_eq!(config.extraction.max_line_items, 20);
        assert_eq!(config.extraction.vendor_scan_lines, 10);
        assert_eq!(config.tax.match_tolerance, Decimal::new(1, 1));
        assert_eq!(config.export.export_dir, PathBuf::from("exports"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: GstConfig =
            serde_json::from_str(r#"{"extraction": {"max_line_items": 5}}"#).unwrap();
        assert_eq!(config.extraction.max_line_items, 5);
        assert_eq!(config.extraction.vendor_scan_lines, 10);
        assert_eq!(config.tax.match_tolerance, Decimal::new(10, 2));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = GstConfig::default();
        config.extraction.vendor_scan_lines = 4;
        config.save(&path).unwrap();

        let loaded = GstConfig::from_file(&path).unwrap();
        assert_eq!(loaded.extraction.vendor_scan_lines, 4);
    }
}
