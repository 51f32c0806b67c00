//! CLI command implementations.

pub mod batch;
pub mod category;
pub mod config;
pub mod exports;
pub mod process;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use gstinv_core::models::config::GstConfig;
use gstinv_core::text::ensure_min_length;
use gstinv_core::{clean_extracted_text, InvoiceFieldExtractor, ProcessedInvoice, TaxPredictor};

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gstinv")
        .join("config.json")
}

/// Load the configuration from `config_path`, or from the default location
/// when it exists.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<GstConfig> {
    if let Some(path) = config_path {
        return Ok(GstConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if !default_path.exists() {
        return Ok(GstConfig::default());
    }

    match GstConfig::from_file(&default_path) {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!(
                "Ignoring unreadable config at {}: {}",
                default_path.display(),
                e
            );
            Ok(GstConfig::default())
        }
    }
}

/// Run extraction and tax prediction over one OCR text.
pub fn process_text(
    filename: &str,
    text: &str,
    config: &GstConfig,
) -> anyhow::Result<ProcessedInvoice> {
    let text = if config.extraction.normalize_text {
        clean_extracted_text(text)
    } else {
        text.to_string()
    };

    ensure_min_length(&text, config.extraction.min_text_length)?;
    debug!("Processing {} ({} characters)", filename, text.len());

    let invoice_data = InvoiceFieldExtractor::from_config(&config.extraction).extract(&text);
    let tax_data = TaxPredictor::from_config(&config.tax).predict(&invoice_data);

    Ok(ProcessedInvoice {
        filename: filename.to_string(),
        raw_text: text,
        invoice_data,
        tax_data,
    })
}
