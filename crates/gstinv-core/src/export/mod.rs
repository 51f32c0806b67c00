//! JSON and CSV exports of processed invoices.

pub mod csv_report;
pub mod json;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::config::ExportConfig;
use crate::models::invoice::ProcessedInvoice;

pub use csv_report::to_csv_export;
pub use json::to_json_export;

/// File format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Render an export in the given format.
pub fn render_export(
    invoice: &ProcessedInvoice,
    format: ExportFormat,
    config: &ExportConfig,
    generated_at: NaiveDateTime,
) -> Result<String> {
    match format {
        ExportFormat::Json => to_json_export(invoice, config, generated_at),
        ExportFormat::Csv => to_csv_export(invoice),
    }
}

/// File name for an export generated at `generated_at`.
pub fn export_file_name(format: ExportFormat, generated_at: NaiveDateTime) -> String {
    format!(
        "invoice_export_{}.{}",
        generated_at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Write a timestamped export into `dir`, creating it if needed.
pub fn write_export_to(
    dir: &Path,
    invoice: &ProcessedInvoice,
    format: ExportFormat,
    config: &ExportConfig,
    generated_at: NaiveDateTime,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(export_file_name(format, generated_at));
    let content = render_export(invoice, format, config, generated_at)?;
    fs::write(&path, content)?;

    info!("Wrote {} export to {}", format.extension(), path.display());
    Ok(path)
}

/// Write an export into the configured exports directory, stamped with
/// the current local time.
pub fn write_export(
    invoice: &ProcessedInvoice,
    format: ExportFormat,
    config: &ExportConfig,
) -> Result<PathBuf> {
    write_export_to(
        &config.export_dir,
        invoice,
        format,
        config,
        Local::now().naive_local(),
    )
}

/// Delete export files in `dir` last modified more than `days_old` days
/// before `now`. Returns how many files were removed.
///
/// A missing directory removes nothing. Subdirectories are left alone.
pub fn cleanup_exports_in(dir: &Path, days_old: u64, now: SystemTime) -> Result<usize> {
    if !dir.exists() {
        debug!("Export directory {} does not exist", dir.display());
        return Ok(0);
    }

    let age = Duration::from_secs(days_old.saturating_mul(24 * 60 * 60));
    let Some(cutoff) = now.checked_sub(age) else {
        return Ok(0);
    };

    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if !metadata.is_file() || metadata.modified()? >= cutoff {
            continue;
        }

        fs::remove_file(entry.path())?;
        info!("Cleaned up old export: {}", entry.file_name().to_string_lossy());
        removed += 1;
    }

    Ok(removed)
}

/// Delete exports in the configured exports directory older than `days_old` days.
pub fn cleanup_old_exports(config: &ExportConfig, days_old: u64) -> Result<usize> {
    cleanup_exports_in(&config.export_dir, days_old, SystemTime::now())
}
