//! Batch processing command for multiple OCR text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use gstinv_core::models::config::GstConfig;
use gstinv_core::ProcessedInvoice;

use super::process::{format_invoice, OutputFormat};
use super::{load_config, process_text};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching OCR text files
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    invoice: Option<ProcessedInvoice>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = Arc::new(load_config(config_path)?);

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("txt")
        })
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let semaphore = Arc::new(Semaphore::new(args.jobs.max(1)));
    let mut tasks = JoinSet::new();

    for (index, path) in files.iter().cloned().enumerate() {
        let semaphore = Arc::clone(&semaphore);
        let config = Arc::clone(&config);

        tasks.spawn(async move {
            let _permit = semaphore.acquire_owned().await?;
            let file_start = Instant::now();

            let worker_path = path.clone();
            let result =
                tokio::task::spawn_blocking(move || process_file(&worker_path, &config)).await?;

            let processing_time_ms = file_start.elapsed().as_millis() as u64;
            anyhow::Ok((index, path, result, processing_time_ms))
        });
    }

    let mut slots: Vec<Option<ProcessResult>> = (0..files.len()).map(|_| None).collect();

    while let Some(joined) = tasks.join_next().await {
        let (index, path, result, processing_time_ms) = joined??;

        match result {
            Ok(invoice) => {
                slots[index] = Some(ProcessResult {
                    path,
                    invoice: Some(invoice),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    slots[index] = Some(ProcessResult {
                        path,
                        invoice: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed for {}: {}", path.display(), error_msg);
                }
            }
        }

        overall_pb.inc(1);
    }

    overall_pb.finish_and_clear();

    let results: Vec<ProcessResult> = slots.into_iter().flatten().collect();
    let successful: Vec<_> = results.iter().filter(|r| r.invoice.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        for result in &successful {
            if let Some(invoice) = &result.invoice {
                let output_name = result
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("invoice");

                let output_path =
                    output_dir.join(format!("{}.{}", output_name, args.format.extension()));
                fs::write(&output_path, format_invoice(invoice, args.format)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    print_outcome(&successful, &failed, start);

    Ok(())
}

fn print_outcome(successful: &[&ProcessResult], failed: &[&ProcessResult], start: Instant) {
    println!();
    println!(
        "{} {} of {} files processed in {:.2?}",
        style("✓").green(),
        style(successful.len()).green(),
        successful.len() + failed.len(),
        start.elapsed()
    );

    if failed.is_empty() {
        return;
    }

    println!("{}", style(format!("{} failed:", failed.len())).red());
    for result in failed {
        println!(
            "  - {}: {}",
            result.path.display(),
            result.error.as_deref().unwrap_or("unknown error")
        );
    }
}

fn process_file(path: &Path, config: &GstConfig) -> anyhow::Result<ProcessedInvoice> {
    let text = fs::read_to_string(path)?;
    let filename = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("");
    process_text(filename, &text, config)
}

/// One row of the batch summary CSV.
#[derive(Serialize)]
struct SummaryRow<'a> {
    filename: &'a str,
    status: &'static str,
    invoice_number: &'a str,
    invoice_date: &'a str,
    vendor_name: &'a str,
    gstin: &'a str,
    extracted_total: String,
    predicted_total: String,
    #[serde(rename = "match")]
    matched: Option<bool>,
    processing_time_ms: u64,
    error: &'a str,
}

impl<'a> SummaryRow<'a> {
    fn from_result(result: &'a ProcessResult) -> Self {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        match &result.invoice {
            Some(invoice) => {
                let record = &invoice.invoice_data;
                Self {
                    filename,
                    status: "success",
                    invoice_number: &record.invoice_number,
                    invoice_date: &record.invoice_date,
                    vendor_name: &record.vendor_name,
                    gstin: &record.gstin,
                    extracted_total: format!("{:.2}", record.total_amount),
                    predicted_total: format!("{:.2}", invoice.tax_data.predicted_total),
                    matched: invoice.tax_data.validation.as_ref().map(|v| v.match_threshold),
                    processing_time_ms: result.processing_time_ms,
                    error: "",
                }
            }
            None => Self {
                filename,
                status: "error",
                invoice_number: "",
                invoice_date: "",
                vendor_name: "",
                gstin: "",
                extracted_total: String::new(),
                predicted_total: String::new(),
                matched: None,
                processing_time_ms: result.processing_time_ms,
                error: result.error.as_deref().unwrap_or(""),
            },
        }
    }
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for result in results {
        wtr.serialize(SummaryRow::from_result(result))?;
    }
    wtr.flush()?;
    Ok(())
}
