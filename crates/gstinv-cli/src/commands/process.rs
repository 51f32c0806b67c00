//! Process command - extract data from a single OCR text file.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use gstinv_core::export::{to_csv_export, write_export, ExportFormat};
use gstinv_core::{generate_tax_report, ProcessedInvoice};

use super::{load_config, process_text};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input text file (`-` reads stdin)
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Validate extracted data
    #[arg(long)]
    validate: bool,

    /// Also write a timestamped export into the exports directory
    #[arg(long)]
    save: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Sectioned CSV output
    Csv,
    /// Plain text summary
    Text,
    /// Tax prediction report
    Report,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text | OutputFormat::Report => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let (filename, text) = if args.input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        ("-".to_string(), text)
    } else {
        let path = PathBuf::from(&args.input);
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&args.input)
            .to_string();
        (filename, fs::read_to_string(&path)?)
    };

    info!("Processing {}", filename);
    let mut invoice = process_text(&filename, &text, &config)?;

    if args.validate {
        invoice.invoice_data = invoice.invoice_data.with_validation();
        let issues = invoice.invoice_data.validation_issues.as_deref().unwrap_or_default();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    let output = format_invoice(&invoice, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.save {
        let format = match args.format {
            OutputFormat::Csv => ExportFormat::Csv,
            _ => ExportFormat::Json,
        };
        let path = write_export(&invoice, format, &config.export)?;
        eprintln!("{} Export saved to {}", style("✓").green(), path.display());
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Render a processed invoice in the requested output format.
pub fn format_invoice(invoice: &ProcessedInvoice, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(invoice)?),
        OutputFormat::Csv => Ok(to_csv_export(invoice)?),
        OutputFormat::Text => Ok(format_text(invoice)),
        OutputFormat::Report => Ok(generate_tax_report(&invoice.tax_data)),
    }
}

fn format_text(invoice: &ProcessedInvoice) -> String {
    let record = &invoice.invoice_data;
    let tax = &invoice.tax_data;
    let mut output = String::new();

    output.push_str(&format!("Invoice: {}\n", record.invoice_number));
    output.push_str(&format!("Date: {}\n", record.invoice_date));
    output.push_str(&format!("Vendor: {}\n", record.vendor_name));
    output.push_str(&format!("GSTIN: {}\n", record.gstin));
    output.push('\n');

    output.push_str("Line items:\n");
    for (i, item) in tax.line_items_with_tax.iter().enumerate() {
        output.push_str(&format!(
            "  {}. {} - ₹{:.2} ({}, {}%)\n",
            i + 1,
            item.description,
            item.amount,
            item.category,
            item.tax_rate
        ));
    }
    output.push('\n');

    output.push_str("Summary:\n");
    output.push_str(&format!(
        "  Taxable:   ₹{:.2}\n",
        tax.tax_summary.total_taxable_amount
    ));
    output.push_str(&format!(
        "  Tax:       ₹{:.2}\n",
        tax.tax_summary.total_tax_amount
    ));
    output.push_str(&format!("  Predicted: ₹{:.2}\n", tax.predicted_total));
    output.push_str(&format!("  Extracted: ₹{:.2}\n", record.total_amount));

    if let Some(validation) = &tax.validation {
        let status = if validation.match_threshold {
            style("match").green()
        } else {
            style("mismatch").red()
        };
        output.push_str(&format!("\nTotals: {}\n", status));
    }

    output
}
