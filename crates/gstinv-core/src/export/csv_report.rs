//! Sectioned CSV export.

use csv::WriterBuilder;

use crate::error::{GstError, Result};
use crate::models::invoice::ProcessedInvoice;

fn or_na(value: &str) -> &str {
    if value.is_empty() { "N/A" } else { value }
}

/// Render a processed invoice as CSV with invoice summary, line item, tax
/// detail and tax summary sections.
pub fn to_csv_export(invoice: &ProcessedInvoice) -> Result<String> {
    let record = &invoice.invoice_data;
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(vec![]);

    wtr.write_record(["Invoice Summary", "", ""])?;
    wtr.write_record(["Invoice Number", or_na(&record.invoice_number), ""])?;
    wtr.write_record(["Invoice Date", or_na(&record.invoice_date), ""])?;
    wtr.write_record(["Vendor Name", or_na(&record.vendor_name), ""])?;
    wtr.write_record(["GSTIN", or_na(&record.gstin), ""])?;
    wtr.write_record(["Total Amount", format!("₹{:.2}", record.total_amount).as_str(), ""])?;
    wtr.write_record(["", "", ""])?;

    wtr.write_record(["Line Items", "", ""])?;
    wtr.write_record(["S.No", "Description", "Amount"])?;
    for (i, item) in record.line_items.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            item.description.clone(),
            format!("{:.2}", item.amount),
        ])?;
    }
    wtr.write_record(["", "", ""])?;

    wtr.write_record(["Tax Details", "", ""])?;
    wtr.write_record([
        "S.No",
        "Description",
        "Taxable Amount",
        "Category",
        "Tax Rate (%)",
        "Tax Amount",
        "Total with Tax",
    ])?;
    for (i, item) in invoice.tax_data.line_items_with_tax.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            item.description.clone(),
            format!("{:.2}", item.amount),
            item.category.to_string(),
            item.tax_rate.to_string(),
            format!("{:.2}", item.tax_amount),
            format!("{:.2}", item.total_with_tax),
        ])?;
    }
    wtr.write_record(["", "", ""])?;

    let tax = &invoice.tax_data;
    let summary = &tax.tax_summary;
    wtr.write_record(["Tax Summary", "", ""])?;
    for (label, value) in [
        ("Total Taxable Amount", summary.total_taxable_amount),
        ("CGST", summary.tax_breakdown.cgst),
        ("SGST", summary.tax_breakdown.sgst),
        ("IGST", summary.tax_breakdown.igst),
        ("Total Tax", summary.total_tax_amount),
        ("Grand Total", tax.predicted_total),
    ] {
        wtr.write_record([label, format!("₹{:.2}", value).as_str(), ""])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| GstError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| GstError::Config(format!("invalid UTF-8 in CSV: {}", e)))
}
