//! Human-readable tax report.

use crate::models::tax::TaxPrediction;

/// Render a tax prediction as a plain-text report.
pub fn generate_tax_report(prediction: &TaxPrediction) -> String {
    let summary = &prediction.tax_summary;
    let mut output = String::new();

    output.push_str("=== TAX PREDICTION REPORT ===\n\n");
    output.push_str(&format!("Total Taxable Amount: ₹{:.2}\n", summary.total_taxable_amount));
    output.push_str(&format!("Total Tax Amount: ₹{:.2}\n", summary.total_tax_amount));
    output.push_str(&format!("CGST: ₹{:.2}\n", summary.tax_breakdown.cgst));
    output.push_str(&format!("SGST: ₹{:.2}\n", summary.tax_breakdown.sgst));
    output.push_str(&format!("Predicted Total: ₹{:.2}\n", prediction.predicted_total));
    output.push('\n');

    output.push_str("=== LINE ITEMS BREAKDOWN ===\n");
    for (i, item) in prediction.line_items_with_tax.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, item.description));
        output.push_str(&format!(
            "   Amount: ₹{:.2} | Category: {}\n",
            item.amount, item.category
        ));
        output.push_str(&format!(
            "   Tax Rate: {}% | Tax: ₹{:.2}\n",
            item.tax_rate, item.tax_amount
        ));
        output.push_str(&format!("   Total: ₹{:.2}\n", item.total_with_tax));
        output.push('\n');
    }

    if let Some(validation) = &prediction.validation {
        output.push_str("=== VALIDATION ===\n");
        output.push_str(&format!("Extracted Total: ₹{:.2}\n", validation.extracted_total));
        output.push_str(&format!("Predicted Total: ₹{:.2}\n", validation.predicted_total));
        output.push_str(&format!("Difference: ₹{:.2}\n", validation.difference));
        output.push_str(&format!(
            "Match: {}\n",
            if validation.match_threshold { "✓" } else { "✗" }
        ));
    }

    output.truncate(output.trim_end().len());
    output
}
