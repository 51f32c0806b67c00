//! JSON export envelope.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::Result;
use crate::models::config::ExportConfig;
use crate::models::invoice::ProcessedInvoice;

/// Metadata describing an export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportInfo<'a> {
    pub generated_at: String,
    pub tool: &'a str,
    pub version: &'a str,
}

/// Top-level JSON export document.
#[derive(Debug, Clone, Serialize)]
pub struct JsonExport<'a> {
    pub export_info: ExportInfo<'a>,
    pub invoice_data: &'a ProcessedInvoice,
}

/// Render a processed invoice as a pretty-printed JSON export.
pub fn to_json_export(
    invoice: &ProcessedInvoice,
    config: &ExportConfig,
    generated_at: NaiveDateTime,
) -> Result<String> {
    let export = JsonExport {
        export_info: ExportInfo {
            generated_at: generated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            tool: &config.tool_name,
            version: &config.tool_version,
        },
        invoice_data: invoice,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::sample_invoice;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_export_envelope() {
        let generated_at = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let json = to_json_export(&sample_invoice(), &ExportConfig::default(), generated_at).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["export_info"]["generated_at"], "2024-03-15T10:30:00");
        assert_eq!(value["export_info"]["version"], "1.0");
        assert_eq!(value["invoice_data"]["filename"], "sample.txt");
        assert_eq!(value["invoice_data"]["invoice_data"]["invoice_number"], "INV-001");
        assert_eq!(
            value["invoice_data"]["tax_data"]["line_items_with_tax"][0]["category"],
            "services"
        );
        assert_eq!(
            value["invoice_data"]["tax_data"]["validation"]["match_threshold"],
            true
        );
    }
}
