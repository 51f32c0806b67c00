//! GST category and rate prediction.

pub mod category;
mod predictor;
mod report;

pub use category::{categorize, update_tax_category, CATEGORY_PRIORITY, DEFAULT_CATEGORY};
pub use predictor::{apply_tax, predict_tax, TaxPredictor};
pub use report::generate_tax_report;
