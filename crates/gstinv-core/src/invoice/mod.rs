//! Invoice field extraction module.

pub mod line_items;
mod parser;
pub mod rules;

pub use line_items::{extract_line_items, parse_line_item, MAX_LINE_ITEMS};
pub use parser::{extract_fields, InvoiceFieldExtractor};
