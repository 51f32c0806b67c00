//! Error types for the gstinv-core library.
//!
//! Extraction and tax prediction never fail; these errors cover the
//! edges around them (configuration, exports, input gating).

use thiserror::Error;

/// Main error type for the gstinv library.
#[derive(Error, Debug)]
pub enum GstError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Category name that is not one of the known lower-case names.
    #[error("unknown tax category: {0}")]
    UnknownCategory(String),

    /// The OCR text is too short to be worth extracting from.
    #[error("insufficient text: {len} characters, need at least {min}")]
    InsufficientText { len: usize, min: usize },
}

/// Result type for the gstinv library.
pub type Result<T> = std::result::Result<T, GstError>;
