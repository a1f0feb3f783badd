/// Error types for the agrofood emissions crates
use crate::column::Column;
use thiserror::Error;

/// Main error type for dataset and chart operations
#[derive(Error, Debug)]
pub enum AgroError {
    /// A column needed by the loader or a chart is absent from the header
    #[error("missing required column: {column}")]
    MissingColumn { column: Column },

    /// Failed to parse CSV data
    #[error("failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Failed to read the dataset
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Region not present in the table
    #[error("region not found: {0}")]
    UnknownRegion(String),

    /// Selector option index past the last region
    #[error("selector option {index} out of range ({len} regions)")]
    SelectionOutOfRange { index: usize, len: usize },

    /// Theme name did not match any chart
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

/// Type alias for Results using AgroError
pub type Result<T> = std::result::Result<T, AgroError>;
