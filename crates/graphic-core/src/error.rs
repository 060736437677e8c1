// File: crates/graphic-core/src/error.rs
// Summary: Error taxonomy for data loading, formatting, and render preconditions.

use thiserror::Error;

/// Everything surfaces through this one channel; no variant is retried or
/// recovered internally.
#[derive(Debug, Error)]
pub enum GraphicError {
    /// CSV resource could not be read or parsed.
    #[error("failed to load data: {0}")]
    Load(#[from] csv::Error),

    /// IO failure opening the data file.
    #[error("failed to open data file: {0}")]
    Io(#[from] std::io::Error),

    /// Required column absent from the CSV header row.
    #[error("missing required column {name:?}")]
    MissingColumn { name: &'static str },

    /// A count cell failed numeric coercion. Halts formatting before the
    /// first render.
    #[error("row {row}: count {value:?} is not a finite number")]
    Format { row: usize, value: String },

    /// Rendering an empty dataset is a precondition violation.
    #[error("dataset is empty")]
    EmptyDataset,

    /// Container width must be a positive, finite pixel measure.
    #[error("container width {width} is not a positive pixel size")]
    InvalidWidth { width: f64 },
}

pub type Result<T> = std::result::Result<T, GraphicError>;
