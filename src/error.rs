//! Error type shared by the extraction, loading and export layers

use std::path::PathBuf;

/// Errors raised by the property growth library
#[derive(Debug, thiserror::Error)]
pub enum GrowthError {
    /// The document produced no rate tokens at all
    #[error("no growth rates found in the document")]
    NoDataFound,

    /// Month token used to build the rate pattern is not a plain word
    #[error("invalid month token: {0:?}")]
    InvalidMonth(String),

    #[error("failed to compile rate pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A page directory contained no `*.txt` files
    #[error("no text pages found in {}", .0.display())]
    NoPages(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, GrowthError>;
