//! Property Growth - value projection from suburb report capital growth rates
//!
//! This library provides:
//! - Extraction of `Jan <year> <rate>%` growth tokens from report text pages
//! - Year-by-year compounding of a purchase price over the extracted rates
//! - A calculator session that memoizes extraction per document
//! - Plain-text table/chart rendering and CSV export

pub mod error;
pub mod rates;
pub mod projection;
pub mod session;
pub mod report;

// Re-export commonly used types
pub use error::GrowthError;
pub use rates::{RateExtractor, RatePoint, RateSeries};
pub use projection::{GrowthProjector, ProjectionSeries, ValuePoint};
pub use session::{Outcome, Session};
