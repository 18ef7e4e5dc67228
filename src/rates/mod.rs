//! Growth rate extraction from report text and page loading

mod digits;
mod series;
mod extractor;
pub mod loader;

pub use series::{RatePoint, RateSeries};
pub use extractor::{extract, ExtractorConfig, RateExtractor, DEFAULT_MONTH};
pub use loader::{load_pages, load_pages_from_reader, split_pages};
