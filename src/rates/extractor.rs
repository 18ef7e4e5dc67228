//! Extraction of annual growth rates from free-form report text
//!
//! Suburb reports list capital growth as rows such as `Jan 2021   7.35%`.
//! The extractor scans each page for those tokens and turns them into a
//! year-ordered [`RateSeries`].

use log::{debug, warn};
use regex::Regex;

use super::digits::to_ascii_digits;
use super::series::{RatePoint, RateSeries};
use crate::error::{GrowthError, Result};

/// Month token that prefixes every annual rate row
pub const DEFAULT_MONTH: &str = "Jan";

/// Configuration for rate token matching
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Month word preceding the 4-digit year
    pub month: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            month: DEFAULT_MONTH.to_string(),
        }
    }
}

/// Scans text blocks for `<Month> <YYYY> <rate>%` tokens
#[derive(Debug, Clone)]
pub struct RateExtractor {
    pattern: Regex,
}

impl RateExtractor {
    /// Extractor for the default `Jan` rows
    pub fn new() -> Result<Self> {
        Self::with_config(&ExtractorConfig::default())
    }

    pub fn with_config(config: &ExtractorConfig) -> Result<Self> {
        let month = config.month.trim();
        if month.is_empty() || !month.chars().all(char::is_alphabetic) {
            return Err(GrowthError::InvalidMonth(config.month.clone()));
        }

        let pattern = Regex::new(&format!(
            r"{} (\d{{4}})\s+(-?\d+\.\d+)%",
            regex::escape(month)
        ))?;

        Ok(Self { pattern })
    }

    /// Extract every rate token from the blocks, sorted ascending by year
    ///
    /// Blocks are visited in order and each is scanned left to right for
    /// non-overlapping matches. An empty result means the document carries
    /// no usable data; it is not an error.
    pub fn extract<S: AsRef<str>>(&self, blocks: &[S]) -> RateSeries {
        let mut points = Vec::new();

        for (page, block) in blocks.iter().enumerate() {
            let before = points.len();
            for caps in self.pattern.captures_iter(block.as_ref()) {
                let (year_str, rate_str) = (&caps[1], &caps[2]);
                let year = to_ascii_digits(year_str).parse::<i32>();
                let pct = to_ascii_digits(rate_str).parse::<f64>();
                match (year, pct) {
                    (Ok(year), Ok(pct)) => points.push(RatePoint::new(year, pct / 100.0)),
                    _ => warn!(
                        "Skipping unconvertible rate token on page {}: {} {}%",
                        page + 1,
                        year_str,
                        rate_str
                    ),
                }
            }
            debug!("Page {}: {} rate tokens", page + 1, points.len() - before);
        }

        let series = RateSeries::from_points(points);

        let dups = series.duplicate_years();
        if !dups.is_empty() {
            warn!("Duplicate rate years kept as extracted: {:?}", dups);
        }

        series
    }
}

/// Extract rates using the default `Jan` pattern
pub fn extract<S: AsRef<str>>(blocks: &[S]) -> Result<RateSeries> {
    Ok(RateExtractor::new()?.extract(blocks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const REPORT_PAGE: &str = "\
Suburb Growth Report
Period      Growth
Jan 2019    4.10%
Jan 2020   -3.25%
Jan 2021    7.00%
Median price $812,000";

    #[test]
    fn test_extracts_every_token() {
        let series = extract(&[REPORT_PAGE]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.years(), vec![2019, 2020, 2021]);
    }

    #[test]
    fn test_percent_conversion() {
        let series = extract(&["Jan 2021 7.00%", "Jan 2020 -3.25%"]).unwrap();
        assert_relative_eq!(series.points()[0].rate, -0.0325, epsilon = 1e-12);
        assert_relative_eq!(series.points()[1].rate, 0.07, epsilon = 1e-12);
    }

    #[test]
    fn test_sorted_across_pages() {
        let pages = ["Jan 2023 1.50%  Jan 2018 2.00%", "Jan 2020 3.00%\nJan 2016 0.50%"];
        let series = extract(&pages).unwrap();

        let years = series.years();
        assert!(years.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(years, vec![2016, 2018, 2020, 2023]);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let series = extract(&["Nothing to see", "Feb 2020 4.00%"]).unwrap();
        assert!(series.is_empty());

        let none: [&str; 0] = [];
        assert!(extract(&none).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        // Integer percent, 2-digit year, missing percent sign, missing whitespace
        let text = "Jan 2020 5% Jan 20 4.00% Jan 2021 3.00 Jan 20223.00%";
        assert!(extract(&[text]).unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_may_span_lines() {
        let series = extract(&["Jan 2022\n   6.25%"]).unwrap();
        assert_eq!(series.len(), 1);
        assert_relative_eq!(series.points()[0].rate, 0.0625, epsilon = 1e-12);
    }

    #[test]
    fn test_duplicate_years_pass_through_in_encounter_order() {
        let series = extract(&["Jan 2020 9.00%", "Jan 2019 1.00% Jan 2020 2.00%"]).unwrap();
        assert_eq!(series.years(), vec![2019, 2020, 2020]);
        assert_relative_eq!(series.points()[1].rate, 0.09, epsilon = 1e-12);
        assert_relative_eq!(series.points()[2].rate, 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_non_ascii_digits_converted() {
        // Fullwidth year and Arabic-Indic rate both match `\d`
        let text = "Jan \u{ff12}\u{ff10}\u{ff12}\u{ff10} 5.00% Jan 2021 \u{0663}.\u{0662}\u{0665}%";
        let series = extract(&[text]).unwrap();

        assert_eq!(series.years(), vec![2020, 2021]);
        assert_relative_eq!(series.points()[0].rate, 0.05, epsilon = 1e-12);
        assert_relative_eq!(series.points()[1].rate, 0.0325, epsilon = 1e-12);
    }

    #[test]
    fn test_custom_month() {
        let extractor = RateExtractor::with_config(&ExtractorConfig {
            month: "Jul".to_string(),
        })
        .unwrap();

        let series = extractor.extract(&["Jan 2020 1.00% Jul 2020 2.00%"]);
        assert_eq!(series.len(), 1);
        assert_relative_eq!(series.points()[0].rate, 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_month_rejected() {
        for month in ["", "J.n", "Jan 1"] {
            let result = RateExtractor::with_config(&ExtractorConfig {
                month: month.to_string(),
            });
            assert!(matches!(result, Err(GrowthError::InvalidMonth(_))));
        }
    }
}
