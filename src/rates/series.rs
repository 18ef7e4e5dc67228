//! Year-ordered capital growth rate series

use serde::{Deserialize, Serialize};

/// One annual growth observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    #[serde(rename = "Year")]
    pub year: i32,

    /// Decimal fraction, e.g. 0.07 for 7%
    #[serde(rename = "Rate")]
    pub rate: f64,
}

impl RatePoint {
    pub fn new(year: i32, rate: f64) -> Self {
        Self { year, rate }
    }

    /// Rate expressed as a percentage (0.07 -> 7.0)
    pub fn rate_pct(&self) -> f64 {
        self.rate * 100.0
    }
}

/// Rate observations sorted ascending by year
///
/// Built once per document and never mutated afterwards. Points sharing a
/// year are kept in the order they were encountered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateSeries {
    points: Vec<RatePoint>,
}

impl RateSeries {
    /// Build a series from unordered points using a stable sort by year
    pub fn from_points(mut points: Vec<RatePoint>) -> Self {
        points.sort_by_key(|p| p.year);
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RatePoint> {
        self.points.iter()
    }

    pub fn points(&self) -> &[RatePoint] {
        &self.points
    }

    /// Earliest year in the series, `None` when empty
    pub fn min_year(&self) -> Option<i32> {
        self.points.first().map(|p| p.year)
    }

    /// Latest year in the series, `None` when empty
    pub fn max_year(&self) -> Option<i32> {
        self.points.last().map(|p| p.year)
    }

    pub fn years(&self) -> Vec<i32> {
        self.points.iter().map(|p| p.year).collect()
    }

    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.rate).collect()
    }

    /// Years that appear more than once, ascending and without repeats
    pub fn duplicate_years(&self) -> Vec<i32> {
        let mut dups: Vec<i32> = self
            .points
            .windows(2)
            .filter(|w| w[0].year == w[1].year)
            .map(|w| w[0].year)
            .collect();
        dups.dedup();
        dups
    }
}

impl<'a> IntoIterator for &'a RateSeries {
    type Item = &'a RatePoint;
    type IntoIter = std::slice::Iter<'a, RatePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_sorts_by_year() {
        let series = RateSeries::from_points(vec![
            RatePoint::new(2022, 0.01),
            RatePoint::new(2019, 0.04),
            RatePoint::new(2020, 0.03),
        ]);

        assert_eq!(series.years(), vec![2019, 2020, 2022]);
        assert_eq!(series.min_year(), Some(2019));
        assert_eq!(series.max_year(), Some(2022));
    }

    #[test]
    fn test_equal_years_keep_encounter_order() {
        // Rates deliberately out of numeric order to catch a tuple sort
        let series = RateSeries::from_points(vec![
            RatePoint::new(2021, 0.09),
            RatePoint::new(2020, 0.05),
            RatePoint::new(2021, 0.02),
        ]);

        assert_eq!(series.rates(), vec![0.05, 0.09, 0.02]);
        assert_eq!(series.duplicate_years(), vec![2021]);
    }

    #[test]
    fn test_empty_series() {
        let series = RateSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.min_year(), None);
        assert_eq!(series.max_year(), None);
        assert!(series.duplicate_years().is_empty());
    }

    #[test]
    fn test_triple_duplicate_reported_once() {
        let series = RateSeries::from_points(vec![
            RatePoint::new(2018, 0.01),
            RatePoint::new(2018, 0.02),
            RatePoint::new(2018, 0.03),
        ]);
        assert_eq!(series.duplicate_years(), vec![2018]);
    }
}
