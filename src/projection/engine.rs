//! Year-by-year compounding of a property value over an extracted rate series

use log::debug;

use super::series::ProjectionSeries;
use crate::rates::RateSeries;

/// Decimal places kept in each reported value
pub const DEFAULT_DECIMALS: u32 = 2;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Decimal places each reported value is rounded to
    pub decimals: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct GrowthProjector {
    config: ProjectionConfig,
}

impl GrowthProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Compound `initial_value` forward from `purchase_year`
    ///
    /// Rates are applied by position: the i-th rate of the sorted series
    /// compounds calendar year `purchase_year + i`, whatever year that rate
    /// was recorded for. A purchase year after the first rate year therefore
    /// consumes rates recorded for earlier years. This mirrors the
    /// calculator users already compare against and is kept as-is.
    ///
    /// Runs `min(rates.len(), max_year - purchase_year + 1)` iterations.
    /// Callers keep `purchase_year` inside the series' year range and
    /// `initial_value` non-negative; nothing is validated here.
    pub fn project(&self, rates: &RateSeries, purchase_year: i32, initial_value: f64) -> ProjectionSeries {
        let mut result = ProjectionSeries::new(purchase_year, initial_value);

        let Some(max_year) = rates.max_year() else {
            return result;
        };

        let span = (i64::from(max_year) - i64::from(purchase_year) + 1).max(0) as usize;
        let years = rates.len().min(span);

        let mut current_value = initial_value;
        for (offset, point) in rates.iter().take(years).enumerate() {
            let year = purchase_year + offset as i32;
            current_value *= 1.0 + point.rate;
            result.add_point(year, round_to(current_value, self.config.decimals));
        }

        debug!(
            "Projected {} years from {} (max year {}): {:.2} -> {:.2}",
            result.len(),
            purchase_year,
            max_year,
            initial_value,
            result.final_value()
        );

        result
    }
}

/// Project with the default two-decimal rounding
pub fn project(rates: &RateSeries, purchase_year: i32, initial_value: f64) -> ProjectionSeries {
    GrowthProjector::default().project(rates, purchase_year, initial_value)
}

/// Round the exact binary value to `decimals` places, ties to even
///
/// A scaled value landing on `.5` is only a true tie when the scaling
/// multiplication was exact; otherwise the residual of the product says
/// which side of the half the exact value lies on.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;

    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 {
        let residual = value.mul_add(factor, -scaled);
        if residual == 0.0 {
            scaled.round_ties_even()
        } else if residual > 0.0 {
            scaled.ceil()
        } else {
            scaled.floor()
        }
    } else {
        scaled.round()
    };

    rounded / factor
}
