//! Projection output structures

use serde::{Deserialize, Serialize};

/// Property value at the end of one calendar year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuePoint {
    #[serde(rename = "Year")]
    pub year: i32,

    /// Rounded to 2 decimal places
    #[serde(rename = "Property Value ($)")]
    pub value: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    /// Year the property was bought
    pub purchase_year: i32,

    /// Value at purchase
    pub initial_value: f64,

    /// One row per compounded year, ascending
    pub points: Vec<ValuePoint>,
}

impl ProjectionSeries {
    pub fn new(purchase_year: i32, initial_value: f64) -> Self {
        Self {
            purchase_year,
            initial_value,
            points: Vec::new(),
        }
    }

    /// Add a value row
    pub fn add_point(&mut self, year: i32, value: f64) {
        self.points.push(ValuePoint { year, value });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValuePoint> {
        self.points.iter()
    }

    pub fn points(&self) -> &[ValuePoint] {
        &self.points
    }

    /// Value after the last compounded year, or the initial value if none
    pub fn final_value(&self) -> f64 {
        self.points.last().map(|p| p.value).unwrap_or(self.initial_value)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let final_value = self.final_value();
        let total_growth_pct = if self.initial_value > 0.0 {
            Some((final_value / self.initial_value - 1.0) * 100.0)
        } else {
            None
        };

        ProjectionSummary {
            purchase_year: self.purchase_year,
            initial_value: self.initial_value,
            final_year: self.points.last().map(|p| p.year),
            final_value,
            years: self.points.len() as u32,
            total_growth_pct,
        }
    }
}

/// Headline figures for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub purchase_year: i32,
    pub initial_value: f64,
    pub final_year: Option<i32>,
    pub final_value: f64,
    pub years: u32,
    /// `None` when the initial value is zero
    pub total_growth_pct: Option<f64>,
}
