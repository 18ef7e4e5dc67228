//! Calculator session: extract once per document, project on every input change
//!
//! Holds the rate series for the current document so that changing only the
//! purchase year or initial value reruns the projection without rescanning
//! the text.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{GrowthError, Result};
use crate::projection::{GrowthProjector, ProjectionConfig, ProjectionSeries};
use crate::rates::{ExtractorConfig, RateExtractor, RateSeries};

/// Initial property value offered before the user enters one
pub const DEFAULT_INITIAL_VALUE: f64 = 200_000.0;

/// Increment used by front ends for the initial value input
pub const INITIAL_VALUE_STEP: f64 = 1_000.0;

/// Selectable input range derived from an extracted rate series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBounds {
    pub min_year: i32,
    pub max_year: i32,
}

impl InputBounds {
    /// `None` when the series is empty
    pub fn from_rates(rates: &RateSeries) -> Option<Self> {
        Some(Self {
            min_year: rates.min_year()?,
            max_year: rates.max_year()?,
        })
    }

    /// Purchase year preselected for a fresh document
    pub fn default_purchase_year(&self) -> i32 {
        self.min_year
    }

    pub fn clamp_purchase_year(&self, year: i32) -> i32 {
        year.clamp(self.min_year, self.max_year)
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}

/// Initial values below zero (or NaN) are raised to zero
pub fn clamp_initial_value(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

/// User-facing status category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
    Info,
}

/// Result of one calculator interaction
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No document supplied yet
    NoInputYet,
    /// The document contained no rate tokens
    NoDataFound,
    Projected {
        bounds: InputBounds,
        purchase_year: i32,
        initial_value: f64,
        projection: ProjectionSeries,
    },
}

impl Outcome {
    pub fn status(&self) -> Status {
        match self {
            Outcome::NoInputYet => Status::Info,
            Outcome::NoDataFound => Status::Error,
            Outcome::Projected { .. } => Status::Success,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Outcome::NoInputYet => {
                "Please upload a document with capital growth rates to proceed.".to_string()
            }
            Outcome::NoDataFound => {
                "No growth rates found in the uploaded document. Please check the file format."
                    .to_string()
            }
            Outcome::Projected { bounds, .. } => format!(
                "Calculation completed successfully! (Max Year: {})",
                bounds.max_year
            ),
        }
    }

    pub fn projection(&self) -> Option<&ProjectionSeries> {
        match self {
            Outcome::Projected { projection, .. } => Some(projection),
            _ => None,
        }
    }

    /// Missing data becomes [`GrowthError::NoDataFound`]
    pub fn into_projection(self) -> Result<ProjectionSeries> {
        match self {
            Outcome::Projected { projection, .. } => Ok(projection),
            _ => Err(GrowthError::NoDataFound),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Document currently loaded into a session
#[derive(Debug, Clone)]
struct LoadedDocument {
    fingerprint: u64,
    pages: Vec<String>,
    rates: RateSeries,
}

impl LoadedDocument {
    /// Hash first, then page text, so a hash collision never reuses rates
    fn is_same<S: AsRef<str>>(&self, fingerprint: u64, pages: &[S]) -> bool {
        self.fingerprint == fingerprint
            && self.pages.len() == pages.len()
            && self.pages.iter().zip(pages).all(|(a, b)| a == b.as_ref())
    }
}

/// Explicit extract-then-project pipeline with per-document memoization
///
/// # Example
/// ```ignore
/// let mut session = Session::new()?;
/// session.load_document(&pages);
///
/// for value in [150_000.0, 200_000.0] {
///     let outcome = session.calculate(Some(2015), value);
///     println!("{}", outcome);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    extractor: RateExtractor,
    projector: GrowthProjector,
    document: Option<LoadedDocument>,
}

impl Session {
    /// Session with the default `Jan` pattern and two-decimal rounding
    pub fn new() -> Result<Self> {
        Self::with_config(&ExtractorConfig::default(), ProjectionConfig::default())
    }

    pub fn with_config(extractor: &ExtractorConfig, projection: ProjectionConfig) -> Result<Self> {
        Ok(Self {
            extractor: RateExtractor::with_config(extractor)?,
            projector: GrowthProjector::new(projection),
            document: None,
        })
    }

    /// Load a document's pages, rescanning only if the text changed
    pub fn load_document<S: AsRef<str>>(&mut self, pages: &[S]) -> &RateSeries {
        let fingerprint = fingerprint(pages);

        if self
            .document
            .as_ref()
            .is_some_and(|doc| !doc.is_same(fingerprint, pages))
        {
            self.document = None;
        }

        let extractor = &self.extractor;
        let doc = self.document.get_or_insert_with(|| {
            let rates = extractor.extract(pages);
            info!("Extracted {} growth rates from {} pages", rates.len(), pages.len());
            LoadedDocument {
                fingerprint,
                pages: pages.iter().map(|p| p.as_ref().to_string()).collect(),
                rates,
            }
        });

        &doc.rates
    }

    /// Forget the loaded document
    pub fn clear_document(&mut self) {
        self.document = None;
    }

    /// Rate series of the loaded document, if any
    pub fn rates(&self) -> Option<&RateSeries> {
        self.document.as_ref().map(|doc| &doc.rates)
    }

    pub fn bounds(&self) -> Option<InputBounds> {
        self.rates().and_then(InputBounds::from_rates)
    }

    /// Project the loaded document's rates for the given inputs
    ///
    /// `purchase_year` defaults to the first detected year and is clamped to
    /// the detected range; `initial_value` is clamped to be non-negative.
    pub fn calculate(&self, purchase_year: Option<i32>, initial_value: f64) -> Outcome {
        let Some(rates) = self.rates() else {
            return Outcome::NoInputYet;
        };
        let Some(bounds) = InputBounds::from_rates(rates) else {
            warn!("No growth rates found in document");
            return Outcome::NoDataFound;
        };

        let purchase_year = match purchase_year {
            Some(year) => {
                let clamped = bounds.clamp_purchase_year(year);
                if clamped != year {
                    warn!(
                        "Purchase year {} outside {}..={}, using {}",
                        year, bounds.min_year, bounds.max_year, clamped
                    );
                }
                clamped
            }
            None => bounds.default_purchase_year(),
        };
        let initial_value = clamp_initial_value(initial_value);

        let projection = self.projector.project(rates, purchase_year, initial_value);

        Outcome::Projected {
            bounds,
            purchase_year,
            initial_value,
            projection,
        }
    }

    /// One full interaction: optional document, then projection
    pub fn run<S: AsRef<str>>(
        &mut self,
        pages: Option<&[S]>,
        purchase_year: Option<i32>,
        initial_value: f64,
    ) -> Outcome {
        match pages {
            Some(pages) => {
                self.load_document(pages);
            }
            None => self.clear_document(),
        }
        self.calculate(purchase_year, initial_value)
    }
}

/// Identity of a document's text content
fn fingerprint<S: AsRef<str>>(pages: &[S]) -> u64 {
    let mut hasher = DefaultHasher::new();
    pages.len().hash(&mut hasher);
    for page in pages {
        page.as_ref().hash(&mut hasher);
    }
    hasher.finish()
}
