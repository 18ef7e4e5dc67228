//! AWS Lambda handler for the property growth calculator
//!
//! Accepts report text and the two calculator inputs as JSON and returns the
//! extracted rates, the projection table and a status message.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::info;
use serde::{Deserialize, Serialize};

use property_growth::{
    projection::{ProjectionConfig, ProjectionSummary, ValuePoint},
    rates::{split_pages, ExtractorConfig, RatePoint, DEFAULT_MONTH},
    session::{Outcome, Session, Status, DEFAULT_INITIAL_VALUE},
    GrowthError,
};

/// Input for one calculation
#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    /// Report text, one entry per page
    #[serde(default)]
    pub pages: Option<Vec<String>>,

    /// Whole report text with form-feed page breaks (used when `pages` is absent)
    #[serde(default)]
    pub text: Option<String>,

    /// Year the property was bought (default: first detected year)
    #[serde(default)]
    pub purchase_year: Option<i32>,

    /// Initial property value (default: 200,000)
    #[serde(default = "default_initial_value")]
    pub initial_value: f64,

    /// Month token preceding each rate row (default: Jan)
    #[serde(default = "default_month")]
    pub month: String,
}

fn default_initial_value() -> f64 { DEFAULT_INITIAL_VALUE }
fn default_month() -> String { DEFAULT_MONTH.to_string() }

/// Output from the calculation
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<f64>,
    pub rates: Vec<RatePoint>,
    pub projection: Vec<ValuePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProjectionSummary>,
    pub execution_time_ms: u64,
}

/// Run extraction and projection for one request
fn calculate(request: CalculationRequest) -> Result<CalculationResponse, GrowthError> {
    let mut session = Session::with_config(
        &ExtractorConfig { month: request.month },
        ProjectionConfig::default(),
    )?;

    let pages = request
        .pages
        .or_else(|| request.text.as_deref().map(split_pages));

    let outcome = session.run(pages.as_deref(), request.purchase_year, request.initial_value);
    let rates = session.rates().map(|r| r.points().to_vec()).unwrap_or_default();

    let mut response = CalculationResponse {
        status: outcome.status(),
        message: outcome.message(),
        min_year: None,
        max_year: None,
        purchase_year: None,
        initial_value: None,
        rates,
        projection: Vec::new(),
        summary: None,
        execution_time_ms: 0,
    };

    if let Outcome::Projected {
        bounds,
        purchase_year,
        initial_value,
        projection,
    } = outcome
    {
        response.min_year = Some(bounds.min_year);
        response.max_year = Some(bounds.max_year);
        response.purchase_year = Some(purchase_year);
        response.initial_value = Some(initial_value);
        response.summary = Some(projection.summary());
        response.projection = projection.points;
    }

    Ok(response)
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::json!({ "error": message }).to_string();
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body))?)
}

fn json_response(body: &CalculationResponse) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: CalculationRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    let mut response = match calculate(request) {
        Ok(r) => r,
        Err(e @ GrowthError::InvalidMonth(_)) => return error_response(400, &e.to_string()),
        Err(e) => return error_response(500, &e.to_string()),
    };

    response.execution_time_ms = start.elapsed().as_millis() as u64;
    info!(
        "{:?}: {} rates, {} projected years in {} ms",
        response.status,
        response.rates.len(),
        response.projection.len(),
        response.execution_time_ms
    );

    json_response(&response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
