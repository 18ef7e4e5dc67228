//! Property value projection over an extracted growth rate series

mod engine;
mod series;

pub use engine::{project, round_to, GrowthProjector, ProjectionConfig, DEFAULT_DECIMALS};
pub use series::{ProjectionSeries, ProjectionSummary, ValuePoint};
