pub mod estimator;
pub mod recommender;
pub mod rules;
pub mod validation;

pub use estimator::estimate_yield;
pub use recommender::recommend_crops;
pub use rules::SuggestionEngine;
pub use validation::{validate_field_conditions, validate_field_data, ValidationError};

/// Round to 2 decimals, the precision all reported scores use.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
