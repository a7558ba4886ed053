pub mod crop_specific;
pub mod engine;
pub mod fertility;
pub mod heat_stress;
pub mod irrigation;
pub mod soil_ph;

pub use engine::SuggestionEngine;

use crate::models::FieldData;

/// Trait for yield optimization rules.
///
/// Rules see raw field inputs, not adjusted values. Registration order in the
/// engine is the evaluation order, which fixes the order of suggestions.
pub trait SuggestionRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return advice if its condition is met
    fn evaluate(&self, data: &FieldData) -> Option<String>;
}
