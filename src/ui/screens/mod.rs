pub mod field_form;
pub mod prediction;
pub mod recommendations;

pub use field_form::{FieldFormScreen, FormField, FormMode, FormValues};
pub use prediction::PredictionScreen;
pub use recommendations::RecommendationsScreen;
