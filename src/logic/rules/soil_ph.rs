use super::SuggestionRule;
use crate::models::FieldData;

/// Soil pH correction rule
///
/// Outside [6.5, 7.5]: lime when acidic, sulfur when alkaline. The two
/// corrections are mutually exclusive.
pub struct PhCorrectionRule;

impl SuggestionRule for PhCorrectionRule {
    fn id(&self) -> &'static str {
        "ph_correction"
    }

    fn name(&self) -> &'static str {
        "Soil pH Correction"
    }

    fn evaluate(&self, data: &FieldData) -> Option<String> {
        if data.soil_ph < 6.5 {
            Some(
                "Apply agricultural lime to raise soil pH to optimal range (6.5-7.5)."
                    .to_string(),
            )
        } else if data.soil_ph > 7.5 {
            Some("Apply sulfur to lower soil pH to optimal range (6.5-7.5).".to_string())
        } else {
            None
        }
    }
}
