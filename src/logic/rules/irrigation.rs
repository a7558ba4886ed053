use super::SuggestionRule;
use crate::models::FieldData;

/// Low rainfall rule
///
/// Below 200mm of rainfall, soil moisture cannot sustain most field crops
/// without supplemental water.
pub struct DripIrrigationRule;

impl SuggestionRule for DripIrrigationRule {
    fn id(&self) -> &'static str {
        "drip_irrigation"
    }

    fn name(&self) -> &'static str {
        "Drip Irrigation"
    }

    fn evaluate(&self, data: &FieldData) -> Option<String> {
        if data.rainfall < 200.0 {
            Some("Recommend drip irrigation to maintain soil moisture.".to_string())
        } else {
            None
        }
    }
}
