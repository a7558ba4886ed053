use super::SuggestionRule;
use crate::models::FieldData;

/// Heat stress rule (above 30°C)
pub struct HeatStressRule;

impl SuggestionRule for HeatStressRule {
    fn id(&self) -> &'static str {
        "heat_stress"
    }

    fn name(&self) -> &'static str {
        "Heat Stress"
    }

    fn evaluate(&self, data: &FieldData) -> Option<String> {
        if data.temperature > 30.0 {
            Some("Use shade nets or adjust planting date to cooler period.".to_string())
        } else {
            None
        }
    }
}
