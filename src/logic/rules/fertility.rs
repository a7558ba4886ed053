use super::SuggestionRule;
use crate::models::FieldData;

/// Nitrogen deficit rule
///
/// Below 40 kg/ha most cereals run short during vegetative growth.
pub struct NitrogenDeficitRule;

impl SuggestionRule for NitrogenDeficitRule {
    fn id(&self) -> &'static str {
        "nitrogen_deficit"
    }

    fn name(&self) -> &'static str {
        "Nitrogen Deficit"
    }

    fn evaluate(&self, data: &FieldData) -> Option<String> {
        if data.nitrogen < 40.0 {
            Some("Apply 50 kg/ha of nitrogen fertilizer before planting.".to_string())
        } else {
            None
        }
    }
}

/// Phosphorus deficit rule (below 25 kg/ha)
pub struct PhosphorusDeficitRule;

impl SuggestionRule for PhosphorusDeficitRule {
    fn id(&self) -> &'static str {
        "phosphorus_deficit"
    }

    fn name(&self) -> &'static str {
        "Phosphorus Deficit"
    }

    fn evaluate(&self, data: &FieldData) -> Option<String> {
        if data.phosphorus < 25.0 {
            Some("Increase phosphorus application to improve root development.".to_string())
        } else {
            None
        }
    }
}

/// Potassium deficit rule (below 30 kg/ha)
pub struct PotassiumDeficitRule;

impl SuggestionRule for PotassiumDeficitRule {
    fn id(&self) -> &'static str {
        "potassium_deficit"
    }

    fn name(&self) -> &'static str {
        "Potassium Deficit"
    }

    fn evaluate(&self, data: &FieldData) -> Option<String> {
        if data.potassium < 30.0 {
            Some("Add potassium fertilizer to enhance plant disease resistance.".to_string())
        } else {
            None
        }
    }
}
