use super::{
    crop_specific::{
        BarleyLodgingRule, CottonColdRule, SoybeanAcidityRule, SunflowerHumidityRule,
        WheatDroughtRule,
    },
    fertility::{NitrogenDeficitRule, PhosphorusDeficitRule, PotassiumDeficitRule},
    heat_stress::HeatStressRule,
    irrigation::DripIrrigationRule,
    soil_ph::PhCorrectionRule,
    SuggestionRule,
};
use crate::models::FieldData;

/// Hard cap on the returned suggestion list.
pub const MAX_SUGGESTIONS: usize = 5;

/// When fewer rules than this fire, the generic advice is appended.
const MIN_SPECIFIC_SUGGESTIONS: usize = 3;

const FALLBACK_ADVICE: &str = "Maintain current farming practices for optimal results.";

pub struct SuggestionEngine {
    rules: Vec<Box<dyn SuggestionRule>>,
}

impl SuggestionEngine {
    pub fn new() -> Self {
        // Registration order is the suggestion order.
        let rules: Vec<Box<dyn SuggestionRule>> = vec![
            Box::new(DripIrrigationRule),
            Box::new(NitrogenDeficitRule),
            Box::new(PhCorrectionRule),
            Box::new(HeatStressRule),
            Box::new(WheatDroughtRule),
            Box::new(SoybeanAcidityRule),
            Box::new(CottonColdRule),
            Box::new(BarleyLodgingRule),
            Box::new(SunflowerHumidityRule),
            Box::new(PhosphorusDeficitRule),
            Box::new(PotassiumDeficitRule),
        ];

        Self { rules }
    }

    /// Evaluate the full battery against raw inputs, keeping evaluation order.
    pub fn suggestions(&self, data: &FieldData) -> Vec<String> {
        let mut suggestions: Vec<String> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(data))
            .collect();

        if suggestions.len() < MIN_SPECIFIC_SUGGESTIONS {
            suggestions.push(FALLBACK_ADVICE.to_string());
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }

    pub fn evaluate_rule(&self, rule_id: &str, data: &FieldData) -> Option<String> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(data))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CropType;

    fn data(crop: CropType) -> FieldData {
        FieldData {
            crop_type: crop,
            season: "summer".into(),
            area: 10.0,
            soil_ph: 6.8,
            nitrogen: 55.0,
            phosphorus: 35.0,
            potassium: 40.0,
            rainfall: 320.0,
            temperature: 22.0,
            humidity: 65.0,
        }
    }

    #[test]
    fn healthy_field_gets_fallback_only() {
        let engine = SuggestionEngine::new();
        let suggestions = engine.suggestions(&data(CropType::Corn));
        assert_eq!(suggestions, vec![FALLBACK_ADVICE.to_string()]);
    }

    #[test]
    fn fallback_appended_below_three_hits() {
        let engine = SuggestionEngine::new();
        let mut d = data(CropType::Corn);
        d.rainfall = 150.0; // irrigation fires
        d.nitrogen = 30.0; // nitrogen fires
        let suggestions = engine.suggestions(&d);
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[2], FALLBACK_ADVICE);
    }

    #[test]
    fn no_fallback_at_three_hits() {
        let engine = SuggestionEngine::new();
        let mut d = data(CropType::Corn);
        d.rainfall = 150.0;
        d.nitrogen = 30.0;
        d.soil_ph = 5.0;
        let suggestions = engine.suggestions(&d);
        assert_eq!(suggestions.len(), 3);
        assert!(!suggestions.contains(&FALLBACK_ADVICE.to_string()));
    }

    #[test]
    fn capped_at_five_in_evaluation_order() {
        let engine = SuggestionEngine::new();
        // Wheat with everything wrong: irrigation, nitrogen, pH, heat, wheat
        // drought, phosphorus, potassium would all fire (7 rules).
        let mut d = data(CropType::Wheat);
        d.rainfall = 100.0;
        d.nitrogen = 10.0;
        d.soil_ph = 4.5;
        d.temperature = 35.0;
        d.phosphorus = 10.0;
        d.potassium = 10.0;
        let suggestions = engine.suggestions(&d);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert!(suggestions[0].contains("drip irrigation"));
        assert!(suggestions[1].contains("nitrogen fertilizer"));
        assert!(suggestions[2].contains("lime"));
        assert!(suggestions[3].contains("shade nets"));
        assert!(suggestions[4].contains("millet or sorghum"));
    }

    #[test]
    fn lime_and_sulfur_are_exclusive() {
        let engine = SuggestionEngine::new();
        let mut acidic = data(CropType::Corn);
        acidic.soil_ph = 5.5;
        let low = engine.evaluate_rule("ph_correction", &acidic).unwrap();
        assert!(low.contains("lime"));
        assert!(!low.contains("sulfur"));

        let mut alkaline = data(CropType::Corn);
        alkaline.soil_ph = 8.2;
        let high = engine.evaluate_rule("ph_correction", &alkaline).unwrap();
        assert!(high.contains("sulfur"));
        assert!(!high.contains("lime"));
    }

    #[test]
    fn crop_specific_rules_are_gated_on_crop() {
        let engine = SuggestionEngine::new();
        let mut d = data(CropType::Corn);
        d.rainfall = 240.0; // would trip the wheat rule
        d.nitrogen = 90.0; // would trip the barley rule
        d.humidity = 85.0; // would trip the sunflower rule
        assert!(engine.evaluate_rule("wheat_drought", &d).is_none());
        assert!(engine.evaluate_rule("barley_lodging", &d).is_none());
        assert!(engine.evaluate_rule("sunflower_humidity", &d).is_none());

        d.crop_type = CropType::Barley;
        assert!(engine.evaluate_rule("barley_lodging", &d).is_some());
    }

    #[test]
    fn registry_is_complete_and_ordered() {
        let engine = SuggestionEngine::new();
        let ids: Vec<&str> = engine.list_rules().iter().map(|(id, _)| *id).collect();
        assert_eq!(
            ids,
            vec![
                "drip_irrigation",
                "nitrogen_deficit",
                "ph_correction",
                "heat_stress",
                "wheat_drought",
                "soybean_acidity",
                "cotton_cold",
                "barley_lodging",
                "sunflower_humidity",
                "phosphorus_deficit",
                "potassium_deficit",
            ]
        );
    }

    #[test]
    fn boundary_values_do_not_fire() {
        let engine = SuggestionEngine::new();
        let mut d = data(CropType::Corn);
        d.rainfall = 200.0;
        d.nitrogen = 40.0;
        d.temperature = 30.0;
        d.phosphorus = 25.0;
        d.potassium = 30.0;
        assert!(engine.evaluate_rule("drip_irrigation", &d).is_none());
        assert!(engine.evaluate_rule("nitrogen_deficit", &d).is_none());
        assert!(engine.evaluate_rule("heat_stress", &d).is_none());
        assert!(engine.evaluate_rule("phosphorus_deficit", &d).is_none());
        assert!(engine.evaluate_rule("potassium_deficit", &d).is_none());
    }
}
