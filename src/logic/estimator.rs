use super::round2;
use super::rules::SuggestionEngine;
use crate::models::{FieldData, PredictionResult, YieldUnit};

// The summed adjustment factor is capped to this band, so a prediction never
// leaves [0.5x, 2.0x] of base yield times area.
const ADJUSTMENT_FLOOR: f64 = -0.5;
const ADJUSTMENT_CEIL: f64 = 1.0;

// Reference point the accuracy score measures deviation from.
const REFERENCE_PH: f64 = 7.0;
const REFERENCE_TEMP_C: f64 = 20.0;
const REFERENCE_HUMIDITY: f64 = 60.0;
const MAX_DEVIATION: f64 = 0.3;

/// Score each input independently against fixed thresholds and sum the
/// per-unit bonuses and penalties into one dimensionless factor.
fn adjustment_factor(data: &FieldData) -> f64 {
    let mut adjustment = 0.0;

    // Soil pH: flat bonus inside the optimal band
    if data.soil_ph >= 6.5 && data.soil_ph <= 7.5 {
        adjustment += 0.10;
    } else {
        adjustment -= 0.05;
    }

    // Nitrogen
    if data.nitrogen > 50.0 {
        adjustment += (data.nitrogen - 50.0) * 0.002;
    } else {
        adjustment -= (50.0 - data.nitrogen) * 0.001;
    }

    // Phosphorus: bonus only
    if data.phosphorus > 30.0 {
        adjustment += (data.phosphorus - 30.0) * 0.001;
    }

    // Potassium: bonus only
    if data.potassium > 30.0 {
        adjustment += (data.potassium - 30.0) * 0.001;
    }

    // Rainfall
    if data.rainfall > 300.0 {
        adjustment += (data.rainfall - 300.0) * 0.003;
    } else {
        adjustment -= (300.0 - data.rainfall) * 0.002;
    }

    // Temperature
    if data.temperature > 20.0 {
        adjustment += (data.temperature - 20.0) * 0.002;
    } else {
        adjustment -= (20.0 - data.temperature) * 0.003;
    }

    // Humidity
    if data.humidity > 60.0 {
        adjustment += (data.humidity - 60.0) * 0.001;
    } else {
        adjustment -= (60.0 - data.humidity) * 0.002;
    }

    adjustment
}

/// Confidence from proximity to the reference point (pH 7, 20°C, 60%).
/// The deviation sum is capped, so the score never drops below 0.70.
fn accuracy_score(data: &FieldData) -> f64 {
    let ph_deviation = (data.soil_ph - REFERENCE_PH).abs() / REFERENCE_PH;
    let temp_deviation = (data.temperature - REFERENCE_TEMP_C).abs() / REFERENCE_TEMP_C;
    let humidity_deviation = (data.humidity - REFERENCE_HUMIDITY).abs() / REFERENCE_HUMIDITY;

    let deviation = (ph_deviation + temp_deviation + humidity_deviation).min(MAX_DEVIATION);
    round2(1.0 - deviation)
}

/// Estimate yield for one crop under the given field conditions.
///
/// Input is assumed validated; out-of-domain numerics propagate through the
/// arithmetic untouched.
pub fn estimate_yield(data: &FieldData) -> PredictionResult {
    let base_yield = data.crop_type.base_yield_kg_per_acre();
    let adjustment = adjustment_factor(data).clamp(ADJUSTMENT_FLOOR, ADJUSTMENT_CEIL);

    let predicted_yield = (base_yield * data.area * (1.0 + adjustment)).round() as u64;

    PredictionResult {
        predicted_yield,
        unit: YieldUnit::KgPerAcre,
        accuracy_score: accuracy_score(data),
        optimization_suggestions: SuggestionEngine::new().suggestions(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CropType;

    fn reference_field() -> FieldData {
        FieldData {
            crop_type: CropType::Wheat,
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
    fn reference_field_prediction() {
        // adjustment = 0.10 + 5*0.002 + 5*0.001 + 10*0.001 + 20*0.003
        //            + 2*0.002 + 5*0.001 = 0.194
        let result = estimate_yield(&reference_field());
        assert_eq!(result.predicted_yield, 23880);
        assert_eq!(result.unit, YieldUnit::KgPerAcre);
        assert_eq!(result.accuracy_score, 0.79);
    }

    #[test]
    fn estimate_is_deterministic() {
        let data = reference_field();
        let a = estimate_yield(&data);
        let b = estimate_yield(&data);
        assert_eq!(a.predicted_yield, b.predicted_yield);
        assert_eq!(a.accuracy_score, b.accuracy_score);
        assert_eq!(a.optimization_suggestions, b.optimization_suggestions);
    }

    #[test]
    fn yield_scales_linearly_with_area() {
        let mut data = reference_field();
        let single = estimate_yield(&data).predicted_yield;
        data.area = 20.0;
        let double = estimate_yield(&data).predicted_yield;
        assert_eq!(double, single * 2);
    }

    #[test]
    fn base_yields_differ_by_crop() {
        let mut data = reference_field();
        let wheat = estimate_yield(&data).predicted_yield;
        data.crop_type = CropType::Cotton;
        let cotton = estimate_yield(&data).predicted_yield;
        // Same conditions, same adjustment; ratio is the base-yield ratio.
        assert_eq!(wheat as f64 / cotton as f64, 2000.0 / 800.0);
    }

    #[test]
    fn adjustment_clamped_on_hostile_field() {
        let mut data = reference_field();
        data.soil_ph = 3.0;
        data.nitrogen = 0.0;
        data.phosphorus = 0.0;
        data.potassium = 0.0;
        data.rainfall = 0.0;
        data.temperature = -10.0;
        data.humidity = 0.0;
        // Raw sum is far below -0.5; the floor holds the prediction at half
        // of base yield times area.
        let result = estimate_yield(&data);
        assert_eq!(result.predicted_yield, (2000.0 * 10.0 * 0.5) as u64);
    }

    #[test]
    fn adjustment_clamped_on_lush_field() {
        let mut data = reference_field();
        data.nitrogen = 500.0;
        data.phosphorus = 500.0;
        data.potassium = 500.0;
        data.rainfall = 1500.0;
        data.temperature = 45.0;
        data.humidity = 100.0;
        let result = estimate_yield(&data);
        assert_eq!(result.predicted_yield, (2000.0 * 10.0 * 2.0) as u64);
    }

    #[test]
    fn accuracy_stays_within_bounds() {
        let mut data = reference_field();
        for ph in [0.0, 4.0, 7.0, 9.5, 14.0] {
            for temp in [-10.0, 0.0, 20.0, 45.0] {
                for humidity in [0.0, 30.0, 60.0, 100.0] {
                    data.soil_ph = ph;
                    data.temperature = temp;
                    data.humidity = humidity;
                    let score = estimate_yield(&data).accuracy_score;
                    assert!((0.70..=1.0).contains(&score), "score {} out of bounds", score);
                }
            }
        }
    }

    #[test]
    fn accuracy_peaks_at_reference_point() {
        let mut data = reference_field();
        data.soil_ph = 7.0;
        data.temperature = 20.0;
        data.humidity = 60.0;
        assert_eq!(estimate_yield(&data).accuracy_score, 1.0);
    }

    #[test]
    fn ph_band_is_inclusive() {
        let mut inside = reference_field();
        inside.soil_ph = 6.5;
        let mut outside = reference_field();
        outside.soil_ph = 6.4;
        // 0.10 bonus vs 0.05 penalty is a 0.15 swing on the factor.
        assert!(
            estimate_yield(&inside).predicted_yield > estimate_yield(&outside).predicted_yield
        );
    }

    #[test]
    fn suggestion_count_never_exceeds_cap() {
        let mut data = reference_field();
        data.rainfall = 50.0;
        data.nitrogen = 5.0;
        data.soil_ph = 4.0;
        data.temperature = 38.0;
        data.phosphorus = 5.0;
        data.potassium = 5.0;
        let result = estimate_yield(&data);
        assert!(result.optimization_suggestions.len() <= 5);
        assert!(!result.optimization_suggestions.is_empty());
    }
}
