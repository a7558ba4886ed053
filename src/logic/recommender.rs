use super::estimator::estimate_yield;
use super::round2;
use crate::models::{CropRecommendation, CropType, FieldConditions, CROP_CATALOG};

const SCORE_FLOOR: f64 = 0.1;
const SCORE_CEIL: f64 = 1.0;

/// Nitrogen counts as adequate at this fraction of the crop's tier threshold.
const NITROGEN_ADEQUACY_RATIO: f64 = 0.8;

fn in_range(value: f64, range: (f64, f64)) -> bool {
    value >= range.0 && value <= range.1
}

/// Score one crop's fit against its static optimal-range profile.
/// Returns the clamped, rounded score and the reasons for every match.
fn suitability(crop: CropType, conditions: &FieldConditions) -> (f64, Vec<String>) {
    let profile = crop.profile();
    let mut score: f64 = 1.0;
    let mut reasons: Vec<String> = Vec::new();

    if in_range(conditions.soil_ph, profile.ph) {
        score += 0.15;
        reasons.push(format!(
            "Soil pH {} is ideal (optimal: {}-{})",
            conditions.soil_ph, profile.ph.0, profile.ph.1
        ));
    } else {
        score -= 0.15;
    }

    if in_range(conditions.temperature, profile.temperature_c) {
        score += 0.20;
        reasons.push(format!(
            "Temperature {}°C is excellent for growth",
            conditions.temperature
        ));
    } else {
        score -= 0.20;
    }

    // Excess rainfall is penalized less than a deficit
    if in_range(conditions.rainfall, profile.rainfall_mm) {
        score += 0.15;
        reasons.push(format!(
            "Rainfall {}mm matches water requirements",
            conditions.rainfall
        ));
    } else if conditions.rainfall < profile.rainfall_mm.0 {
        score -= 0.10;
    } else {
        score -= 0.05;
    }

    if in_range(conditions.humidity, profile.humidity_pct) {
        score += 0.10;
        reasons.push("Humidity level supports healthy crop development".to_string());
    } else {
        score -= 0.10;
    }

    let required_n = profile.nitrogen_need.threshold_kg_ha();
    if conditions.nitrogen >= required_n * NITROGEN_ADEQUACY_RATIO {
        score += 0.10;
        reasons.push(format!(
            "Nitrogen levels adequate for {} requirement crop",
            profile.nitrogen_need
        ));
    }

    // No partial credit for one of the two
    if conditions.phosphorus >= 30.0 && conditions.potassium >= 30.0 {
        score += 0.10;
        reasons.push("Good phosphorus and potassium levels for root and plant health".to_string());
    }

    if reasons.is_empty() {
        reasons.push("General conditions are suitable for this crop".to_string());
    }

    (round2(score.clamp(SCORE_FLOOR, SCORE_CEIL)), reasons)
}

/// Rank the full catalog under shared conditions, best fit first.
///
/// The sort is stable, so crops with equal suitability keep catalog order.
pub fn recommend_crops(conditions: &FieldConditions) -> Vec<CropRecommendation> {
    let mut recommendations: Vec<CropRecommendation> = CROP_CATALOG
        .iter()
        .map(|&crop_type| {
            let (suitability_score, reasons) = suitability(crop_type, conditions);
            let prediction = estimate_yield(&conditions.with_crop(crop_type));

            CropRecommendation {
                crop_type,
                predicted_yield: prediction.predicted_yield,
                suitability_score,
                reasons,
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.suitability_score.total_cmp(&a.suitability_score));
    recommendations
}
