//! Rules that only apply to a single crop in the catalog.

use super::SuggestionRule;
use crate::models::{CropType, FieldData};

/// Wheat under drought pressure (rainfall below 250mm)
pub struct WheatDroughtRule;

impl SuggestionRule for WheatDroughtRule {
    fn id(&self) -> &'static str {
        "wheat_drought"
    }

    fn name(&self) -> &'static str {
        "Wheat Drought Resilience"
    }

    fn evaluate(&self, data: &FieldData) -> Option<String> {
        if data.crop_type == CropType::Wheat && data.rainfall < 250.0 {
            Some(
                "Consider switching to millet or sorghum for better drought resilience."
                    .to_string(),
            )
        } else {
            None
        }
    }
}

/// Soybeans on acidic soil (pH below 6.0) fix less nitrogen
pub struct SoybeanAcidityRule;

impl SuggestionRule for SoybeanAcidityRule {
    fn id(&self) -> &'static str {
        "soybean_acidity"
    }

    fn name(&self) -> &'static str {
        "Soybean Soil Acidity"
    }

    fn evaluate(&self, data: &FieldData) -> Option<String> {
        if data.crop_type == CropType::Soybeans && data.soil_ph < 6.0 {
            Some(
                "Soybeans prefer pH 6.0-7.0. Apply lime to raise soil pH for better nodulation."
                    .to_string(),
            )
        } else {
            None
        }
    }
}

/// Cotton in cold conditions (below 15°C)
pub struct CottonColdRule;

impl SuggestionRule for CottonColdRule {
    fn id(&self) -> &'static str {
        "cotton_cold"
    }

    fn name(&self) -> &'static str {
        "Cotton Cold Sensitivity"
    }

    fn evaluate(&self, data: &FieldData) -> Option<String> {
        if data.crop_type == CropType::Cotton && data.temperature < 15.0 {
            Some(
                "Cotton requires warm temperatures (20-30°C). Consider delayed planting or row covers."
                    .to_string(),
            )
        } else {
            None
        }
    }
}

/// Barley with excess nitrogen (above 80 kg/ha) risks lodging
pub struct BarleyLodgingRule;

impl SuggestionRule for BarleyLodgingRule {
    fn id(&self) -> &'static str {
        "barley_lodging"
    }

    fn name(&self) -> &'static str {
        "Barley Lodging Risk"
    }

    fn evaluate(&self, data: &FieldData) -> Option<String> {
        if data.crop_type == CropType::Barley && data.nitrogen > 80.0 {
            Some("Excessive nitrogen can cause lodging in barley. Reduce to 60-80 kg/ha.".to_string())
        } else {
            None
        }
    }
}

/// Sunflowers in humid air (above 80%) are disease prone
pub struct SunflowerHumidityRule;

impl SuggestionRule for SunflowerHumidityRule {
    fn id(&self) -> &'static str {
        "sunflower_humidity"
    }

    fn name(&self) -> &'static str {
        "Sunflower Disease Pressure"
    }

    fn evaluate(&self, data: &FieldData) -> Option<String> {
        if data.crop_type == CropType::Sunflower && data.humidity > 80.0 {
            Some(
                "High humidity increases disease risk in sunflowers. Ensure good field drainage."
                    .to_string(),
            )
        } else {
            None
        }
    }
}
