use super::crop::CropType;
use serde::{Deserialize, Serialize};

/// Fully-populated input for a single-crop yield estimate.
///
/// Construction goes through [`crate::logic::validation::validate_field_data`];
/// the estimator assumes every field is present and performs no further checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldData {
    pub crop_type: CropType,
    pub season: String,
    pub area: f64,
    #[serde(rename = "soil_pH")]
    pub soil_ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub rainfall: f64,
    pub temperature: f64,
    pub humidity: f64,
}

/// Shared field conditions used when ranking the whole crop catalog.
/// Same shape as [`FieldData`] minus the crop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConditions {
    pub season: String,
    pub area: f64,
    #[serde(rename = "soil_pH")]
    pub soil_ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub rainfall: f64,
    pub temperature: f64,
    pub humidity: f64,
}

impl FieldConditions {
    /// Bind a crop into these conditions for yield estimation.
    pub fn with_crop(&self, crop_type: CropType) -> FieldData {
        FieldData {
            crop_type,
            season: self.season.clone(),
            area: self.area,
            soil_ph: self.soil_ph,
            nitrogen: self.nitrogen,
            phosphorus: self.phosphorus,
            potassium: self.potassium,
            rainfall: self.rainfall,
            temperature: self.temperature,
            humidity: self.humidity,
        }
    }
}

/// Partially-entered form data for the single-crop path.
#[derive(Debug, Clone, Default)]
pub struct FieldDataDraft {
    pub crop_type: Option<CropType>,
    pub season: Option<String>,
    pub area: Option<f64>,
    pub soil_ph: Option<f64>,
    pub nitrogen: Option<f64>,
    pub phosphorus: Option<f64>,
    pub potassium: Option<f64>,
    pub rainfall: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

/// Partially-entered form data for the multi-crop path.
#[derive(Debug, Clone, Default)]
pub struct FieldConditionsDraft {
    pub season: Option<String>,
    pub area: Option<f64>,
    pub soil_ph: Option<f64>,
    pub nitrogen: Option<f64>,
    pub phosphorus: Option<f64>,
    pub potassium: Option<f64>,
    pub rainfall: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}
