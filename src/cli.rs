use crate::error::{AgroPredictError, Result};
use crate::models::{CropType, FieldConditionsDraft, FieldDataDraft};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agropredict",
    version,
    about = "Crop yield prediction and recommendation TUI"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Re-run interactive setup
    Init,
    /// One-shot yield estimate for a single crop, printed as JSON
    Predict(FieldArgs),
    /// One-shot suitability ranking of all crops, printed as JSON
    Recommend(ConditionArgs),
}

/// Shared field parameters. All optional so the validator reports what is
/// missing, same as the interactive form.
#[derive(Args)]
pub struct ConditionArgs {
    /// Growing season label
    #[arg(long)]
    pub season: Option<String>,

    /// Field area in acres
    #[arg(long)]
    pub area: Option<f64>,

    /// Soil pH
    #[arg(long)]
    pub ph: Option<f64>,

    /// Available nitrogen (kg/ha)
    #[arg(long)]
    pub nitrogen: Option<f64>,

    /// Available phosphorus (kg/ha)
    #[arg(long)]
    pub phosphorus: Option<f64>,

    /// Available potassium (kg/ha)
    #[arg(long)]
    pub potassium: Option<f64>,

    /// Seasonal rainfall (mm)
    #[arg(long)]
    pub rainfall: Option<f64>,

    /// Average temperature (°C)
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Relative humidity (%)
    #[arg(long)]
    pub humidity: Option<f64>,
}

#[derive(Args)]
pub struct FieldArgs {
    /// Crop to estimate (wheat, corn, rice, soybeans, cotton, barley, sunflower)
    #[arg(long)]
    pub crop: Option<String>,

    #[command(flatten)]
    pub conditions: ConditionArgs,
}

impl ConditionArgs {
    pub fn to_draft(&self) -> FieldConditionsDraft {
        FieldConditionsDraft {
            season: self.season.clone(),
            area: self.area,
            soil_ph: self.ph,
            nitrogen: self.nitrogen,
            phosphorus: self.phosphorus,
            potassium: self.potassium,
            rainfall: self.rainfall,
            temperature: self.temperature,
            humidity: self.humidity,
        }
    }
}

impl FieldArgs {
    pub fn to_draft(&self) -> Result<FieldDataDraft> {
        let crop_type = match &self.crop {
            Some(name) => Some(CropType::from_str(name).ok_or_else(|| {
                AgroPredictError::InvalidData(format!(
                    "unknown crop type '{}' (expected one of wheat, corn, rice, soybeans, cotton, barley, sunflower)",
                    name
                ))
            })?),
            None => None,
        };

        let c = self.conditions.to_draft();
        Ok(FieldDataDraft {
            crop_type,
            season: c.season,
            area: c.area,
            soil_ph: c.soil_ph,
            nitrogen: c.nitrogen,
            phosphorus: c.phosphorus,
            potassium: c.potassium,
            rainfall: c.rainfall,
            temperature: c.temperature,
            humidity: c.humidity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_args(crop: Option<&str>) -> FieldArgs {
        FieldArgs {
            crop: crop.map(String::from),
            conditions: ConditionArgs {
                season: Some("summer".into()),
                area: Some(10.0),
                ph: Some(6.8),
                nitrogen: Some(55.0),
                phosphorus: Some(35.0),
                potassium: Some(40.0),
                rainfall: Some(320.0),
                temperature: Some(22.0),
                humidity: Some(65.0),
            },
        }
    }

    #[test]
    fn known_crop_converts() {
        let draft = field_args(Some("wheat")).to_draft().unwrap();
        assert_eq!(draft.crop_type, Some(CropType::Wheat));
        assert_eq!(draft.soil_ph, Some(6.8));
    }

    #[test]
    fn unknown_crop_is_rejected() {
        let err = field_args(Some("kudzu")).to_draft().unwrap_err();
        assert!(err.to_string().contains("kudzu"));
    }

    #[test]
    fn absent_crop_is_left_to_the_validator() {
        let draft = field_args(None).to_draft().unwrap();
        assert_eq!(draft.crop_type, None);
    }
}
