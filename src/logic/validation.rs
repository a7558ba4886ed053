use crate::models::{FieldConditions, FieldConditionsDraft, FieldData, FieldDataDraft};
use thiserror::Error;

/// Returned by value when a required field is absent. Carries the name of the
/// FIRST missing field in declaration order, so messages are reproducible.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Missing field: {field}")]
pub struct ValidationError {
    pub field: &'static str,
}

impl ValidationError {
    fn missing(field: &'static str) -> Self {
        Self { field }
    }
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::missing(field))
}

fn require_label(value: &Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(ValidationError::missing(field)),
    }
}

/// Single-crop variant: checks every field of [`FieldDataDraft`] including the
/// crop type, in declaration order.
pub fn validate_field_data(draft: &FieldDataDraft) -> Result<FieldData, ValidationError> {
    Ok(FieldData {
        crop_type: require(draft.crop_type, "crop_type")?,
        season: require_label(&draft.season, "season")?,
        area: require(draft.area, "area")?,
        soil_ph: require(draft.soil_ph, "soil_pH")?,
        nitrogen: require(draft.nitrogen, "nitrogen")?,
        phosphorus: require(draft.phosphorus, "phosphorus")?,
        potassium: require(draft.potassium, "potassium")?,
        rainfall: require(draft.rainfall, "rainfall")?,
        temperature: require(draft.temperature, "temperature")?,
        humidity: require(draft.humidity, "humidity")?,
    })
}

/// Multi-crop variant: same checks minus the crop type.
pub fn validate_field_conditions(
    draft: &FieldConditionsDraft,
) -> Result<FieldConditions, ValidationError> {
    Ok(FieldConditions {
        season: require_label(&draft.season, "season")?,
        area: require(draft.area, "area")?,
        soil_ph: require(draft.soil_ph, "soil_pH")?,
        nitrogen: require(draft.nitrogen, "nitrogen")?,
        phosphorus: require(draft.phosphorus, "phosphorus")?,
        potassium: require(draft.potassium, "potassium")?,
        rainfall: require(draft.rainfall, "rainfall")?,
        temperature: require(draft.temperature, "temperature")?,
        humidity: require(draft.humidity, "humidity")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CropType;

    fn full_draft() -> FieldDataDraft {
        FieldDataDraft {
            crop_type: Some(CropType::Wheat),
            season: Some("summer".into()),
            area: Some(10.0),
            soil_ph: Some(6.8),
            nitrogen: Some(55.0),
            phosphorus: Some(35.0),
            potassium: Some(40.0),
            rainfall: Some(320.0),
            temperature: Some(22.0),
            humidity: Some(65.0),
        }
    }

    #[test]
    fn complete_draft_passes() {
        let data = validate_field_data(&full_draft()).unwrap();
        assert_eq!(data.crop_type, CropType::Wheat);
        assert_eq!(data.area, 10.0);
    }

    #[test]
    fn each_missing_field_is_named() {
        let cases: [(&str, fn(&mut FieldDataDraft)); 10] = [
            ("crop_type", |d| d.crop_type = None),
            ("season", |d| d.season = None),
            ("area", |d| d.area = None),
            ("soil_pH", |d| d.soil_ph = None),
            ("nitrogen", |d| d.nitrogen = None),
            ("phosphorus", |d| d.phosphorus = None),
            ("potassium", |d| d.potassium = None),
            ("rainfall", |d| d.rainfall = None),
            ("temperature", |d| d.temperature = None),
            ("humidity", |d| d.humidity = None),
        ];

        for (field, clear) in cases {
            let mut draft = full_draft();
            clear(&mut draft);
            let err = validate_field_data(&draft).unwrap_err();
            assert_eq!(err.field, field);
            assert_eq!(err.to_string(), format!("Missing field: {}", field));
        }
    }

    #[test]
    fn first_missing_field_wins() {
        let mut draft = full_draft();
        draft.area = None;
        draft.rainfall = None;
        draft.humidity = None;
        assert_eq!(validate_field_data(&draft).unwrap_err().field, "area");

        draft.area = Some(10.0);
        assert_eq!(validate_field_data(&draft).unwrap_err().field, "rainfall");
    }

    #[test]
    fn blank_season_counts_as_missing() {
        let mut draft = full_draft();
        draft.season = Some("".into());
        assert_eq!(validate_field_data(&draft).unwrap_err().field, "season");

        draft.season = Some("   ".into());
        assert_eq!(validate_field_data(&draft).unwrap_err().field, "season");
    }

    #[test]
    fn conditions_variant_skips_crop_type() {
        let draft = FieldConditionsDraft::default();
        // First field in declaration order is season, not crop_type.
        assert_eq!(
            validate_field_conditions(&draft).unwrap_err().field,
            "season"
        );
    }

    #[test]
    fn conditions_variant_passes_when_complete() {
        let draft = FieldConditionsDraft {
            season: Some("monsoon".into()),
            area: Some(2.5),
            soil_ph: Some(5.9),
            nitrogen: Some(70.0),
            phosphorus: Some(28.0),
            potassium: Some(31.0),
            rainfall: Some(510.0),
            temperature: Some(27.0),
            humidity: Some(80.0),
        };
        let conditions = validate_field_conditions(&draft).unwrap();
        assert_eq!(conditions.season, "monsoon");
        assert_eq!(conditions.rainfall, 510.0);
    }
}
