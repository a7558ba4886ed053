use super::crop::CropType;
use serde::{Deserialize, Serialize};

/// How many reasons the display layer shows. The scorer itself appends a
/// reason per matched range, so the list can be longer.
pub const DISPLAYED_REASONS: usize = 3;

/// One crop's ranking entry from the recommender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub crop_type: CropType,
    pub predicted_yield: u64,
    /// Suitability in [0.10, 1.00], rounded to 2 decimals.
    pub suitability_score: f64,
    pub reasons: Vec<String>,
}

impl CropRecommendation {
    pub fn suitability_percent(&self) -> u32 {
        (self.suitability_score * 100.0).round() as u32
    }

    /// Reasons truncated for display.
    pub fn top_reasons(&self) -> &[String] {
        let n = self.reasons.len().min(DISPLAYED_REASONS);
        &self.reasons[..n]
    }

    pub fn suitability_label(&self) -> &'static str {
        if self.suitability_score >= 0.8 {
            "Excellent"
        } else if self.suitability_score >= 0.6 {
            "Good"
        } else if self.suitability_score >= 0.4 {
            "Moderate"
        } else {
            "Low"
        }
    }

    pub fn suitability_color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        if self.suitability_score >= 0.8 {
            Color::Green
        } else if self.suitability_score >= 0.6 {
            Color::Yellow
        } else {
            Color::LightRed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(score: f64, reasons: Vec<String>) -> CropRecommendation {
        CropRecommendation {
            crop_type: CropType::Wheat,
            predicted_yield: 20000,
            suitability_score: score,
            reasons,
        }
    }

    #[test]
    fn top_reasons_truncates_to_three() {
        let reasons: Vec<String> = (0..6).map(|i| format!("reason {}", i)).collect();
        let r = rec(0.9, reasons);
        assert_eq!(r.top_reasons().len(), 3);
        assert_eq!(r.top_reasons()[0], "reason 0");
        assert_eq!(r.top_reasons()[2], "reason 2");
    }

    #[test]
    fn top_reasons_keeps_short_lists() {
        let r = rec(0.9, vec!["only one".into()]);
        assert_eq!(r.top_reasons(), ["only one".to_string()]);
    }

    #[test]
    fn suitability_labels() {
        assert_eq!(rec(0.95, vec![]).suitability_label(), "Excellent");
        assert_eq!(rec(0.8, vec![]).suitability_label(), "Excellent");
        assert_eq!(rec(0.65, vec![]).suitability_label(), "Good");
        assert_eq!(rec(0.45, vec![]).suitability_label(), "Moderate");
        assert_eq!(rec(0.10, vec![]).suitability_label(), "Low");
    }
}
