use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YieldUnit {
    #[serde(rename = "kg/acre")]
    KgPerAcre,
    #[serde(rename = "tons/hectare")]
    TonsPerHectare,
}

impl YieldUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            YieldUnit::KgPerAcre => "kg/acre",
            YieldUnit::TonsPerHectare => "tons/hectare",
        }
    }
}

impl std::fmt::Display for YieldUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of the yield estimator for one crop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_yield: u64,
    pub unit: YieldUnit,
    /// Confidence in [0.70, 1.00], rounded to 2 decimals.
    pub accuracy_score: f64,
    /// At most 5 entries, in rule-evaluation order.
    pub optimization_suggestions: Vec<String>,
}

impl PredictionResult {
    pub fn accuracy_percent(&self) -> u32 {
        (self.accuracy_score * 100.0).round() as u32
    }

    pub fn accuracy_label(&self) -> &'static str {
        match self.accuracy_percent() {
            90.. => "Excellent",
            75.. => "Good",
            _ => "Fair",
        }
    }

    pub fn accuracy_color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self.accuracy_percent() {
            90.. => Color::Green,
            75.. => Color::Yellow,
            _ => Color::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(accuracy: f64) -> PredictionResult {
        PredictionResult {
            predicted_yield: 23880,
            unit: YieldUnit::KgPerAcre,
            accuracy_score: accuracy,
            optimization_suggestions: vec![],
        }
    }

    #[test]
    fn accuracy_badges() {
        assert_eq!(result(0.95).accuracy_label(), "Excellent");
        assert_eq!(result(0.90).accuracy_label(), "Excellent");
        assert_eq!(result(0.79).accuracy_label(), "Good");
        assert_eq!(result(0.75).accuracy_label(), "Good");
        assert_eq!(result(0.70).accuracy_label(), "Fair");
    }

    #[test]
    fn unit_serializes_as_label() {
        let json = serde_json::to_string(&result(0.79)).unwrap();
        assert!(json.contains("\"unit\":\"kg/acre\""), "got {}", json);
    }
}
