use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropType {
    Wheat,
    Corn,
    Rice,
    Soybeans,
    Cotton,
    Barley,
    Sunflower,
}

/// Catalog order. The recommender evaluates crops in this order and ties in
/// suitability keep it.
pub const CROP_CATALOG: [CropType; 7] = [
    CropType::Wheat,
    CropType::Corn,
    CropType::Rice,
    CropType::Soybeans,
    CropType::Cotton,
    CropType::Barley,
    CropType::Sunflower,
];

impl CropType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropType::Wheat => "Wheat",
            CropType::Corn => "Corn",
            CropType::Rice => "Rice",
            CropType::Soybeans => "Soybeans",
            CropType::Cotton => "Cotton",
            CropType::Barley => "Barley",
            CropType::Sunflower => "Sunflower",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CropType::Wheat => "🌾",
            CropType::Corn => "🌽",
            CropType::Rice => "🍚",
            CropType::Soybeans => "🫘",
            CropType::Cotton => "☁",
            CropType::Barley => "🌿",
            CropType::Sunflower => "🌻",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wheat" => Some(CropType::Wheat),
            "corn" | "maize" => Some(CropType::Corn),
            "rice" => Some(CropType::Rice),
            "soybeans" | "soybean" | "soy" => Some(CropType::Soybeans),
            "cotton" => Some(CropType::Cotton),
            "barley" => Some(CropType::Barley),
            "sunflower" | "sunflowers" => Some(CropType::Sunflower),
            _ => None,
        }
    }

    /// Reference yield per acre before condition adjustments.
    pub const fn base_yield_kg_per_acre(&self) -> f64 {
        match self {
            CropType::Wheat => 2000.0,
            CropType::Corn => 2500.0,
            CropType::Rice => 1800.0,
            CropType::Soybeans => 1200.0,
            CropType::Cotton => 800.0,
            CropType::Barley => 1900.0,
            CropType::Sunflower => 1100.0,
        }
    }

    /// Static optimal-range profile used for suitability scoring.
    pub const fn profile(&self) -> CropProfile {
        match self {
            CropType::Wheat => CropProfile {
                ph: (6.0, 7.5),
                temperature_c: (15.0, 25.0),
                rainfall_mm: (250.0, 500.0),
                humidity_pct: (40.0, 70.0),
                nitrogen_need: NitrogenNeed::Medium,
            },
            CropType::Corn => CropProfile {
                ph: (5.8, 7.0),
                temperature_c: (20.0, 30.0),
                rainfall_mm: (400.0, 600.0),
                humidity_pct: (50.0, 80.0),
                nitrogen_need: NitrogenNeed::High,
            },
            CropType::Rice => CropProfile {
                ph: (5.5, 6.5),
                temperature_c: (22.0, 32.0),
                rainfall_mm: (500.0, 800.0),
                humidity_pct: (70.0, 90.0),
                nitrogen_need: NitrogenNeed::High,
            },
            CropType::Soybeans => CropProfile {
                ph: (6.0, 7.0),
                temperature_c: (20.0, 30.0),
                rainfall_mm: (300.0, 500.0),
                humidity_pct: (50.0, 75.0),
                nitrogen_need: NitrogenNeed::Low,
            },
            CropType::Cotton => CropProfile {
                ph: (5.8, 8.0),
                temperature_c: (20.0, 35.0),
                rainfall_mm: (400.0, 700.0),
                humidity_pct: (40.0, 65.0),
                nitrogen_need: NitrogenNeed::Medium,
            },
            CropType::Barley => CropProfile {
                ph: (6.0, 8.0),
                temperature_c: (12.0, 22.0),
                rainfall_mm: (200.0, 400.0),
                humidity_pct: (40.0, 65.0),
                nitrogen_need: NitrogenNeed::Medium,
            },
            CropType::Sunflower => CropProfile {
                ph: (6.0, 7.5),
                temperature_c: (18.0, 28.0),
                rainfall_mm: (300.0, 500.0),
                humidity_pct: (40.0, 70.0),
                nitrogen_need: NitrogenNeed::Low,
            },
        }
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optimal growing conditions for one crop. Ranges are inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropProfile {
    pub ph: (f64, f64),
    pub temperature_c: (f64, f64),
    pub rainfall_mm: (f64, f64),
    pub humidity_pct: (f64, f64),
    pub nitrogen_need: NitrogenNeed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NitrogenNeed {
    Low,
    Medium,
    High,
}

impl NitrogenNeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            NitrogenNeed::Low => "low",
            NitrogenNeed::Medium => "medium",
            NitrogenNeed::High => "high",
        }
    }

    /// Nitrogen a crop of this tier wants available, in kg/ha.
    pub const fn threshold_kg_ha(&self) -> f64 {
        match self {
            NitrogenNeed::Low => 40.0,
            NitrogenNeed::Medium => 60.0,
            NitrogenNeed::High => 80.0,
        }
    }
}

impl std::fmt::Display for NitrogenNeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_type_from_str_valid() {
        assert_eq!(CropType::from_str("wheat"), Some(CropType::Wheat));
        assert_eq!(CropType::from_str("Wheat"), Some(CropType::Wheat));
        assert_eq!(CropType::from_str("maize"), Some(CropType::Corn));
        assert_eq!(CropType::from_str("soy"), Some(CropType::Soybeans));
        assert_eq!(CropType::from_str("SUNFLOWER"), Some(CropType::Sunflower));
    }

    #[test]
    fn crop_type_from_str_invalid() {
        assert_eq!(CropType::from_str("millet"), None);
        assert_eq!(CropType::from_str(""), None);
        assert_eq!(CropType::from_str("grass"), None);
    }

    #[test]
    fn crop_type_round_trip() {
        for crop in CROP_CATALOG {
            assert_eq!(
                CropType::from_str(crop.as_str()),
                Some(crop),
                "Round-trip failed for {:?}",
                crop
            );
        }
    }

    #[test]
    fn catalog_covers_all_crops_once() {
        for (i, a) in CROP_CATALOG.iter().enumerate() {
            for b in &CROP_CATALOG[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(CROP_CATALOG.len(), 7);
        assert_eq!(CROP_CATALOG[0], CropType::Wheat);
        assert_eq!(CROP_CATALOG[6], CropType::Sunflower);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&CropType::Soybeans).unwrap();
        assert_eq!(json, "\"soybeans\"");
        let back: CropType = serde_json::from_str("\"barley\"").unwrap();
        assert_eq!(back, CropType::Barley);
    }

    #[test]
    fn profiles_are_well_formed() {
        for crop in CROP_CATALOG {
            let p = crop.profile();
            assert!(p.ph.0 < p.ph.1, "{:?} pH range inverted", crop);
            assert!(p.temperature_c.0 < p.temperature_c.1);
            assert!(p.rainfall_mm.0 < p.rainfall_mm.1);
            assert!(p.humidity_pct.0 < p.humidity_pct.1);
            assert!(crop.base_yield_kg_per_acre() > 0.0);
        }
    }

    #[test]
    fn nitrogen_tiers_ascend() {
        assert!(
            NitrogenNeed::Low.threshold_kg_ha() < NitrogenNeed::Medium.threshold_kg_ha()
                && NitrogenNeed::Medium.threshold_kg_ha() < NitrogenNeed::High.threshold_kg_ha()
        );
    }
}
