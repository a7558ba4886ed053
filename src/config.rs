use crate::error::{AgroPredictError, Result};
use chrono::Datelike;
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Delay before results are shown, mimicking analysis time. Presentation
/// only; the computation itself is instant.
const DEFAULT_PROCESSING_DELAY_MS: u64 = 800;

pub const SEASON_OPTIONS: &[&str] = &["spring", "summer", "autumn", "winter", "monsoon"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub farm: FarmConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FarmConfig {
    pub name: String,
    /// Prefilled into the season select; derived from the calendar if unset.
    pub default_season: Option<String>,
    /// Prefilled into the area input.
    pub default_area_acres: Option<f64>,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            name: "My Farm".to_string(),
            default_season: None,
            default_area_acres: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

fn default_processing_delay_ms() -> u64 {
    DEFAULT_PROCESSING_DELAY_MS
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: DEFAULT_PROCESSING_DELAY_MS,
        }
    }
}

/// Growing season suggested for a given calendar month (northern hemisphere).
pub fn season_for_month(month: u32) -> &'static str {
    match month {
        3..=5 => "spring",
        6..=8 => "summer",
        9..=11 => "autumn",
        _ => "winter",
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(AgroPredictError::Config(format!(
                "Config file not found at {:?}. Run `agropredict init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AgroPredictError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| AgroPredictError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("agropredict").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| AgroPredictError::Config("Cannot determine config directory".into()))?
            .join("agropredict")
            .join("config.yaml");
        Ok(default_path)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/agropredict/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgroPredictError::Config("Cannot determine config directory".into()))?
            .join("agropredict");
        Ok(config_dir.join("config.yaml"))
    }

    /// Season prefilled into the forms: configured value, else by calendar.
    pub fn default_season(&self) -> String {
        match &self.farm.default_season {
            Some(s) if !s.trim().is_empty() => s.clone(),
            _ => season_for_month(chrono::Local::now().month()).to_string(),
        }
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("No configuration found. Let's set up AgroPredict!");
        println!();

        println!("Farm Profile");
        let farm_name: String = Input::new()
            .with_prompt("  Farm name")
            .default("My Farm".into())
            .interact_text()
            .map_err(|e| AgroPredictError::Config(format!("Input error: {}", e)))?;

        let default_season: String = Input::new()
            .with_prompt("  Default season (spring, summer, autumn, winter, monsoon)")
            .default(season_for_month(chrono::Local::now().month()).into())
            .interact_text()
            .map_err(|e| AgroPredictError::Config(format!("Input error: {}", e)))?;

        let default_area: f64 = Input::new()
            .with_prompt("  Default field area (acres)")
            .default(10.0)
            .interact_text()
            .map_err(|e| AgroPredictError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            farm: FarmConfig {
                name: farm_name,
                default_season: Some(default_season),
                default_area_acres: Some(default_area),
            },
            ui: UiConfig::default(),
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AgroPredictError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# AgroPredict Configuration\n# Generated by `agropredict init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_for_month_covers_the_year() {
        assert_eq!(season_for_month(3), "spring");
        assert_eq!(season_for_month(5), "spring");
        assert_eq!(season_for_month(6), "summer");
        assert_eq!(season_for_month(8), "summer");
        assert_eq!(season_for_month(9), "autumn");
        assert_eq!(season_for_month(11), "autumn");
        assert_eq!(season_for_month(12), "winter");
        assert_eq!(season_for_month(1), "winter");
        assert_eq!(season_for_month(2), "winter");
    }

    #[test]
    fn configured_season_wins_over_calendar() {
        let mut config = Config::default();
        config.farm.default_season = Some("monsoon".into());
        assert_eq!(config.default_season(), "monsoon");

        config.farm.default_season = Some("  ".into());
        assert!(SEASON_OPTIONS.contains(&config.default_season().as_str()));
    }

    #[test]
    fn substitute_env_vars_replaces_known_vars() {
        std::env::set_var("AGROPREDICT_TEST_FARM", "North Field");
        let yaml = "farm:\n  name: ${AGROPREDICT_TEST_FARM}\n";
        let substituted = Config::substitute_env_vars(yaml);
        assert!(substituted.contains("North Field"));
        assert!(!substituted.contains("AGROPREDICT_TEST_FARM"));
        std::env::remove_var("AGROPREDICT_TEST_FARM");
    }

    #[test]
    fn substitute_env_vars_leaves_unknown_vars() {
        let yaml = "farm:\n  name: ${AGROPREDICT_TEST_UNSET_VAR}\n";
        let substituted = Config::substitute_env_vars(yaml);
        assert!(substituted.contains("${AGROPREDICT_TEST_UNSET_VAR}"));
    }

    #[test]
    fn parses_minimal_yaml() {
        let config: Config = serde_yaml::from_str("farm:\n  name: Test\n").unwrap();
        assert_eq!(config.farm.name, "Test");
        assert_eq!(config.ui.processing_delay_ms, 800);
    }
}
