//! User settings for Tally
//!
//! Manages preferences for currency display, tip defaults, the starting
//! category list and the export format.

use serde::{Deserialize, Serialize};

use super::paths::TallyPaths;
use crate::error::TallyError;
use crate::models::category::DEFAULT_CATEGORIES;

/// Export document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// JSON document (can be loaded back)
    #[default]
    Json,
    /// YAML document, human-readable
    Yaml,
    /// Flat CSV of all line items
    Csv,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }
}

/// User settings for Tally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Tip percentage used when none is given
    #[serde(default = "default_tip_percent")]
    pub default_tip_percent: f64,

    /// Quick-pick tip percentages
    #[serde(default = "default_tip_presets")]
    pub tip_presets: Vec<f64>,

    /// Soft upper bound for tip percentages; larger values only warn
    #[serde(default = "default_max_tip_percent")]
    pub max_tip_percent: f64,

    /// Categories a new session starts with
    #[serde(default = "default_categories")]
    pub default_categories: Vec<String>,

    /// Format used by `export` when none is given
    #[serde(default)]
    pub export_format: ExportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_tip_percent() -> f64 {
    18.0
}

fn default_tip_presets() -> Vec<f64> {
    vec![15.0, 18.0, 20.0, 25.0]
}

fn default_max_tip_percent() -> f64 {
    50.0
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_tip_percent: default_tip_percent(),
            tip_presets: default_tip_presets(),
            max_tip_percent: default_max_tip_percent(),
            default_categories: default_categories(),
            export_format: ExportFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TallyPaths) -> Result<Self, TallyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TallyError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| TallyError::Config(format!("Failed to parse settings file: {}", e)))?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TallyPaths) -> Result<(), TallyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TallyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TallyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject settings the calculators cannot work with
    pub fn validate(&self) -> Result<(), TallyError> {
        let bad_percent = |p: f64| !p.is_finite() || p < 0.0;

        if bad_percent(self.default_tip_percent) {
            return Err(TallyError::Config(format!(
                "default_tip_percent must be a non-negative number (got {})",
                self.default_tip_percent
            )));
        }

        if let Some(p) = self.tip_presets.iter().copied().find(|p| bad_percent(*p)) {
            return Err(TallyError::Config(format!(
                "tip_presets must be non-negative numbers (got {})",
                p
            )));
        }

        if bad_percent(self.max_tip_percent) {
            return Err(TallyError::Config(format!(
                "max_tip_percent must be a non-negative number (got {})",
                self.max_tip_percent
            )));
        }

        Ok(())
    }

    /// Look up a quick-pick tip by its 1-based position
    pub fn tip_preset(&self, position: usize) -> Option<f64> {
        position
            .checked_sub(1)
            .and_then(|i| self.tip_presets.get(i))
            .copied()
    }
}
