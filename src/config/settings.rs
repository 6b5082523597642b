//! User settings for Budget Buddy
//!
//! Manages user preferences: the currency symbol used in advice text and the
//! parameters the classifier is fitted with.

use serde::{Deserialize, Serialize};

use super::paths::BuddyPaths;
use crate::error::BudgetError;

/// Parameters for fitting the decision-tree ensemble
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForestSettings {
    /// Number of trees in the ensemble
    pub n_trees: usize,
    /// Maximum depth of each tree (root is depth 0)
    pub max_depth: usize,
    /// Minimum number of samples a node needs before it may split
    pub min_samples_split: usize,
    /// Seed for bootstrap sampling and feature selection
    pub seed: u64,
}

impl Default for ForestSettings {
    fn default() -> Self {
        Self {
            n_trees: 50,
            max_depth: 6,
            min_samples_split: 2,
            seed: 42,
        }
    }
}

impl ForestSettings {
    /// Validate the parameters
    pub fn validate(&self) -> Result<(), BudgetError> {
        if self.n_trees == 0 {
            return Err(BudgetError::Validation(
                "Forest must contain at least one tree".into(),
            ));
        }
        if self.min_samples_split < 2 {
            return Err(BudgetError::Validation(
                "min_samples_split must be at least 2".into(),
            ));
        }
        Ok(())
    }
}

/// User settings for Budget Buddy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in advice text
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Classifier fitting parameters
    #[serde(default)]
    pub forest: ForestSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            forest: ForestSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BuddyPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.forest.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BuddyPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
