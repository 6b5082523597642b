//! Model artifact persistence
//!
//! The fitted forest is stored as a single JSON file. Writes go through
//! [`write_json_atomic`] so a reader never sees a half-written model.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::file_io::{read_json_optional, write_json_atomic};
use crate::analysis::forest::RandomForest;
use crate::error::{BudgetError, BudgetResult};

/// Serialized form of a fitted classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// When the model was fitted
    pub trained_at: DateTime<Utc>,
    /// The fitted ensemble
    pub forest: RandomForest,
}

impl ModelArtifact {
    pub fn new(forest: RandomForest) -> Self {
        Self {
            trained_at: Utc::now(),
            forest,
        }
    }
}

/// Reads and writes the model artifact at a fixed path
#[derive(Debug, Clone)]
pub struct ModelStore {
    path: PathBuf,
}

impl ModelStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether an artifact has been written
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the artifact, or `None` if it has never been written
    ///
    /// A file that exists but cannot be parsed is a `Serialization` error.
    pub fn load(&self) -> BudgetResult<Option<ModelArtifact>> {
        let artifact: Option<ModelArtifact> =
            read_json_optional(&self.path).map_err(|e| match e {
                BudgetError::Storage(msg) => BudgetError::Serialization(msg),
                other => other,
            })?;

        if let Some(artifact) = &artifact {
            artifact.forest.validate().map_err(|e| {
                BudgetError::Serialization(format!("{}: {}", self.path.display(), e))
            })?;
        }

        Ok(artifact)
    }

    /// Write the artifact, replacing any previous one
    pub fn save(&self, artifact: &ModelArtifact) -> BudgetResult<()> {
        write_json_atomic(&self.path, artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::training_data::TRAINING_SET;
    use crate::config::ForestSettings;
    use tempfile::TempDir;

    fn artifact() -> ModelArtifact {
        let settings = ForestSettings {
            n_trees: 3,
            ..ForestSettings::default()
        };
        ModelArtifact::new(RandomForest::fit(&TRAINING_SET, &settings).unwrap())
    }

    #[test]
    fn test_load_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = ModelStore::new(temp_dir.path().join("model.json"));

        assert!(!store.exists());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = ModelStore::new(temp_dir.path().join("data").join("model.json"));
        let artifact = artifact();

        store.save(&artifact).unwrap();
        assert!(store.exists());

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, artifact);
    }

    #[test]
    fn test_corrupt_artifact_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("model.json");
        std::fs::write(&path, "{\"trained_at\": ").unwrap();

        let store = ModelStore::new(path);
        let err = store.load().unwrap_err();
        assert!(matches!(err, BudgetError::Serialization(_)));

        let message = err.to_string();
        assert!(message
            .starts_with("Model artifact is unreadable, retrain required: Failed to parse"));
        assert!(!message.contains("Storage error"));
    }

    #[test]
    fn test_empty_forest_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("model.json");
        std::fs::write(
            &path,
            r#"{"trained_at": "2025-01-01T00:00:00Z", "forest": {"trees": []}}"#,
        )
        .unwrap();

        let store = ModelStore::new(path);
        assert!(matches!(store.load(), Err(BudgetError::Serialization(_))));
    }
}
