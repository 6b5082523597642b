//! Classifier service
//!
//! Owns the in-memory forest and its artifact. The model moves from
//! untrained to trained either through [`Classifier::train`] or by loading a
//! previously written artifact on first use. One mutex guards load, train and
//! predict so the handle swap is never observed half-done.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use super::features::FeatureVector;
use super::forest::RandomForest;
use super::tier::Tier;
use super::training_data::TRAINING_SET;
use crate::config::ForestSettings;
use crate::error::{BudgetError, BudgetResult};
use crate::storage::{ModelArtifact, ModelStore};

/// Outcome of a training run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingReport {
    pub trees: usize,
    pub examples: usize,
    pub artifact_path: PathBuf,
    pub trained_at: DateTime<Utc>,
}

impl TrainingReport {
    pub fn message(&self) -> String {
        format!(
            "AI model trained successfully! Model saved to {}",
            self.artifact_path.display()
        )
    }
}

/// Snapshot of the classifier lifecycle
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelStatus {
    pub in_memory: bool,
    pub artifact_exists: bool,
    pub artifact_path: PathBuf,
    pub trees: Option<usize>,
    pub trained_at: Option<DateTime<Utc>>,
}

/// The process-wide classifier, constructed once and shared by reference
pub struct Classifier {
    store: ModelStore,
    settings: ForestSettings,
    model: Mutex<Option<ModelArtifact>>,
}

impl Classifier {
    /// Create an untrained classifier backed by the given artifact store
    pub fn new(store: ModelStore, settings: ForestSettings) -> Self {
        Self {
            store,
            settings,
            model: Mutex::new(None),
        }
    }

    fn lock(&self) -> BudgetResult<MutexGuard<'_, Option<ModelArtifact>>> {
        self.model
            .lock()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire model lock: {}", e)))
    }

    /// Load the artifact into `slot` if nothing is in memory yet
    ///
    /// Returns whether a model is available afterwards.
    fn ensure_loaded(&self, slot: &mut Option<ModelArtifact>) -> BudgetResult<bool> {
        if slot.is_some() {
            return Ok(true);
        }

        match self.store.load()? {
            Some(artifact) => {
                info!(
                    path = %self.store.path().display(),
                    trees = artifact.forest.len(),
                    "Loaded model artifact"
                );
                *slot = Some(artifact);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Fit the forest on the fixed training table and persist it
    ///
    /// Replaces both the in-memory model and the artifact.
    pub fn train(&self) -> BudgetResult<TrainingReport> {
        let mut slot = self.lock()?;

        let forest = RandomForest::fit(&TRAINING_SET, &self.settings)?;
        let artifact = ModelArtifact::new(forest);
        self.store.save(&artifact)?;

        let report = TrainingReport {
            trees: artifact.forest.len(),
            examples: TRAINING_SET.len(),
            artifact_path: self.store.path().to_path_buf(),
            trained_at: artifact.trained_at,
        };
        *slot = Some(artifact);

        info!(
            trees = report.trees,
            seed = self.settings.seed,
            path = %report.artifact_path.display(),
            "Trained classifier"
        );
        Ok(report)
    }

    /// Load the artifact from disk, replacing any in-memory model
    ///
    /// Returns `false` if no artifact exists. A missing or unreadable
    /// artifact leaves the in-memory model untouched.
    pub fn load(&self) -> BudgetResult<bool> {
        let mut slot = self.lock()?;
        match self.store.load()? {
            Some(artifact) => {
                info!(
                    path = %self.store.path().display(),
                    trees = artifact.forest.len(),
                    "Reloaded model artifact"
                );
                *slot = Some(artifact);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Check whether a model is in memory or loadable from disk
    pub fn is_ready(&self) -> BudgetResult<bool> {
        let mut slot = self.lock()?;
        self.ensure_loaded(&mut slot)
    }

    /// Classify a feature vector
    ///
    /// Loads the artifact lazily on first use. Fails with `ModelNotTrained`
    /// when there is neither an in-memory model nor an artifact.
    pub fn predict(&self, features: &FeatureVector) -> BudgetResult<Tier> {
        let mut slot = self.lock()?;
        if !self.ensure_loaded(&mut slot)? {
            return Err(BudgetError::ModelNotTrained);
        }

        let artifact = slot.as_ref().ok_or(BudgetError::ModelNotTrained)?;
        let votes = artifact.forest.votes(features);
        let tier = artifact.forest.predict(features);
        debug!(?features, ?votes, tier = tier.label(), "Classified features");
        Ok(tier)
    }

    /// Report lifecycle state without loading anything
    pub fn status(&self) -> BudgetResult<ModelStatus> {
        let slot = self.lock()?;
        Ok(ModelStatus {
            in_memory: slot.is_some(),
            artifact_exists: self.store.exists(),
            artifact_path: self.store.path().to_path_buf(),
            trees: slot.as_ref().map(|a| a.forest.len()),
            trained_at: slot.as_ref().map(|a| a.trained_at),
        })
    }
}
