//! Prediction orchestration
//!
//! [`BudgetAi`] ties aggregation, classification and advice together. It is
//! constructed once and handed to whatever serves requests.

use serde::Serialize;
use tracing::{info, warn};

use super::advice::{AdviceGenerator, Suggestions};
use super::aggregator::{aggregate, FinancialSummary, SpendingBreakdown};
use super::classifier::{Classifier, ModelStatus, TrainingReport};
use super::features::FeatureVector;
use super::tier::Tier;
use crate::config::{BuddyPaths, Settings};
use crate::error::{BudgetError, BudgetResult, ErrorKind};
use crate::models::Transaction;
use crate::storage::ModelStore;

/// A successful prediction
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub tier: Tier,
    pub profile_name: String,
    pub suggestions: Suggestions,
    pub summary: FinancialSummary,
    pub breakdown: SpendingBreakdown,
    pub features: FeatureVector,
    pub transaction_count: usize,
}

/// Structured failure returned in place of an error
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    pub error_kind: ErrorKind,
    pub error: String,
}

impl From<&BudgetError> for Failure {
    fn from(err: &BudgetError) -> Self {
        Self {
            error_kind: err.kind(),
            error: err.to_string(),
        }
    }
}

impl From<Failure> for BudgetError {
    fn from(failure: Failure) -> Self {
        Self::Reported {
            kind: failure.error_kind,
            message: failure.error,
        }
    }
}

/// Payload handed back to the presentation layer
///
/// Serializes as the body of either variant plus a `success` flag.
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    Success(T),
    Failure(Failure),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(f) => Some(f),
        }
    }

    /// Turn the payload back into a result, keeping the kind and message
    pub fn into_result(self) -> BudgetResult<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(f) => Err(f.into()),
        }
    }
}

impl<T> From<BudgetResult<T>> for Outcome<T> {
    fn from(result: BudgetResult<T>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(Failure::from(&err)),
        }
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Flagged<'a, B> {
            success: bool,
            #[serde(flatten)]
            body: &'a B,
        }

        match self {
            Self::Success(body) => Flagged {
                success: true,
                body,
            }
            .serialize(serializer),
            Self::Failure(body) => Flagged {
                success: false,
                body,
            }
            .serialize(serializer),
        }
    }
}

/// Result of the training trigger
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trained {
    pub message: String,
    #[serde(flatten)]
    pub report: TrainingReport,
}

/// The classification-and-suggestion engine
pub struct BudgetAi {
    classifier: Classifier,
    advice: AdviceGenerator,
}

impl BudgetAi {
    pub fn new(classifier: Classifier, advice: AdviceGenerator) -> Self {
        Self { classifier, advice }
    }

    /// Build the engine from configured paths and settings
    pub fn from_config(paths: &BuddyPaths, settings: &Settings) -> Self {
        Self::new(
            Classifier::new(ModelStore::new(paths.model_file()), settings.forest),
            AdviceGenerator::new(settings.currency_symbol.clone()),
        )
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Fit and persist the classifier
    pub fn train(&self) -> BudgetResult<TrainingReport> {
        self.classifier.train()
    }

    /// Training trigger for callers that render a success flag and message
    pub fn train_outcome(&self) -> Outcome<Trained> {
        let result = self.train().map(|report| Trained {
            message: report.message(),
            report,
        });
        if let Err(err) = &result {
            warn!(error = %err, "Training failed");
        }
        result.into()
    }

    pub fn status(&self) -> BudgetResult<ModelStatus> {
        self.classifier.status()
    }

    /// Classify the user's finances and generate advice
    ///
    /// Fails with `ModelNotTrained` before looking at the transactions, then
    /// with `NoTransactions` for an empty list.
    pub fn predict_and_suggest(
        &self,
        transactions: &[Transaction],
        total_income: f64,
        total_expenses: f64,
    ) -> BudgetResult<Prediction> {
        if !self.classifier.is_ready()? {
            return Err(BudgetError::ModelNotTrained);
        }
        if transactions.is_empty() {
            return Err(BudgetError::NoTransactions);
        }

        let (summary, breakdown) = aggregate(transactions, total_income, total_expenses);
        let features = FeatureVector::from(&summary);
        let tier = self.classifier.predict(&features)?;
        let suggestions = self.advice.generate(tier, &summary, &breakdown);

        info!(
            tier = tier.label(),
            transactions = transactions.len(),
            "Generated suggestions"
        );

        Ok(Prediction {
            tier,
            profile_name: tier.profile_name().to_string(),
            suggestions,
            summary,
            breakdown,
            features,
            transaction_count: transactions.len(),
        })
    }

    /// Like [`predict_and_suggest`](Self::predict_and_suggest), with errors
    /// folded into a failure payload
    pub fn suggest(
        &self,
        transactions: &[Transaction],
        total_income: f64,
        total_expenses: f64,
    ) -> Outcome<Prediction> {
        let result = self.predict_and_suggest(transactions, total_income, total_expenses);
        if let Err(err) = &result {
            warn!(kind = ?err.kind(), error = %err, "Prediction failed");
        }
        result.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Totals;
    use tempfile::TempDir;

    fn engine(temp_dir: &TempDir) -> BudgetAi {
        let paths = BuddyPaths::with_base_dir(temp_dir.path().to_path_buf());
        BudgetAi::from_config(&paths, &Settings::default())
    }

    fn overspender() -> Vec<Transaction> {
        vec![
            Transaction::income("Salary", 1000.0),
            Transaction::expense("Food", 450.0),
            Transaction::expense("Entertainment", 300.0),
            Transaction::expense("Transport", 200.0),
            Transaction::expense("Bills", 550.0),
        ]
    }

    fn saver() -> Vec<Transaction> {
        vec![
            Transaction::income("Salary", 1000.0),
            Transaction::expense("Food", 170.0),
            Transaction::expense("Entertainment", 50.0),
            Transaction::expense("Transport", 40.0),
            Transaction::expense("Bills", 190.0),
        ]
    }

    #[test]
    fn test_untrained_fails_before_empty_check() {
        let temp_dir = TempDir::new().unwrap();
        let engine = engine(&temp_dir);

        let err = engine.predict_and_suggest(&[], 0.0, 0.0).unwrap_err();
        assert!(matches!(err, BudgetError::ModelNotTrained));
    }

    #[test]
    fn test_empty_transactions() {
        let temp_dir = TempDir::new().unwrap();
        let engine = engine(&temp_dir);
        engine.train().unwrap();

        let outcome = engine.suggest(&[], 1000.0, 0.0);
        assert_eq!(
            outcome.failure().map(|f| f.error_kind),
            Some(ErrorKind::NoTransactions)
        );
    }

    #[test]
    fn test_overspender_is_critical() {
        let temp_dir = TempDir::new().unwrap();
        let engine = engine(&temp_dir);
        engine.train().unwrap();

        let transactions = overspender();
        let totals = Totals::from_transactions(&transactions);
        let prediction = engine
            .predict_and_suggest(&transactions, totals.income, totals.expenses)
            .unwrap();

        assert_eq!(prediction.features.0, [-50.0, 45.0, 30.0, 20.0, 150.0]);
        assert_eq!(prediction.tier, Tier::Critical);
        assert_eq!(prediction.profile_name, "Critical - Immediate Action Required");
        assert_eq!(prediction.transaction_count, 5);
        assert!(prediction.suggestions.savings_tips[0].contains("URGENT"));
    }

    #[test]
    fn test_saver_is_excellent() {
        let temp_dir = TempDir::new().unwrap();
        let engine = engine(&temp_dir);
        engine.train().unwrap();

        let transactions = saver();
        let totals = Totals::from_transactions(&transactions);
        let prediction = engine
            .predict_and_suggest(&transactions, totals.income, totals.expenses)
            .unwrap();

        assert_eq!(prediction.features.0, [55.0, 17.0, 5.0, 4.0, 45.0]);
        assert_eq!(prediction.tier, Tier::Excellent);
        assert_eq!(prediction.breakdown.total(), totals.expenses);
    }

    #[test]
    fn test_restart_reproduces_prediction() {
        let temp_dir = TempDir::new().unwrap();
        let transactions = vec![
            Transaction::income("Salary", 1000.0),
            Transaction::expense("Food", 310.0),
            Transaction::expense("Entertainment", 160.0),
            Transaction::expense("Transport", 130.0),
            Transaction::expense("Other", 180.0),
        ];
        let totals = Totals::from_transactions(&transactions);

        let first = engine(&temp_dir);
        first.train().unwrap();
        let before = first
            .predict_and_suggest(&transactions, totals.income, totals.expenses)
            .unwrap();

        let second = engine(&temp_dir);
        let after = second
            .predict_and_suggest(&transactions, totals.income, totals.expenses)
            .unwrap();

        assert_eq!(before.tier, after.tier);
        assert_eq!(before.suggestions, after.suggestions);
    }

    #[test]
    fn test_failure_round_trips_into_error() {
        let temp_dir = TempDir::new().unwrap();
        let engine = engine(&temp_dir);

        let err = engine.suggest(&saver(), 1000.0, 450.0).into_result().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ModelNotTrained);
        assert_eq!(err.to_string(), BudgetError::ModelNotTrained.to_string());
        assert!(err.needs_training());

        engine.train().unwrap();
        let prediction = engine.suggest(&saver(), 1000.0, 450.0).into_result().unwrap();
        assert_eq!(prediction.tier, Tier::Excellent);
    }

    #[test]
    fn test_outcome_payload_shape() {
        let temp_dir = TempDir::new().unwrap();
        let engine = engine(&temp_dir);

        let failure = serde_json::to_value(engine.suggest(&saver(), 1000.0, 450.0)).unwrap();
        assert_eq!(failure["success"], false);
        assert_eq!(failure["errorKind"], "model_not_trained");

        let trained = serde_json::to_value(engine.train_outcome()).unwrap();
        assert_eq!(trained["success"], true);
        assert_eq!(trained["trees"], 50);

        let success = serde_json::to_value(engine.suggest(&saver(), 1000.0, 450.0)).unwrap();
        assert_eq!(success["success"], true);
        assert_eq!(success["tier"], 4);
        assert_eq!(success["profileName"], "Excellent Budgeting");
        assert!(success["suggestions"]["savingsTips"].is_array());
        assert_eq!(success["breakdown"]["Food"], 170.0);
        assert_eq!(success["summary"]["savingsRatePct"], 55.0);
    }
}
