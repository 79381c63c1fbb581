//! Model service
//!
//! Single-model prediction, best-effort ensemble prediction and consensus
//! over a shared, read-only model registry.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use serde::Serialize;
use std::sync::Arc;
use subtype_domain::{
    ClassLabels, Classifier, ClassifierError, ConsensusSummary, FeatureTable, ModelRegistry,
    PredictionRecord, ProbabilityDistribution, ProbabilitySupport,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while predicting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("Model '{0}' not found")]
    ModelNotFound(String),

    #[error("Prediction failed for model '{model}': {source}")]
    PredictionFailed {
        model: String,
        #[source]
        source: ClassifierError,
    },

    #[error("No model produced a prediction")]
    EmptyEnsemble,
}

/// Who is responsible for an error, for mapping onto a transport's status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller asked for something that does not exist
    Client,
    /// A single model failed
    ModelFailure,
    /// No usable model is available
    Availability,
}

impl PredictionError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PredictionError::ModelNotFound(_) => ErrorCategory::Client,
            PredictionError::PredictionFailed { .. } => ErrorCategory::ModelFailure,
            PredictionError::EmptyEnsemble => ErrorCategory::Availability,
        }
    }
}

/// Result of running every registered model on one input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    /// Successful records, in registry order
    pub records: Vec<PredictionRecord>,
    /// Names of the models that failed
    pub failed: Vec<String>,
}

/// Catalogue entry for one registered model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescription {
    pub name: String,
    pub kind: String,
    pub probability: ProbabilitySupport,
}

/// Prediction engine over a model registry
///
/// The registry and the label mapping are built once and never mutated
/// afterwards, so a service can be shared across tasks behind an `Arc`.
pub struct ModelService {
    registry: Arc<ModelRegistry>,
    labels: Arc<ClassLabels>,
}

impl ModelService {
    /// Create a service over a registry and the class label mapping
    pub fn new(registry: ModelRegistry, labels: ClassLabels) -> Self {
        Self {
            registry: Arc::new(registry),
            labels: Arc::new(labels),
        }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn labels(&self) -> &ClassLabels {
        &self.labels
    }

    pub(crate) fn shared_labels(&self) -> Arc<ClassLabels> {
        Arc::clone(&self.labels)
    }

    /// Predict with one named model
    ///
    /// Fails with [`PredictionError::ModelNotFound`] for an unknown name and
    /// [`PredictionError::PredictionFailed`] when the model's `predict` fails.
    /// Probability extraction never fails the call.
    pub fn predict_with_model(
        &self,
        model_name: &str,
        features: &FeatureTable,
    ) -> Result<PredictionRecord, PredictionError> {
        let classifier = self
            .registry
            .get(model_name)
            .ok_or_else(|| PredictionError::ModelNotFound(model_name.to_string()))?;

        predict_one(model_name, classifier.as_ref(), features, &self.labels)
    }

    /// Predict with every registered model, skipping the ones that fail
    ///
    /// Returns an empty list when every model fails.
    pub fn predict_all(&self, features: &FeatureTable) -> Vec<PredictionRecord> {
        self.predict_all_with_progress(features, &NoProgress)
            .records
    }

    /// Predict with every registered model, reporting progress per model
    pub fn predict_all_with_progress(
        &self,
        features: &FeatureTable,
        progress: &dyn ProgressNotifier,
    ) -> BatchOutcome {
        let total = self.registry.len();
        info!("Running {} models", total);
        progress.on_batch_start(total);

        let mut outcome = BatchOutcome::default();
        for model in self.registry.iter() {
            match predict_one(&model.name, model.classifier.as_ref(), features, &self.labels) {
                Ok(record) => {
                    progress.on_model_complete(&model.name, true);
                    outcome.records.push(record);
                }
                Err(e) => {
                    warn!("Model {} failed: {}", model.name, e);
                    progress.on_model_complete(&model.name, false);
                    outcome.failed.push(model.name.clone());
                }
            }
        }

        progress.on_batch_complete(outcome.records.len(), total);
        outcome
    }

    /// Resolve the consensus of a batch of records
    pub fn calculate_consensus(&self, records: &[PredictionRecord]) -> ConsensusSummary {
        ConsensusSummary::resolve(records, &self.labels)
    }

    /// Describe every registered model, in registry order
    pub fn describe(&self) -> Vec<ModelDescription> {
        self.registry
            .iter()
            .map(|model| ModelDescription {
                name: model.name.clone(),
                kind: model.classifier.kind().to_string(),
                probability: ProbabilitySupport::resolve(model.classifier.as_ref()),
            })
            .collect()
    }
}

/// Run one classifier on one input row and normalize its output
pub(crate) fn predict_one(
    model_name: &str,
    classifier: &dyn Classifier,
    features: &FeatureTable,
    labels: &ClassLabels,
) -> Result<PredictionRecord, PredictionError> {
    let failed = |source| PredictionError::PredictionFailed {
        model: model_name.to_string(),
        source,
    };

    let codes = classifier.predict(features).map_err(failed)?;
    let code = codes
        .first()
        .copied()
        .ok_or_else(|| failed(ClassifierError::EmptyOutput))?;
    debug!("Model {} predicted class {}", model_name, code);

    let record = PredictionRecord::new(model_name, code, labels);
    match extract_probabilities(classifier, features) {
        Ok(Some(distribution)) => Ok(record.with_distribution(&distribution, labels)),
        Ok(None) => {
            debug!("Model {} has no probability output", model_name);
            Ok(record)
        }
        Err(e) => {
            warn!(
                "Probability extraction failed for model {}: {}",
                model_name, e
            );
            Ok(record)
        }
    }
}

/// Best-effort probability extraction
///
/// `Ok(None)` when the classifier (or every step of a pipeline) lacks
/// probability output. Errors stay here: the caller turns them into an
/// absent confidence.
fn extract_probabilities(
    classifier: &dyn Classifier,
    features: &FeatureTable,
) -> Result<Option<ProbabilityDistribution>, ClassifierError> {
    if !ProbabilitySupport::resolve(classifier).is_available() {
        return Ok(None);
    }

    let row = classifier
        .predict_proba(features)?
        .into_iter()
        .next()
        .ok_or(ClassifierError::EmptyOutput)?;
    ProbabilityDistribution::new(row).map(Some)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;
    use subtype_domain::{ClassCode, NamedStep};

    /// Configurable classifier for use case tests
    pub(crate) struct StubClassifier {
        pub code: i64,
        pub proba: Option<Vec<f64>>,
        pub fail_predict: bool,
        pub fail_proba: bool,
        pub steps: Option<Vec<NamedStep>>,
    }

    impl StubClassifier {
        pub fn predicting(code: i64) -> Self {
            Self {
                code,
                proba: None,
                fail_predict: false,
                fail_proba: false,
                steps: None,
            }
        }

        pub fn with_proba(mut self, proba: Vec<f64>) -> Self {
            self.proba = Some(proba);
            self
        }

        pub fn failing() -> Self {
            Self {
                fail_predict: true,
                ..Self::predicting(0)
            }
        }
    }

    impl Classifier for StubClassifier {
        fn kind(&self) -> &str {
            "stub"
        }

        fn predict(&self, features: &FeatureTable) -> Result<Vec<ClassCode>, ClassifierError> {
            if self.fail_predict {
                return Err(ClassifierError::ShapeMismatch {
                    expected: 12,
                    actual: features.n_features(),
                });
            }
            Ok(vec![ClassCode::new(self.code)])
        }

        fn has_predict_proba(&self) -> bool {
            self.proba.is_some()
        }

        fn predict_proba(&self, _features: &FeatureTable) -> Result<Vec<Vec<f64>>, ClassifierError> {
            if self.fail_proba {
                return Err(ClassifierError::MalformedModel("broken".to_string()));
            }
            self.proba
                .clone()
                .map(|p| vec![p])
                .ok_or_else(|| ClassifierError::ProbabilityUnsupported("stub".to_string()))
        }

        fn named_steps(&self) -> Option<Vec<NamedStep>> {
            self.steps.clone()
        }
    }

    pub(crate) fn features() -> FeatureTable {
        FeatureTable::from_values(vec![0.0; 12])
    }

    fn service(models: Vec<(&str, StubClassifier)>) -> ModelService {
        let registry = models
            .into_iter()
            .fold(ModelRegistry::new(), |registry, (name, stub)| {
                registry.with_model(name, Arc::new(stub))
            });
        ModelService::new(registry, ClassLabels::cancer_subtypes())
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_batch_start(&self, total_models: usize) {
            self.events.lock().unwrap().push(format!("start {}", total_models));
        }

        fn on_model_complete(&self, model: &str, success: bool) {
            self.events.lock().unwrap().push(format!("{} {}", model, success));
        }

        fn on_batch_complete(&self, succeeded: usize, total: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done {}/{}", succeeded, total));
        }
    }

    #[test]
    fn test_predict_with_model_labels_and_confidence() {
        let service = service(vec![(
            "Random Forest",
            StubClassifier::predicting(1).with_proba(vec![0.1, 0.85, 0.03, 0.01, 0.01]),
        )]);

        let record = service
            .predict_with_model("Random Forest", &features())
            .unwrap();

        assert_eq!(record.model_name(), "Random Forest");
        assert_eq!(record.class_code(), ClassCode::new(1));
        assert_eq!(record.class_label(), "Breast Invasive Ductal Carcinoma");
        assert_eq!(record.confidence(), Some(0.85));
        assert_eq!(record.probabilities().map(|p| p.len()), Some(5));
    }

    #[test]
    fn test_predict_with_unknown_model() {
        let service = service(vec![("SVM", StubClassifier::predicting(0))]);

        let err = service
            .predict_with_model("Gradient Boosting", &features())
            .unwrap_err();

        assert_eq!(err, PredictionError::ModelNotFound("Gradient Boosting".to_string()));
        assert_eq!(err.category(), ErrorCategory::Client);
    }

    #[test]
    fn test_predict_failure_is_wrapped() {
        let service = service(vec![("SVM", StubClassifier::failing())]);

        let err = service.predict_with_model("SVM", &features()).unwrap_err();

        assert!(matches!(err, PredictionError::PredictionFailed { ref model, .. } if model == "SVM"));
        assert_eq!(err.category(), ErrorCategory::ModelFailure);
    }

    #[test]
    fn test_probability_failure_degrades_record() {
        let mut stub = StubClassifier::predicting(2).with_proba(vec![0.2, 0.8]);
        stub.fail_proba = true;
        let service = service(vec![("SVM", stub)]);

        let record = service.predict_with_model("SVM", &features()).unwrap();

        assert_eq!(record.class_code(), ClassCode::new(2));
        assert!(record.confidence().is_none());
        assert!(record.probabilities().is_none());
    }

    #[test]
    fn test_invalid_distribution_degrades_record() {
        let stub = StubClassifier::predicting(0).with_proba(vec![1.7, -0.7]);
        let service = service(vec![("SVM", stub)]);

        let record = service.predict_with_model("SVM", &features()).unwrap();
        assert!(record.confidence().is_none());
    }

    #[test]
    fn test_pipeline_without_probability_step() {
        // The composite claims predict_proba but none of its steps provide it
        let mut stub = StubClassifier::predicting(1).with_proba(vec![0.3, 0.7]);
        stub.steps = Some(vec![
            NamedStep::new("scaler", "standard_scaler", false),
            NamedStep::new("svc", "linear_svm", false),
        ]);
        let service = service(vec![("SVM", stub)]);

        let record = service.predict_with_model("SVM", &features()).unwrap();

        assert_eq!(record.class_code(), ClassCode::new(1));
        assert!(record.confidence().is_none());
    }

    #[test]
    fn test_pipeline_with_probability_step() {
        let mut stub = StubClassifier::predicting(1).with_proba(vec![0.3, 0.7]);
        stub.steps = Some(vec![
            NamedStep::new("scaler", "standard_scaler", false),
            NamedStep::new("svc", "linear_svm", true),
        ]);
        let service = service(vec![("SVM", stub)]);

        let record = service.predict_with_model("SVM", &features()).unwrap();
        assert_eq!(record.confidence(), Some(0.7));
    }

    #[test]
    fn test_predict_all_skips_failed_model() {
        let service = service(vec![
            ("SVM", StubClassifier::predicting(1)),
            ("Random Forest", StubClassifier::failing()),
            ("Decision Tree", StubClassifier::predicting(2)),
        ]);

        let records = service.predict_all(&features());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].model_name(), "SVM");
        assert_eq!(records[1].model_name(), "Decision Tree");
    }

    #[test]
    fn test_predict_all_every_model_fails() {
        let service = service(vec![
            ("a", StubClassifier::failing()),
            ("b", StubClassifier::failing()),
        ]);
        assert!(service.predict_all(&features()).is_empty());
    }

    #[test]
    fn test_progress_events() {
        let service = service(vec![
            ("SVM", StubClassifier::predicting(1)),
            ("Random Forest", StubClassifier::failing()),
        ]);
        let progress = RecordingProgress::default();

        let outcome = service.predict_all_with_progress(&features(), &progress);

        assert_eq!(outcome.failed, vec!["Random Forest".to_string()]);
        assert_eq!(
            *progress.events.lock().unwrap(),
            vec!["start 2", "SVM true", "Random Forest false", "done 1/2"]
        );
    }

    #[test]
    fn test_calculate_consensus_uses_service_labels() {
        let service = service(vec![
            ("SVM", StubClassifier::predicting(1).with_proba(vec![0.15, 0.85])),
            ("Random Forest", StubClassifier::predicting(2).with_proba(vec![0.1, 0.25, 0.65])),
        ]);

        let records = service.predict_all(&features());
        let consensus = service.calculate_consensus(&records);

        assert_eq!(consensus.class_code, ClassCode::new(1));
        assert_eq!(consensus.class_label, "Breast Invasive Ductal Carcinoma");
        assert!(!consensus.agreement);
        assert_eq!(consensus.vote_count, 1);
        assert_eq!(consensus.total_models, 2);
    }

    #[test]
    fn test_labels_come_from_construction() {
        let registry = ModelRegistry::new().with_model(
            "SVM",
            Arc::new(StubClassifier::predicting(1).with_proba(vec![0.3, 0.7])),
        );
        let labels = ClassLabels::new([(0, "Normal"), (1, "Tumour")]);
        let service = ModelService::new(registry, labels);

        let record = service.predict_with_model("SVM", &features()).unwrap();
        assert_eq!(record.class_label(), "Tumour");
        assert_eq!(record.probabilities().unwrap().get("Normal"), Some(0.3));

        let consensus = service.calculate_consensus(&[record]);
        assert_eq!(consensus.class_label, "Tumour");
    }

    #[test]
    fn test_describe_reports_capability() {
        let service = service(vec![
            ("SVM", StubClassifier::predicting(0)),
            ("Random Forest", StubClassifier::predicting(0).with_proba(vec![1.0])),
        ]);

        let catalogue = service.describe();

        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue[0].probability, ProbabilitySupport::Unavailable);
        assert_eq!(catalogue[1].probability, ProbabilitySupport::Estimator);
        assert_eq!(catalogue[1].kind, "stub");
    }
}
