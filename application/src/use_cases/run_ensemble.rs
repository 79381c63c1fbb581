//! Run Ensemble use case
//!
//! Runs every registered model on one input and resolves the consensus.
//! Models may run sequentially or fanned out onto the blocking thread pool.

use super::model_service::{BatchOutcome, ModelService, PredictionError, predict_one};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use std::sync::Arc;
use subtype_domain::{EnsembleReport, FeatureTable};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Input for the RunEnsemble use case
#[derive(Debug, Clone)]
pub struct RunEnsembleInput {
    /// Encoded input row
    pub features: FeatureTable,
    /// Run models concurrently instead of one after another
    pub parallel: bool,
    /// Whether to resolve a consensus across the predictions
    pub include_consensus: bool,
}

impl RunEnsembleInput {
    pub fn new(features: FeatureTable) -> Self {
        Self {
            features,
            parallel: false,
            include_consensus: true,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn without_consensus(mut self) -> Self {
        self.include_consensus = false;
        self
    }
}

/// Use case for running the whole model ensemble
pub struct RunEnsembleUseCase {
    service: Arc<ModelService>,
}

impl RunEnsembleUseCase {
    pub fn new(service: Arc<ModelService>) -> Self {
        Self { service }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunEnsembleInput) -> Result<EnsembleReport, PredictionError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Fails with [`PredictionError::EmptyEnsemble`] when no model is
    /// registered or every model failed.
    pub async fn execute_with_progress(
        &self,
        input: RunEnsembleInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<EnsembleReport, PredictionError> {
        if self.service.registry().is_empty() {
            return Err(PredictionError::EmptyEnsemble);
        }

        let outcome = if input.parallel {
            self.run_parallel(input.features, progress).await
        } else {
            self.service
                .predict_all_with_progress(&input.features, progress)
        };

        if outcome.records.is_empty() {
            warn!("All {} models failed", outcome.failed.len());
            return Err(PredictionError::EmptyEnsemble);
        }

        let mut report = EnsembleReport::new(outcome.records).with_failed_models(outcome.failed);
        if input.include_consensus {
            let consensus = self.service.calculate_consensus(&report.predictions);
            info!(
                "Consensus: {} ({}/{} votes, {})",
                consensus.class_label, consensus.vote_count, consensus.total_models,
                consensus.resolution
            );
            report = report.with_consensus(consensus);
        } else {
            debug!("Skipping consensus");
        }

        Ok(report)
    }

    /// Invoke every model on the blocking pool, keeping registry order
    async fn run_parallel(
        &self,
        features: FeatureTable,
        progress: &dyn ProgressNotifier,
    ) -> BatchOutcome {
        let registry = self.service.registry();
        let total = registry.len();
        info!("Running {} models in parallel", total);
        progress.on_batch_start(total);

        let features = Arc::new(features);
        let labels = self.service.shared_labels();
        let mut join_set = JoinSet::new();

        for (index, model) in registry.iter().enumerate() {
            let model = model.clone();
            let features = Arc::clone(&features);
            let labels = Arc::clone(&labels);

            join_set.spawn_blocking(move || {
                let result =
                    predict_one(&model.name, model.classifier.as_ref(), &features, &labels);
                (index, result)
            });
        }

        let mut slots = vec![None; total];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, result)) => {
                    if let Some(model) = registry.iter().nth(index) {
                        match &result {
                            Ok(_) => progress.on_model_complete(&model.name, true),
                            Err(e) => {
                                warn!("Model {} failed: {}", model.name, e);
                                progress.on_model_complete(&model.name, false);
                            }
                        }
                    }
                    slots[index] = Some(result);
                }
                Err(e) => warn!("Task join error: {}", e),
            }
        }

        let mut outcome = BatchOutcome::default();
        for (model, slot) in registry.iter().zip(slots) {
            match slot {
                Some(Ok(record)) => outcome.records.push(record),
                Some(Err(_)) => outcome.failed.push(model.name.clone()),
                None => {
                    progress.on_model_complete(&model.name, false);
                    outcome.failed.push(model.name.clone());
                }
            }
        }

        progress.on_batch_complete(outcome.records.len(), total);
        outcome
    }
}
