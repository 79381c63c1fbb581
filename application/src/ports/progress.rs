//! Progress notification port
//!
//! Defines the interface for reporting progress while an ensemble runs.

/// Callback for progress updates during an ensemble run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain log lines, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called before the first model is invoked
    fn on_batch_start(&self, total_models: usize);

    /// Called when one model finishes, successfully or not
    fn on_model_complete(&self, model: &str, success: bool);

    /// Called after every model has finished
    fn on_batch_complete(&self, succeeded: usize, total: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_batch_start(&self, _total_models: usize) {}
    fn on_model_complete(&self, _model: &str, _success: bool) {}
    fn on_batch_complete(&self, _succeeded: usize, _total: usize) {}
}
