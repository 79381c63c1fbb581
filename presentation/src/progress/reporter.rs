//! Progress reporting for ensemble runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use subtype_application::ports::progress::ProgressNotifier;

/// Reports progress during an ensemble run with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn batch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_batch_start(&self, total_models: usize) {
        let pb = ProgressBar::new(total_models as u64);
        pb.set_style(Self::batch_style());
        pb.set_prefix("Predicting");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_model_complete(&self, model: &str, success: bool) {
        if let Ok(bar) = self.bar.lock() {
            if let Some(pb) = bar.as_ref() {
                let status = if success {
                    format!("{} {}", "v".green(), model)
                } else {
                    format!("{} {}", "x".red(), model)
                };
                pb.set_message(status);
                pb.inc(1);
            }
        }
    }

    fn on_batch_complete(&self, succeeded: usize, total: usize) {
        if let Some(pb) = self.bar.lock().ok().and_then(|mut bar| bar.take()) {
            pb.finish_and_clear();
        }
        if succeeded < total {
            eprintln!(
                "{} {}/{} models succeeded",
                "!".yellow(),
                succeeded,
                total
            );
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_batch_start(&self, total_models: usize) {
        eprintln!(
            "{} {} ({} models)",
            "->".cyan(),
            "Predicting".bold(),
            total_models
        );
    }

    fn on_model_complete(&self, model: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), model);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), model);
        }
    }

    fn on_batch_complete(&self, _succeeded: usize, _total: usize) {
        eprintln!();
    }
}
