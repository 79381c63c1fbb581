//! Presentation layer for subtype-consensus
//!
//! This crate contains CLI definitions, input reading, output formatters
//! and progress reporters.

pub mod cli;
pub mod input;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use input::{InputReadError, parse_clinical_input, read_clinical_input};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::formatter_for;
pub use output::json::JsonFormatter;
pub use output::response::{EnsembleResponse, ModelInfoResponse, PredictionResponse};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
