//! Output formatting for prediction results

pub mod console;
pub mod formatter;
pub mod json;
pub mod response;

use formatter::OutputFormatter;
use subtype_domain::OutputFormat;

/// Pick the formatter for an output format
///
/// `Full` and `Summary` share the console formatter; callers choose between
/// [`OutputFormatter::format`] and [`OutputFormatter::format_summary`].
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(json::JsonFormatter),
        OutputFormat::Full | OutputFormat::Summary => Box::new(console::ConsoleFormatter),
    }
}
