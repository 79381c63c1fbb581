//! Clinical record input

use std::io::Read;
use std::path::{Path, PathBuf};
use subtype_domain::ClinicalInput;
use thiserror::Error;

/// Errors that can occur while reading a clinical record
#[derive(Error, Debug)]
pub enum InputReadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid clinical record: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read a clinical record from a JSON file, or from stdin when `path` is `-`
pub fn read_clinical_input(path: &Path) -> Result<ClinicalInput, InputReadError> {
    let io_error = |source| InputReadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(io_error)?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(io_error)?
    };

    parse_clinical_input(&content)
}

/// Parse a clinical record from JSON text
pub fn parse_clinical_input(content: &str) -> Result<ClinicalInput, InputReadError> {
    Ok(serde_json::from_str(content)?)
}
