//! Domain error types

use thiserror::Error;

/// Errors raised by a classifier while producing an output
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("Feature count mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Feature table has no rows")]
    EmptyInput,

    #[error("Classifier returned no output rows")]
    EmptyOutput,

    #[error("Probability output not supported by {0}")]
    ProbabilityUnsupported(String),

    #[error("Invalid probability distribution: {0}")]
    InvalidDistribution(String),

    #[error("Malformed model: {0}")]
    MalformedModel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let error = ClassifierError::ShapeMismatch {
            expected: 12,
            actual: 3,
        };
        assert_eq!(
            error.to_string(),
            "Feature count mismatch: expected 12, got 3"
        );
    }
}
