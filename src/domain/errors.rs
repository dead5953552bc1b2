use thiserror::Error;

/// Errors produced while routing or evaluating a scoring request.
///
/// Every variant is reported to callers as a data value (`{"error": ...}`),
/// never as a process-level fault.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("Model not found")]
    UnknownModel { name: String },

    #[error("Insufficient data")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid value for '{field}': expected {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },

    #[error("{reason}")]
    ComputationError { reason: String },

    /// Raised by the transport layer only.
    #[error("{name} required")]
    MissingParameter { name: String },
}

impl ScoreError {
    pub fn computation(reason: impl Into<String>) -> Self {
        ScoreError::ComputationError {
            reason: reason.into(),
        }
    }

    pub fn invalid_field(field: &str, expected: &'static str) -> Self {
        ScoreError::InvalidField {
            field: field.to_string(),
            expected,
        }
    }
}
