//! Error types for salesdesk.
//!
//! This module defines a unified error enum that covers every failure the
//! assistant can surface: configuration, missing credentials, I/O, the remote
//! model, the interaction log, persona prompts, and dataset loading.

use thiserror::Error;

/// Unified error type for salesdesk.
///
/// Components never recover locally; each failure is represented here and
/// propagated unchanged to the command boundary.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// No API credential available for a provider that needs one
    #[error("Missing credential: {0}")]
    Credential(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Remote generation failures (auth, quota, network, bad model id)
    #[error("LLM error: {0}")]
    Llm(String),

    /// Interaction log storage errors
    #[error("Memory error: {0}")]
    Memory(String),

    /// Persona and prompt template errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Spreadsheet loading errors
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Credential("Please enter your Gemini API key".to_string());
        assert_eq!(
            err.to_string(),
            "Missing credential: Please enter your Gemini API key"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
