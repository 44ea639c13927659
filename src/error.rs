use crate::compiler::Diagnostic;
use thiserror::Error;

/// Errors raised when a rule value cannot be compiled into a typed condition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConditionError {
    #[error("Condition value is empty")]
    EmptyValue,

    #[error("Invalid regular expression '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Expected a numeric threshold for '{condition}', but found '{value}'")]
    NotANumber { condition: String, value: String },

    #[error("Malformed range '{0}': expected \"min,max\" with min <= max")]
    MalformedRange(String),
}

/// Errors that can occur while compiling a form into evaluation plans.
#[derive(Error, Debug, Clone)]
pub enum CompileError {
    #[error("Question '{question_id}' has an invalid evaluation configuration: {diagnostic}")]
    InvalidConfiguration {
        question_id: String,
        diagnostic: Diagnostic,
    },

    #[error("Question id '{0}' appears more than once in the form")]
    DuplicateQuestion(String),
}

/// Errors that can occur while saving or loading a compiled form artifact.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Serialization failed: {0}")]
    Encode(String),

    #[error("Deserialization failed: {0}")]
    Decode(String),

    #[error("Could not access artifact file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported artifact version {found} (expected {expected})")]
    VersionMismatch { found: u16, expected: u16 },
}

/// Errors that can occur while loading forms and submissions.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}
