//! Error types for assessment, session and export operations

use thiserror::Error;

/// Failure of an assessment call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessError {
    #[error("Assessment service unavailable: {0}")]
    Unavailable(String),

    #[error("Assessment timeout after {0}ms")]
    Timeout(u64),

    #[error("Assessment rejected: {0}")]
    Rejected(String),
}

/// Illegal action on an assessment session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot {action} while session is {state}")]
    InvalidTransition { state: String, action: &'static str },

    #[error("No geography selected")]
    MissingGeography,

    #[error("No standard selected")]
    MissingStandard,

    #[error("No content provided")]
    MissingContent,

    #[error("Standard '{id}' is not available in {geography}")]
    UnknownStandard { geography: String, id: String },

    #[error("Export failed: {0}")]
    Export(String),
}

/// Failure while exporting a report
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown export format '{0}'. Must be 'txt' or 'json'")]
    UnknownFormat(String),
}
