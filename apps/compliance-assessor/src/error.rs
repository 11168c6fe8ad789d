//! Error types for the compliance assessor CLI

use std::path::PathBuf;

use thiserror::Error;

/// Command-line level errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unknown geography '{0}'. Supported: US, LATAM, EMEA, JAPAC")]
    UnknownGeography(String),

    #[error("Unsupported document type '{}'. Accepted: .txt, .md, .html", .0.display())]
    UnsupportedDocument(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read document from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Assessment failed: {0}")]
    Assessment(String),
}
