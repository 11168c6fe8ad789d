//! Document ingestion
//!
//! Only `.txt`, `.md` and `.html` files are accepted. The text is passed on
//! exactly as read, with no further validation.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::CliError;

/// File extensions accepted for upload
pub const ACCEPTED_EXTENSIONS: &[&str] = &["txt", "md", "html"];

/// Where the document text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource<'a> {
    File(&'a Path),
    Inline(&'a str),
    Stdin,
}

/// Whether a path has an accepted extension (case-insensitive)
pub fn is_accepted_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

/// Read a document file as UTF-8 text
pub fn read_document(path: &Path) -> Result<String, CliError> {
    if !is_accepted_document(path) {
        return Err(CliError::UnsupportedDocument(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| CliError::ReadDocument {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded {} ({} bytes)", path.display(), content.len());
    Ok(content)
}

/// Load the document text from its source
pub fn load(source: DocumentSource<'_>) -> Result<String, CliError> {
    match source {
        DocumentSource::File(path) => read_document(path),
        DocumentSource::Inline(text) => Ok(text.to_string()),
        DocumentSource::Stdin => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(CliError::Stdin)?;
            Ok(content)
        }
    }
}
