//! JSON/YAML input documents

pub mod diagnostics;

pub use diagnostics::{DocumentError, ParseError};

use serde::de::DeserializeOwned;
use std::path::Path;

/// Encoding of an input document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}

/// Decode a document held in memory; `filename` labels diagnostics
pub fn parse_str<T: DeserializeOwned>(
    content: &str,
    filename: &str,
    format: DocumentFormat,
) -> Result<T, DocumentError> {
    match format {
        DocumentFormat::Json => serde_json::from_str(content)
            .map_err(|e| ParseError::from_json(&e, content, filename).into()),
        DocumentFormat::Yaml => serde_yml::from_str(content)
            .map_err(|e| ParseError::from_yaml(&e, content, filename).into()),
    }
}

/// Read and decode a document, choosing the format by extension
pub fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| DocumentError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?format, bytes = content.len(), "read document");
    parse_str(&content, &path.display().to_string(), format)
}
