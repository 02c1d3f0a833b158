//! Reading manifest documents from disk.

use std::fs;
use std::path::Path;

use plint_core::error::{PlintError, Result};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from the file extension; anything unrecognized is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Load a document and make sure its root is a mapping.
pub fn load_document(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(PlintError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(PlintError::NotAFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let format = DocumentFormat::from_path(path);
    debug!(path = %path.display(), ?format, bytes = content.len(), "loading document");

    parse_document(path, &content, format)
}

pub fn parse_document(path: &Path, content: &str, format: DocumentFormat) -> Result<Value> {
    let value: Value = match format {
        DocumentFormat::Json => {
            serde_json::from_str(content).map_err(|e| PlintError::parse(path, e.to_string()))?
        }
        DocumentFormat::Yaml => {
            serde_yaml_ng::from_str(content).map_err(|e| PlintError::parse(path, e.to_string()))?
        }
    };

    if !value.is_object() {
        return Err(PlintError::parse(path, "document root must be an object"));
    }
    Ok(value)
}
