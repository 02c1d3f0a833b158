use std::path::PathBuf;
use thiserror::Error;

/// Failures that happen before a document reaches the validator.
///
/// Problems *inside* a manifest are never reported through this type; they
/// become findings on the report instead.
#[derive(Error, Debug)]
pub enum PlintError {
    #[error("File {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("{} is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid document in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PlintError {
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        PlintError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for PlintError {
    fn from(err: serde_json::Error) -> Self {
        PlintError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_path() {
        let err = PlintError::NotFound(PathBuf::from("missing/plugin.json"));
        assert_eq!(err.to_string(), "File missing/plugin.json does not exist");
    }

    #[test]
    fn test_parse_error_carries_detail() {
        let err = PlintError::parse("plugin.json", "expected value at line 1 column 1");
        let text = err.to_string();
        assert!(text.contains("plugin.json"));
        assert!(text.contains("expected value"));
    }

    #[test]
    fn test_json_error_converts_to_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PlintError = json_err.into();
        assert!(matches!(err, PlintError::Serialization(_)));
    }
}
