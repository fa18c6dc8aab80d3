//! Error types for Portfolio Showcase

use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a usable document from a data resource.
///
/// Project entries that are not objects or have no name are not errors;
/// they are filtered out when the gallery is built.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The resource could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource is not valid JSON, or does not fit the expected record
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The project document's top-level value is not an array
    #[error("Project data is not an array (found {found})")]
    NotAnArray { found: &'static str },

    /// The about-me document's top-level value is not an object
    #[error("About-me data is not an object (found {found})")]
    NotAnObject { found: &'static str },
}

/// Result type alias using LoadError
pub type LoadResult<T> = Result<T, LoadError>;

/// Human-readable name of a JSON value's kind, for diagnostics.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::NotAnArray { found: "object" };
        assert_eq!(
            format!("{}", err),
            "Project data is not an array (found object)"
        );
    }

    #[test]
    fn test_error_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: LoadError = parse_err.into();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_io_error_names_path() {
        let err = LoadError::Io {
            path: PathBuf::from("data/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert!(err.to_string().contains("data/missing.json"));
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&serde_json::json!({})), "object");
        assert_eq!(json_kind(&serde_json::json!([])), "array");
        assert_eq!(json_kind(&serde_json::json!(3)), "number");
        assert_eq!(json_kind(&serde_json::Value::Null), "null");
    }
}
