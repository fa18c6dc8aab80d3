//! Data Loader
//!
//! Reads the project and about-me documents. Shape is validated before
//! anything is returned, so callers either get the whole document or an
//! error and never a partial result.

use std::path::Path;

use serde_json::Value;

use crate::error::{json_kind, LoadError, LoadResult};
use crate::types::AboutMe;

/// Read and parse the project document at `path`.
///
/// Returns the raw entries in document order. Entries are not inspected
/// here; see [`crate::Gallery::from_raw`] for filtering.
pub async fn load_projects(path: impl AsRef<Path>) -> LoadResult<Vec<Value>> {
    let path = path.as_ref();
    let text = read_document(path).await?;
    let entries = parse_projects(&text)?;
    tracing::info!("Loaded {} project entries from {:?}", entries.len(), path);
    Ok(entries)
}

/// Parse a project document. The top-level value must be an array.
pub fn parse_projects(text: &str) -> LoadResult<Vec<Value>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(entries) => Ok(entries),
        other => Err(LoadError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

/// Read and parse the about-me document at `path`.
pub async fn load_about_me(path: impl AsRef<Path>) -> LoadResult<AboutMe> {
    let path = path.as_ref();
    let text = read_document(path).await?;
    let about = parse_about_me(&text)?;
    tracing::info!("Loaded about-me data from {:?}", path);
    Ok(about)
}

/// Parse an about-me document. The top-level value must be an object.
pub fn parse_about_me(text: &str) -> LoadResult<AboutMe> {
    let value = serde_json::from_str::<Value>(text)?;
    if !value.is_object() {
        return Err(LoadError::NotAnObject {
            found: json_kind(&value),
        });
    }
    Ok(serde_json::from_value(value)?)
}

async fn read_document(path: &Path) -> LoadResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_projects_array() {
        let entries = parse_projects(r#"[{"project_name": "Alpha"}, null, 3]"#).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_parse_projects_object_is_shape_error() {
        let err = parse_projects(r#"{"project_name": "Alpha"}"#).unwrap_err();
        assert!(matches!(err, LoadError::NotAnArray { found: "object" }));
    }

    #[test]
    fn test_parse_projects_scalar_is_shape_error() {
        let err = parse_projects("\"projects\"").unwrap_err();
        assert!(matches!(err, LoadError::NotAnArray { found: "string" }));
    }

    #[test]
    fn test_parse_projects_invalid_json() {
        let err = parse_projects("[{").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_parse_about_me() {
        let about = parse_about_me(r#"{"aboutMe": "Builder of things"}"#).unwrap();
        assert_eq!(about.about_me.as_deref(), Some("Builder of things"));
        assert_eq!(about.headshot, None);
    }

    #[test]
    fn test_parse_about_me_array_is_shape_error() {
        let err = parse_about_me("[]").unwrap_err();
        assert!(matches!(err, LoadError::NotAnObject { found: "array" }));
    }

    #[test]
    fn test_parse_about_me_wrong_field_type() {
        let err = parse_about_me(r#"{"aboutMe": 5}"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_projects("/nonexistent/projects_data.json")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
