//! Project Record Type
//!
//! One entry of the project data document. Every field is optional; the
//! gallery decides what is displayable.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A project as described by the data document
///
/// Unrecognized keys are ignored. Recognized keys are read one at a time:
/// a bad value only blanks that field, it never discards the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    #[serde(deserialize_with = "scalar_text")]
    pub project_id: Option<String>,
    /// Only a JSON string counts as a name
    #[serde(deserialize_with = "string_text")]
    pub project_name: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub short_description: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub long_description: Option<String>,
    /// Relative path of the card background image
    #[serde(deserialize_with = "scalar_text")]
    pub card_image: Option<String>,
    /// Relative path of the spotlight background image
    #[serde(deserialize_with = "scalar_text")]
    pub spotlight_image: Option<String>,
    /// External link for the project
    #[serde(deserialize_with = "scalar_text")]
    pub url: Option<String>,
}

/// Strings only; anything else reads as absent.
fn string_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Strings as-is, numbers in their JSON spelling; everything else reads
/// as absent.
fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    })
}

impl ProjectRecord {
    /// Create a record with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            project_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Interpret a raw document entry as a record.
    ///
    /// Returns `None` for `null` and non-object entries. Objects always
    /// produce a record; whether it is displayable depends on its name.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// The project name, if present and non-empty
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.project_name)
    }

    /// The explicit identifier, if present and non-empty
    pub fn id(&self) -> Option<&str> {
        non_empty(&self.project_id)
    }

    pub fn short_description(&self) -> Option<&str> {
        non_empty(&self.short_description)
    }

    pub fn long_description(&self) -> Option<&str> {
        non_empty(&self.long_description)
    }

    pub fn card_image(&self) -> Option<&str> {
        non_empty(&self.card_image)
    }

    pub fn spotlight_image(&self) -> Option<&str> {
        non_empty(&self.spotlight_image)
    }

    pub fn url(&self) -> Option<&str> {
        non_empty(&self.url)
    }

    /// Only records with a non-empty name are rendered
    pub fn is_displayable(&self) -> bool {
        self.name().is_some()
    }
}

/// Empty strings count as absent, so fallbacks apply to them as well.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_object() {
        let record = ProjectRecord::from_value(json!({
            "project_id": "p1",
            "project_name": "Alpha",
            "url": "https://example.com",
            "stars": 42,
        }))
        .unwrap();

        assert_eq!(record.id(), Some("p1"));
        assert_eq!(record.name(), Some("Alpha"));
        assert_eq!(record.url(), Some("https://example.com"));
        assert_eq!(record.long_description(), None);
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(ProjectRecord::from_value(Value::Null).is_none());
        assert!(ProjectRecord::from_value(json!("Alpha")).is_none());
        assert!(ProjectRecord::from_value(json!([{"project_name": "Alpha"}])).is_none());
    }

    #[test]
    fn test_non_string_name_is_absent() {
        let record = ProjectRecord::from_value(json!({"project_name": 7})).unwrap();
        assert_eq!(record.name(), None);
        assert!(!record.is_displayable());
    }

    #[test]
    fn test_bad_field_does_not_discard_record() {
        let record = ProjectRecord::from_value(json!({
            "project_name": "Beta",
            "project_id": 7,
            "short_description": ["x"],
            "url": false,
        }))
        .unwrap();

        assert_eq!(record.name(), Some("Beta"));
        assert_eq!(record.id(), Some("7"));
        assert_eq!(record.short_description(), None);
        assert_eq!(record.url(), None);
    }

    #[test]
    fn test_null_field_is_absent() {
        let record =
            ProjectRecord::from_value(json!({"project_name": "Alpha", "url": null})).unwrap();
        assert_eq!(record.url(), None);
    }

    #[test]
    fn test_displayable() {
        assert!(ProjectRecord::named("Alpha").is_displayable());
        assert!(!ProjectRecord::named("").is_displayable());
        assert!(!ProjectRecord::default().is_displayable());
    }
}
