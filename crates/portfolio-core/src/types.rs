//! Core types for Portfolio Showcase

pub mod about;
pub mod project;

pub use about::{AboutMe, AboutMeView};
pub use project::ProjectRecord;

use serde::{Deserialize, Serialize};

/// Identifier of a project within one gallery build
///
/// Taken from the record's `project_id` when present, otherwise synthesized
/// from the record's position in the filtered sequence. Identifiers are not
/// required to be unique in the source data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(String);

impl ProjectId {
    /// Create a ProjectId from an explicit identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Synthesize the positional identifier `project-<index>`
    pub fn positional(index: usize) -> Self {
        Self(format!("project-{}", index))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
