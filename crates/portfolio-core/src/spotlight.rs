//! Spotlight Presenter
//!
//! The detailed panel for the selected project. A view is rebuilt from
//! scratch for every selection; nothing carries over from the previous one.

use crate::assets::{background_style, resolve_asset, SPOTLIGHT_PLACEHOLDER};
use crate::gallery::TITLE_FALLBACK;
use crate::types::{ProjectId, ProjectRecord};

/// Spotlight body when a record has no long description
pub const BODY_FALLBACK: &str = "No detailed description available";

/// Link target when a record has no URL
pub const LINK_FALLBACK: &str = "#";

/// Fixed label of the spotlight link
pub const LINK_LABEL: &str = "Click here to see more...";

/// Resolved content of the spotlight panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotlightView {
    /// Identifier of the project shown
    pub id: ProjectId,
    pub heading: String,
    pub body: String,
    pub link_href: String,
    pub link_label: &'static str,
    /// Resolved background image path
    pub background: String,
}

impl SpotlightView {
    /// Present `record`. Callers only pass displayable records; the name
    /// is not re-validated.
    pub fn for_record(id: &ProjectId, record: &ProjectRecord) -> Self {
        Self {
            id: id.clone(),
            heading: record.name().unwrap_or(TITLE_FALLBACK).to_string(),
            body: record
                .long_description()
                .unwrap_or(BODY_FALLBACK)
                .to_string(),
            link_href: record.url().unwrap_or(LINK_FALLBACK).to_string(),
            link_label: LINK_LABEL,
            background: resolve_asset(record.spotlight_image(), SPOTLIGHT_PLACEHOLDER),
        }
    }

    /// Inline style for the spotlight panel
    pub fn background_style(&self) -> String {
        background_style(&self.background)
    }
}
