//! Project Gallery
//!
//! Turns the raw project document into display cards. Filtering happens
//! before identifiers are assigned, so positional identifiers follow the
//! filtered order with no gaps.

use std::collections::HashMap;

use serde_json::Value;

use crate::assets::{background_style, resolve_asset, CARD_PLACEHOLDER};
use crate::types::{ProjectId, ProjectRecord};

/// Card title when a record has no name
pub const TITLE_FALLBACK: &str = "Untitled Project";

/// Card description when a record has no short description
pub const DESCRIPTION_FALLBACK: &str = "No description available";

/// Display data for one project card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Resolved background image path
    pub background: String,
}

impl ProjectCard {
    fn build(id: ProjectId, record: &ProjectRecord) -> Self {
        Self {
            id,
            title: record.name().unwrap_or(TITLE_FALLBACK).to_string(),
            description: record
                .short_description()
                .unwrap_or(DESCRIPTION_FALLBACK)
                .to_string(),
            background: resolve_asset(record.card_image(), CARD_PLACEHOLDER),
        }
    }

    /// Inline style for the card element
    pub fn background_style(&self) -> String {
        background_style(&self.background)
    }
}

/// The displayable projects of one load, in source order
///
/// `cards[i]` is always built from `records[i]`. A gallery is built in one
/// pass and replaced wholesale on the next load; it is never appended to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    cards: Vec<ProjectCard>,
    records: Vec<ProjectRecord>,
    by_id: HashMap<ProjectId, usize>,
}

impl Gallery {
    /// Build a gallery from raw document entries.
    ///
    /// Entries that are not objects or have no name are
    /// dropped silently.
    pub fn from_raw(entries: Vec<Value>) -> Self {
        let total = entries.len();
        let records: Vec<ProjectRecord> = entries
            .into_iter()
            .filter_map(ProjectRecord::from_value)
            .collect();
        let gallery = Self::from_records(records);

        let dropped = total - gallery.len();
        if dropped > 0 {
            tracing::debug!("Dropped {} undisplayable project entries", dropped);
        }
        gallery
    }

    /// Build a gallery from parsed records, keeping only displayable ones.
    pub fn from_records(records: impl IntoIterator<Item = ProjectRecord>) -> Self {
        let records: Vec<ProjectRecord> = records
            .into_iter()
            .filter(ProjectRecord::is_displayable)
            .collect();

        let mut cards = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let id = match record.id() {
                Some(id) => ProjectId::new(id),
                None => ProjectId::positional(index),
            };
            // First occurrence wins for identifier lookups
            by_id.entry(id.clone()).or_insert(index);
            cards.push(ProjectCard::build(id, record));
        }

        Self {
            cards,
            records,
            by_id,
        }
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card at `index` together with its source record
    pub fn entry(&self, index: usize) -> Option<(&ProjectCard, &ProjectRecord)> {
        Some((self.cards.get(index)?, self.records.get(index)?))
    }

    /// Position of the first card with identifier `id`
    pub fn position(&self, id: &ProjectId) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// The source record of the first card with identifier `id`
    pub fn record(&self, id: &ProjectId) -> Option<&ProjectRecord> {
        self.records.get(self.position(id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> Vec<Value> {
        match value {
            Value::Array(entries) => entries,
            _ => panic!("expected array"),
        }
    }

    #[test]
    fn test_filters_before_assigning_ids() {
        let gallery = Gallery::from_raw(raw(json!([
            null,
            {"project_name": ""},
            {"project_name": "Alpha"},
            {"short_description": "nameless"},
            {"project_name": "Beta"},
        ])));

        let ids: Vec<&str> = gallery.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["project-0", "project-1"]);
        assert_eq!(gallery.cards()[1].title, "Beta");
    }

    #[test]
    fn test_explicit_id_kept() {
        let gallery = Gallery::from_raw(raw(json!([
            {"project_name": "Alpha", "project_id": "alpha"},
            {"project_name": "Beta", "project_id": ""},
        ])));
        assert_eq!(gallery.cards()[0].id.as_str(), "alpha");
        assert_eq!(gallery.cards()[1].id.as_str(), "project-1");
    }

    #[test]
    fn test_card_fallbacks() {
        let gallery = Gallery::from_records(vec![ProjectRecord::named("Alpha")]);
        let card = &gallery.cards()[0];
        assert_eq!(card.description, DESCRIPTION_FALLBACK);
        assert_eq!(card.background, CARD_PLACEHOLDER);
        assert_eq!(
            card.background_style(),
            "background-image: url('./images/card_placeholder_bg.webp');"
        );
    }

    #[test]
    fn test_card_image_normalized() {
        let record = ProjectRecord {
            card_image: Some("../images/alpha_card.webp".to_string()),
            short_description: Some("A thing".to_string()),
            ..ProjectRecord::named("Alpha")
        };
        let gallery = Gallery::from_records(vec![record]);
        assert_eq!(gallery.cards()[0].background, "./images/alpha_card.webp");
        assert_eq!(gallery.cards()[0].description, "A thing");
    }

    #[test]
    fn test_duplicate_ids_lookup_first() {
        let gallery = Gallery::from_raw(raw(json!([
            {"project_name": "Alpha", "project_id": "dup"},
            {"project_name": "Beta", "project_id": "dup"},
        ])));
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.position(&ProjectId::new("dup")), Some(0));
        assert_eq!(
            gallery.record(&ProjectId::new("dup")).and_then(|r| r.name()),
            Some("Alpha")
        );
    }

    #[test]
    fn test_entry_pairs_card_and_record() {
        let gallery = Gallery::from_records(vec![
            ProjectRecord::named("Alpha"),
            ProjectRecord::named("Beta"),
        ]);
        let (card, record) = gallery.entry(1).unwrap();
        assert_eq!(card.title, "Beta");
        assert_eq!(record.name(), Some("Beta"));
        assert!(gallery.entry(2).is_none());
    }

    #[test]
    fn test_empty_gallery() {
        let gallery = Gallery::from_raw(Vec::new());
        assert!(gallery.is_empty());
        assert_eq!(gallery, Gallery::default());
    }
}
