//! Selection Coordinator
//!
//! Tracks which card is active. The active card is a single optional
//! position, so "deactivate all, activate one" is one assignment and there
//! is never a moment with two active cards.

use crate::gallery::Gallery;
use crate::spotlight::SpotlightView;
use crate::types::ProjectId;

/// Active-card state for one gallery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    active: Option<usize>,
}

impl Selection {
    /// Initial state: the first card is active, or none if the gallery is
    /// empty.
    pub fn initial(gallery: &Gallery) -> Self {
        Self {
            active: (!gallery.is_empty()).then_some(0),
        }
    }

    /// Activate the card at `index` and present its project.
    ///
    /// Out-of-range positions leave the state unchanged and return `None`.
    pub fn select(&mut self, gallery: &Gallery, index: usize) -> Option<SpotlightView> {
        let (card, record) = gallery.entry(index)?;
        self.active = Some(index);
        tracing::debug!("Selected project {} at position {}", card.id, index);
        Some(SpotlightView::for_record(&card.id, record))
    }

    /// Activate the first card with identifier `id`.
    pub fn select_id(&mut self, gallery: &Gallery, id: &ProjectId) -> Option<SpotlightView> {
        let index = gallery.position(id)?;
        self.select(gallery, index)
    }

    /// Position of the active card
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Spotlight content for the active card
    pub fn spotlight(&self, gallery: &Gallery) -> Option<SpotlightView> {
        let (card, record) = gallery.entry(self.active?)?;
        Some(SpotlightView::for_record(&card.id, record))
    }
}
