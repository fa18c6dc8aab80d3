//! Card Gallery Component
//!
//! Displays the list of project cards.

use dioxus::prelude::*;
use portfolio_core::ProjectCard;

use super::ProjectCardView;

/// Element id of the scrollable card list
pub const GALLERY_ID: &str = "projectList";

/// Project card list
///
/// All cards are produced by one render of this component, so they appear
/// together. Cards are keyed by position: identifiers from the data may
/// repeat.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     CardGallery {
///         cards: gallery.read().cards().to_vec(),
///         active: selection.read().active(),
///         on_select: move |index| { /* Activate card */ },
///     }
/// }
/// ```
#[component]
pub fn CardGallery(
    /// Cards to display, in order
    cards: Vec<ProjectCard>,
    /// Position of the active card
    #[props(default)]
    active: Option<usize>,
    /// Click handler (receives card position)
    on_select: EventHandler<usize>,
) -> Element {
    rsx! {
        div { id: GALLERY_ID, class: "project-list",
            for (index, card) in cards.into_iter().enumerate() {
                ProjectCardView {
                    key: "{index}",
                    card: card,
                    active: active == Some(index),
                    on_select: move |_| on_select.call(index),
                }
            }
        }
    }
}
