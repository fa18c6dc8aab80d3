//! Project Card Component
//!
//! One entry of the project gallery: a background image with the project
//! title and short description on top.

use dioxus::prelude::*;
use portfolio_core::ProjectCard;

/// CSS classes for a card in the given state
fn card_class(active: bool) -> &'static str {
    if active {
        "project-card active"
    } else {
        "project-card"
    }
}

/// Clickable project card
///
/// The card's `id` and `data-project-id` attributes both carry the project
/// identifier. The background image is applied through `style` rather than
/// an `img` element so text can sit on top of it.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProjectCardView {
///         card: card.clone(),
///         active: true,
///         on_select: move |_| { /* activate */ },
///     }
/// }
/// ```
#[component]
pub fn ProjectCardView(
    /// Display data for the card
    card: ProjectCard,
    /// Whether this card is the active one
    #[props(default = false)]
    active: bool,
    /// Click handler
    on_select: EventHandler<()>,
) -> Element {
    let style = card.background_style();

    rsx! {
        div {
            id: "{card.id}",
            class: card_class(active),
            "data-project-id": "{card.id}",
            style: "{style}",
            onclick: move |_| on_select.call(()),

            h4 { class: "project-card__title", "{card.title}" }
            p { class: "project-card__description", "{card.description}" }
        }
    }
}
