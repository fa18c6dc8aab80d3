//! Gallery Navigation Component
//!
//! Previous/next arrows that scroll the project list by one card.

use dioxus::document;
use dioxus::prelude::*;
use portfolio_core::{Direction, ScrollOffset};
use portfolio_ui::{ArrowButton, ArrowDirection};

use crate::components::cards::GALLERY_ID;

/// Read the viewport width, then smoothly scroll the card list.
///
/// The width is queried on every trigger so a resize between clicks
/// switches between the mobile and desktop axis.
async fn scroll_gallery(direction: Direction) {
    let width = match document::eval("return window.innerWidth;").join::<f64>().await {
        Ok(width) => width,
        Err(e) => {
            tracing::warn!("Could not read viewport width: {:?}", e);
            return;
        }
    };

    let offset = ScrollOffset::for_trigger(direction, width);
    tracing::debug!(
        "Scrolling {:?} at width {}: left {} top {}",
        direction,
        width,
        offset.left,
        offset.top
    );

    if let Err(e) = document::eval(&offset.scroll_script(GALLERY_ID)).await {
        tracing::warn!("Gallery scroll failed: {:?}", e);
    }
}

/// Carousel arrows for the project list
#[component]
pub fn GalleryNav() -> Element {
    rsx! {
        div { class: "arrows",
            ArrowButton {
                id: "arrow-left".to_string(),
                direction: ArrowDirection::Left,
                aria_label: "Previous project".to_string(),
                onclick: move |_| {
                    spawn(scroll_gallery(Direction::Previous));
                },
            }
            ArrowButton {
                id: "arrow-right".to_string(),
                direction: ArrowDirection::Right,
                aria_label: "Next project".to_string(),
                onclick: move |_| {
                    spawn(scroll_gallery(Direction::Next));
                },
            }
        }
    }
}
