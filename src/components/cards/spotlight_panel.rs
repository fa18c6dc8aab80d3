//! Spotlight Panel Component
//!
//! Large panel presenting the selected project.

use dioxus::prelude::*;
use portfolio_core::assets::{background_style, SPOTLIGHT_PLACEHOLDER};
use portfolio_core::SpotlightView;

/// Spotlight panel
///
/// With no view (nothing loaded, or no displayable projects) the static
/// placeholder is shown. The text region is keyed by the active card's
/// position, so a new selection drops the old heading, paragraph and link
/// before mounting the new ones, even when two projects share an id.
#[component]
pub fn SpotlightPanel(
    /// Content for the selected project
    #[props(default)]
    view: Option<SpotlightView>,
    /// Position of the active card in the gallery
    #[props(default)]
    position: Option<usize>,
) -> Element {
    let key = spotlight_key(position);
    let style = match &view {
        Some(view) => view.background_style(),
        None => background_style(SPOTLIGHT_PLACEHOLDER),
    };

    rsx! {
        div { id: "projectSpotlight", class: "project-spotlight", style: "{style}",
            div { id: "spotlightTitles", class: "spotlight-titles",
                if let Some(view) = view {
                    div { key: "{key}", class: "spotlight-content",
                        h3 { class: "spotlight-content__title", "{view.heading}" }
                        p { class: "spotlight-content__body", "{view.body}" }
                        a {
                            class: "spotlight-content__link",
                            href: "{view.link_href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{view.link_label}"
                        }
                    }
                }
            }
        }
    }
}

fn spotlight_key(position: Option<usize>) -> String {
    match position {
        Some(position) => format!("spotlight-{}", position),
        None => "spotlight-none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_follows_position() {
        assert_eq!(spotlight_key(Some(0)), "spotlight-0");
        assert_eq!(spotlight_key(None), "spotlight-none");
        assert_ne!(spotlight_key(Some(0)), spotlight_key(Some(1)));
    }
}
