//! About Me Section
//!
//! Biography paragraph with a headshot beside it.

use dioxus::prelude::*;
use portfolio_core::AboutMeView;

/// Biography section. Shows a loading placeholder until the about-me
/// document has been read.
#[component]
pub fn AboutMeSection(
    /// Resolved about-me content
    #[props(default)]
    view: Option<AboutMeView>,
) -> Element {
    rsx! {
        section { id: "aboutMe", class: "about-me",
            h2 { class: "section-header", "About Me" }
            if let Some(view) = view {
                p { class: "about-me__bio", "{view.bio}" }
                div { class: "headshot-container",
                    img {
                        class: "headshot",
                        src: "{view.headshot}",
                        alt: "Headshot",
                    }
                }
            } else {
                p { class: "about-me__bio placeholder", "Loading..." }
            }
        }
    }
}
