//! Home page - the whole portfolio on one screen.
//!
//! Two loads run independently on mount: the about-me document fills the
//! biography section, the project document fills the gallery. Either may
//! finish first. A failed load is logged and its section keeps the
//! placeholder content.

use dioxus::prelude::*;
use portfolio_core::{load_about_me, load_projects, AboutMeView, Gallery, Selection};

use crate::components::cards::{CardGallery, SpotlightPanel};
use crate::components::{AboutMeSection, ContactForm, GalleryNav};
use crate::context::use_site_config;

/// Home page component.
#[component]
pub fn Home() -> Element {
    let config = use_site_config();
    let mut about = use_signal(|| Option::<AboutMeView>::None);
    let mut gallery = use_signal(Gallery::default);
    let mut selection = use_signal(Selection::default);

    // Load about-me on mount
    let about_path = config.about_me_path();
    use_hook(move || {
        spawn(async move {
            match load_about_me(&about_path).await {
                Ok(data) => about.set(Some(AboutMeView::from_about(&data))),
                Err(e) => tracing::error!("Failed to load about-me data: {}", e),
            }
        })
    });

    // Load projects on mount
    let projects_path = config.projects_path();
    use_hook(move || {
        spawn(async move {
            match load_projects(&projects_path).await {
                Ok(entries) => {
                    // Replace, never append: a reload must not duplicate cards
                    let built = Gallery::from_raw(entries);
                    tracing::info!("Rendering {} project cards", built.len());
                    selection.set(Selection::initial(&built));
                    gallery.set(built);
                }
                Err(e) => tracing::error!("Failed to load project data: {}", e),
            }
        })
    });

    let on_select = move |index: usize| {
        let current = gallery.read();
        if selection.write().select(&current, index).is_none() {
            tracing::warn!("Ignoring selection of unknown card {}", index);
        }
    };

    let cards = gallery.read().cards().to_vec();
    let active = selection.read().active();
    let spotlight = selection.read().spotlight(&gallery.read());

    rsx! {
        main { class: "portfolio",
            header { class: "page-header",
                h1 { class: "page-title", "Portfolio" }
            }

            AboutMeSection { view: about() }

            section { id: "projects", class: "projects-section",
                h2 { class: "section-header", "Projects" }
                div { class: "projects-layout",
                    SpotlightPanel { view: spotlight, position: active }
                    div { class: "gallery-column",
                        CardGallery {
                            cards: cards,
                            active: active,
                            on_select: on_select,
                        }
                        GalleryNav {}
                    }
                }
            }

            ContactForm {}
        }
    }
}
