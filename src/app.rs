use dioxus::prelude::*;

use crate::context::get_site_config;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The portfolio page (about me, projects, contact)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, site configuration context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_site_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
