//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::LanguageState;

/// Root application component
#[component]
pub fn App() -> Element {
    // Language context wraps the entire app; pages and formatting helpers
    // read it explicitly instead of going through a browser global.
    use_context_provider(LanguageState::new);

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        Router::<Route> {}
    }
}
