//! Application layout wrapper

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::use_language;
use super::Sidebar;

/// Layout component providing the sidebar shell around every page.
/// Sets the document direction from the language context.
#[component]
pub fn AppLayout() -> Element {
    let language = use_language();
    let lang = language.get();

    rsx! {
        div {
            dir: "{lang.dir()}",
            class: "min-h-screen bg-gray-100 md:flex",

            Sidebar {}

            main {
                class: "flex-1",
                Outlet::<Route> {}
            }
        }
    }
}
