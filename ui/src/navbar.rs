//! Top navigation bar, filtered by role.

use api::UserRole;
use dioxus::prelude::*;

use crate::gate::{nav_items, Page};

/// Tab-style navigation. Only the pages allowed for `role` are rendered;
/// the shell still verifies access per page, the navbar just hides what a
/// non-admin cannot reach.
#[component]
pub fn Navbar(role: UserRole, current: Page, on_navigate: EventHandler<Page>) -> Element {
    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-tabs",
                for page in nav_items(role).iter().copied() {
                    button {
                        class: if page == current { "nav-tab active" } else { "nav-tab" },
                        onclick: move |_| on_navigate.call(page),
                        "{page.label()}"
                    }
                }
            }
        }
    }
}
