use dioxus::prelude::*;

use crate::Route;

/// Shown when a non-admin navigates to an admin page directly.
#[component]
pub fn AccessDenied() -> Element {
    rsx! {
        div { class: "screen-center",
            div { class: "card access-denied",
                h2 { "Access denied" }
                p { "This page is only available to the administrator." }
                Link { class: "btn btn-primary", to: Route::MyDues {}, "Go to my dues" }
            }
        }
    }
}
