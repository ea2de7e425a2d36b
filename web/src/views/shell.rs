//! The gated application shell. Resolves the render state from the auth
//! context and either shows one of the onboarding screens or the navigation
//! chrome around the routed page.

use dioxus::prelude::*;
use ui::{page_allowed, resolve_gate, GateState, LogoutButton, Navbar, Page};

use crate::views::{AccessDenied, Claim, ProfileSetup};
use crate::Route;

fn route_page(route: &Route) -> Option<Page> {
    match route {
        Route::Operations {} => Some(Page::Operations),
        Route::Dashboard {} => Some(Page::Dashboard),
        Route::Subscribers {} => Some(Page::Subscribers),
        Route::Billing {} => Some(Page::Billing),
        Route::MyDues {} => Some(Page::MyDues),
        _ => None,
    }
}

fn page_route(page: Page) -> Route {
    match page {
        Page::Operations => Route::Operations {},
        Page::Dashboard => Route::Dashboard {},
        Page::Subscribers => Route::Subscribers {},
        Page::Billing => Route::Billing {},
        Page::MyDues => Route::MyDues {},
    }
}

#[component]
pub fn Shell() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let mut wants_claim = use_signal(|| false);

    let state = {
        let a = auth();
        resolve_gate(
            a.loading,
            a.is_authenticated(),
            a.profile_loaded,
            a.profile.is_some(),
            a.is_admin(),
            wants_claim(),
        )
    };

    match state {
        GateState::Loading => rsx! {
            div { class: "screen-center",
                div { class: "spinner" }
            }
        },
        GateState::LoginGate => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        GateState::ProfileSetup => rsx! {
            ProfileSetup { on_claim: move |_| wants_claim.set(true) }
        },
        GateState::ClaimFlow => rsx! {
            Claim {}
        },
        GateState::AdminShell | GateState::SubscriberShell => {
            let role = auth().role();
            let page = route_page(&route);
            let current = page.unwrap_or(if role.is_admin() {
                Page::Operations
            } else {
                Page::MyDues
            });

            rsx! {
                div { class: "app-shell",
                    header { class: "app-header",
                        div { class: "brand",
                            span { class: "brand-badge", "T@N" }
                            span { class: "brand-name", "TAHA @NET" }
                        }
                        LogoutButton { class: "btn btn-ghost".to_string() }
                    }
                    Navbar {
                        role,
                        current,
                        on_navigate: move |p| {
                            nav.push(page_route(p));
                        },
                    }
                    main { class: "app-main",
                        if page.map(|p| page_allowed(role, p)).unwrap_or(true) {
                            Outlet::<Route> {}
                        } else {
                            AccessDenied {}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_page_mapping() {
        assert_eq!(route_page(&Route::Operations {}), Some(Page::Operations));
        assert_eq!(route_page(&Route::MyDues {}), Some(Page::MyDues));
        assert_eq!(route_page(&Route::Root {}), None);
    }

    #[test]
    fn test_page_route_round_trip() {
        for page in [
            Page::Operations,
            Page::Dashboard,
            Page::Subscribers,
            Page::Billing,
            Page::MyDues,
        ] {
            assert_eq!(route_page(&page_route(page)), Some(page));
        }
    }
}
