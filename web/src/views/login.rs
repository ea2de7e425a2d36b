//! Login page: the authentication gate in front of everything else.

use dioxus::prelude::*;
use ui::{refresh_auth, use_auth};

use crate::Route;

/// Email + password login card.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in: straight to the role's landing page.
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Root {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Please enter your email and password".to_string()));
                return;
            }

            loading.set(true);
            match api::login_password(e, p).await {
                Ok(_) => {
                    refresh_auth(auth).await;
                    nav.replace(Route::Root {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-screen",

            div {
                class: "card auth-card",

                div { class: "brand-badge", "T@N" }
                h1 { class: "auth-title", "TAHA @NET" }
                p { class: "auth-subtitle", "Internet Center Subscriber Management" }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    input {
                        class: "input",
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }

                    input {
                        class: "input",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Login" }
                    }
                }

                p {
                    class: "auth-footer",
                    "No account yet? "
                    Link { class: "link", to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
