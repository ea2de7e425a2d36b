//! Claim flow: link the logged-in account to an existing subscriber line by
//! its phone number. Validation messages mirror the server's and are shown
//! inline once the field has been touched.

use api::phone::{is_valid_phone, phone_validation_error, sanitize_phone};
use api::ClaimRequest;
use dioxus::prelude::*;
use ui::{refresh_auth, use_auth, use_toasts, ToastLevel};

use crate::Route;

#[component]
pub fn Claim() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut touched = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    if !auth().loading && !auth().is_authenticated() {
        nav.replace(Route::Login {});
    }

    let validation = phone_validation_error(&phone());
    let valid = is_valid_phone(&phone());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            touched.set(true);
            if !is_valid_phone(&phone()) {
                return;
            }

            submitting.set(true);
            // Name is the fallback match for bulk-imported rows that still
            // carry a placeholder phone.
            let request = ClaimRequest {
                subscriber_id: None,
                name: name().trim().to_string(),
                phone: phone(),
            };
            match api::claim::login_claim_subscriber(request).await {
                Ok(_) => {
                    toasts
                        .write()
                        .push(ToastLevel::Success, "تم ربط الحساب بنجاح!");
                    refresh_auth(auth).await;
                    nav.replace(Route::Root {});
                }
                Err(e) => {
                    submitting.set(false);
                    toasts.write().push(ToastLevel::Error, e.to_string());
                }
            }
        });
    };

    rsx! {
        div { class: "auth-screen", dir: "rtl",
            div { class: "card auth-card",
                div { class: "brand-badge", "T@N" }
                h1 { class: "auth-title", "ربط الاشتراك" }
                p { class: "auth-subtitle", "أدخل رقم هاتف الاشتراك لربطه بحسابك" }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    input {
                        class: "input",
                        placeholder: "الاسم كما هو مسجل لدى المركز (اختياري)",
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }

                    input {
                        class: if touched() && validation.is_some() { "input input-invalid" } else { "input" },
                        r#type: "tel",
                        inputmode: "numeric",
                        placeholder: "09XXXXXXXX",
                        value: phone(),
                        oninput: move |evt| {
                            // Digits only, capped at the valid length.
                            let digits: String =
                                sanitize_phone(&evt.value()).chars().take(10).collect();
                            phone.set(digits);
                            touched.set(true);
                        },
                    }

                    if touched() {
                        if let Some(message) = validation.clone() {
                            div { class: "form-error", "{message}" }
                        }
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: submitting() || !valid,
                        if submitting() { "جاري الربط..." } else { "ربط الاشتراك" }
                    }
                }

                p { class: "auth-footer",
                    Link { class: "link", to: Route::Root {}, "العودة" }
                }
            }
        }
    }
}
