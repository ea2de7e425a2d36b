//! First-login profile setup. A saved profile is what moves an account past
//! this screen; subscribers with an existing line can jump to the claim flow
//! instead.

use api::UserProfile;
use dioxus::prelude::*;
use ui::{refresh_auth, use_auth, use_toasts, ToastLevel};

#[component]
pub fn ProfileSetup(on_claim: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut toasts = use_toasts();
    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if name().trim().is_empty() {
                toasts.write().push(ToastLevel::Error, "يرجى إدخال اسمك");
                return;
            }
            if phone().trim().is_empty() {
                toasts.write().push(ToastLevel::Error, "يرجى إدخال رقم هاتفك");
                return;
            }

            saving.set(true);
            let profile = UserProfile {
                name: name().trim().to_string(),
                phone: phone().trim().to_string(),
            };
            match api::profile::save_caller_user_profile(profile).await {
                Ok(()) => {
                    toasts.write().push(ToastLevel::Success, "تم حفظ الملف الشخصي");
                    refresh_auth(auth).await;
                }
                Err(e) => {
                    saving.set(false);
                    toasts.write().push(ToastLevel::Error, e.to_string());
                }
            }
        });
    };

    rsx! {
        div { class: "auth-screen", dir: "rtl",
            div { class: "card auth-card",
                div { class: "brand-badge", "T@N" }
                h1 { class: "auth-title", "إعداد الملف الشخصي" }
                p { class: "auth-subtitle", "أدخل اسمك ورقم هاتفك للمتابعة" }

                form {
                    class: "auth-form",
                    onsubmit: handle_save,

                    input {
                        class: "input",
                        placeholder: "الاسم الكامل",
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }

                    input {
                        class: "input",
                        r#type: "tel",
                        placeholder: "رقم الهاتف",
                        value: phone(),
                        oninput: move |evt| phone.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "جاري الحفظ..." } else { "حفظ" }
                    }
                }

                div { class: "divider" }

                button {
                    class: "btn btn-ghost btn-block",
                    onclick: move |_| on_claim.call(()),
                    "لدي اشتراك بالفعل — ربط حسابي"
                }
            }
        }
    }
}
