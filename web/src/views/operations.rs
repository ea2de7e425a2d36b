//! Admin landing page: one card per administrative area.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Operations() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "page", dir: "rtl",
            h1 { class: "page-title", "عمليات المالك" }
            p { class: "page-subtitle", "اختر القسم الذي تريد إدارته" }

            div { class: "ops-grid",
                button {
                    class: "card ops-card",
                    onclick: move |_| { nav.push(Route::Dashboard {}); },
                    h2 { "لوحة التحكم" }
                    p { "إجمالي الدخل المتوقع شهرياً وسنوياً" }
                }
                button {
                    class: "card ops-card",
                    onclick: move |_| { nav.push(Route::Subscribers {}); },
                    h2 { "المشتركين" }
                    p { "إضافة وتعديل المشتركين والاستيراد الجماعي" }
                }
                button {
                    class: "card ops-card",
                    onclick: move |_| { nav.push(Route::Billing {}); },
                    h2 { "الفواتير الشهرية" }
                    p { "حالة الاستحقاق والدفع لكل مشترك" }
                }
            }
        }
    }
}
