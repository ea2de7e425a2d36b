//! Subscriber-facing dues page. The only page a non-admin can reach: what
//! they owe for a selected month, or a notice when their account is not
//! linked to a subscription yet.

use api::money::format_usd;
use dioxus::prelude::*;
use ui::pickers::{month_name_ar, MonthSelect, YearSelect};

use super::current_year_month;
use crate::Route;

/// Server error strings that mean "not linked yet" rather than a failure.
fn is_unlinked_error(message: &str) -> bool {
    message.contains("does not have a user profile")
        || message.contains("does not have an active subscription")
}

#[component]
pub fn MyDues() -> Element {
    let (current_year, current_month) = current_year_month();
    let mut year = use_signal(|| current_year);
    let mut month = use_signal(|| current_month);

    let due =
        use_resource(move || async move { api::billing::get_caller_monthly_due(year(), month()).await });

    let dues_body = match &*due.read() {
        Some(Ok(d)) if d.paid => rsx! {
            div { class: "card dues-card",
                div { class: "stat-label", "{month_name_ar(d.month)} {d.year}" }
                div { class: "dues-paid", "مدفوع ✓" }
            }
        },
        Some(Ok(d)) if d.amount_cents > 0 => rsx! {
            div { class: "card dues-card",
                div { class: "stat-label", "{month_name_ar(d.month)} {d.year}" }
                div { class: "stat-value", "{format_usd(d.amount_cents)}" }
                div { class: "dues-outstanding", "مستحق الدفع" }
            }
        },
        Some(Ok(d)) => rsx! {
            div { class: "card dues-card",
                div { class: "stat-label", "{month_name_ar(d.month)} {d.year}" }
                div { class: "dues-clear", "لا توجد مستحقات لهذا الشهر" }
            }
        },
        Some(Err(e)) if is_unlinked_error(&e.to_string()) => rsx! {
            div { class: "card alert alert-info",
                p { "حسابك غير مرتبط باشتراك بعد." }
                Link { class: "btn btn-primary", to: Route::Claim {}, "ربط اشتراك" }
            }
        },
        Some(Err(e)) => rsx! {
            div { class: "card alert alert-error", "{e}" }
        },
        None => rsx! {
            div { class: "card", p { class: "muted", "جاري التحميل..." } }
        },
    };

    rsx! {
        div { class: "page", dir: "rtl",
            h1 { class: "page-title", "مستحقاتي" }

            div { class: "picker-row",
                MonthSelect {
                    value: month(),
                    arabic: true,
                    onchange: move |m| month.set(m),
                }
                YearSelect {
                    value: year(),
                    current_year,
                    onchange: move |y| year.set(y),
                }
            }

            {dues_body}

            div { class: "card info-card",
                p { "تُسدَّد المستحقات لدى مركز TAHA @NET مباشرة." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlinked_error_detection() {
        assert!(is_unlinked_error("error: Caller does not have a user profile"));
        assert!(is_unlinked_error(
            "Caller does not have an active subscription"
        ));
        assert!(!is_unlinked_error("connection refused"));
    }
}
