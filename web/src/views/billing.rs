//! Monthly billing grid: one row per active subscriber with due/paid
//! switches for the selected month. Each row owns its billing-state
//! resource so toggling one subscriber never refetches the whole table;
//! a successful write also refreshes the outstanding total above it.
//!
//! The paid switch is disabled while the month is not due, and toggling due
//! off also sends paid=false; the server normalizes the write the same way.

use api::models::{derive_status, paid_toggle_disabled, MonthStatus};
use api::money::format_usd;
use api::phone::{format_phone_display, is_placeholder_phone};
use api::{Package, Subscriber};
use dioxus::prelude::*;
use ui::pickers::{month_name_en, MonthSelect, YearSelect};
use ui::{use_toasts, ToastLevel};

use super::current_year_month;

#[component]
pub fn Billing() -> Element {
    let (current_year, current_month) = current_year_month();
    let mut year = use_signal(|| current_year);
    let mut month = use_signal(|| current_month);

    let subscribers =
        use_resource(|| async { api::subscribers::get_all_active_subscribers().await });
    let packages = use_resource(|| async { api::packages::get_all_packages().await });

    let mut total =
        use_resource(move || async move { api::billing::get_total_due_for_month(year(), month()).await });

    let package_list: Vec<Package> = match &*packages.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    let total_value = match &*total.read() {
        Some(Ok(cents)) => rsx! { "{format_usd(*cents)}" },
        Some(Err(_)) => rsx! { span { class: "stat-error", "unavailable" } },
        None => rsx! { span { class: "muted", "..." } },
    };

    let table_body = match &*subscribers.read() {
        Some(Ok(list)) => rsx! {
            div { class: "card",
                table { class: "table",
                    thead {
                        tr {
                            th { "Subscriber" }
                            th { "Phone" }
                            th { "Package" }
                            th { "Due" }
                            th { "Paid" }
                        }
                    }
                    tbody {
                        for s in list.iter().cloned() {
                            BillingRow {
                                key: "{s.phone}",
                                package_label: package_list
                                    .iter()
                                    .find(|p| p.id == s.package_id)
                                    .map(|p| format!("{} ({})", p.name, format_usd(p.price_usd)))
                                    .unwrap_or_else(|| "—".to_string()),
                                year,
                                month,
                                on_changed: move |_| total.restart(),
                                subscriber: s,
                            }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! { div { class: "card alert alert-error", "{e}" } },
        None => rsx! { div { class: "card", p { class: "muted", "Loading..." } } },
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Monthly Billing" }
                div { class: "picker-row",
                    MonthSelect { value: month(), onchange: move |m| month.set(m) }
                    YearSelect {
                        value: year(),
                        current_year,
                        onchange: move |y| year.set(y),
                    }
                }
            }

            div { class: "card stat-card",
                div { class: "stat-label",
                    "Outstanding — {month_name_en(month())} {year()}"
                }
                div { class: "stat-value", {total_value} }
            }

            {table_body}
        }
    }
}

#[component]
fn BillingRow(
    subscriber: Subscriber,
    package_label: String,
    year: ReadOnlySignal<i32>,
    month: ReadOnlySignal<u32>,
    on_changed: EventHandler<()>,
) -> Element {
    let mut toasts = use_toasts();

    let state_phone = subscriber.phone.clone();
    let mut state = use_resource(move || {
        let phone = state_phone.clone();
        async move { api::billing::get_billing_state(phone).await }
    });

    let loading = state.read().is_none();
    let status = match &*state.read() {
        Some(Ok(years)) => derive_status(years, year(), month()),
        _ => MonthStatus::unset(month()),
    };

    let write_status = {
        let phone = subscriber.phone.clone();
        move |due: bool, paid: bool| {
            let phone = phone.clone();
            spawn(async move {
                match api::billing::set_month_billing_status(phone, year(), month(), due, paid)
                    .await
                {
                    Ok(()) => {
                        toasts
                            .write()
                            .push(ToastLevel::Success, "Billing status updated");
                        state.restart();
                        // The month total depends on this row's status.
                        on_changed.call(());
                    }
                    Err(e) => toasts.write().push(ToastLevel::Error, e.to_string()),
                }
            });
        }
    };

    let toggle_due = {
        let write_status = write_status.clone();
        move |_| {
            let next_due = !status.due;
            // Turning due off always clears paid.
            write_status(next_due, status.paid && next_due);
        }
    };

    let toggle_paid = move |_| {
        write_status(status.due, !status.paid);
    };

    rsx! {
        tr {
            td { "{subscriber.full_name}" }
            td {
                if is_placeholder_phone(&subscriber.phone) {
                    span { class: "badge badge-muted", "Unclaimed" }
                } else {
                    "{format_phone_display(&subscriber.phone)}"
                }
            }
            td { "{package_label}" }
            td {
                input {
                    r#type: "checkbox",
                    class: "switch",
                    checked: status.due,
                    disabled: loading,
                    onchange: toggle_due,
                }
            }
            td {
                input {
                    r#type: "checkbox",
                    class: "switch",
                    checked: status.paid,
                    disabled: loading || paid_toggle_disabled(&status),
                    onchange: toggle_paid,
                }
            }
        }
    }
}
