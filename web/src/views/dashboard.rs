//! Admin dashboard: expected income for the selected month and year, plus
//! the outstanding-bills report for that month. All totals are computed
//! server-side; this page only formats cents.

use api::money::format_usd;
use dioxus::prelude::*;
use ui::pickers::{month_name_en, MonthSelect, YearSelect};

use super::current_year_month;

fn total_node(value: &Option<Result<i64, ServerFnError>>) -> Element {
    match value {
        Some(Ok(total)) => rsx! { "{format_usd(*total)}" },
        Some(Err(_)) => rsx! { span { class: "stat-error", "unavailable" } },
        None => rsx! { span { class: "muted", "..." } },
    }
}

#[component]
pub fn Dashboard() -> Element {
    let (current_year, current_month) = current_year_month();
    let mut year = use_signal(|| current_year);
    let mut month = use_signal(|| current_month);

    let month_total =
        use_resource(move || async move { api::billing::get_total_due_for_month(year(), month()).await });
    let year_total =
        use_resource(move || async move { api::billing::get_total_due_for_year(year()).await });
    let bills =
        use_resource(move || async move { api::billing::fetch_monthly_bills(year(), month()).await });

    let month_value = total_node(&month_total.read());
    let year_value = total_node(&year_total.read());

    let bills_body = match &*bills.read() {
        Some(Ok(result)) if result.subscribers.is_empty() => rsx! {
            p { class: "muted",
                "Nothing outstanding for {month_name_en(result.month)} {result.year}."
            }
        },
        Some(Ok(result)) => rsx! {
            table { class: "table",
                thead {
                    tr {
                        th { "Subscriber" }
                        th { "Amount due" }
                    }
                }
                tbody {
                    for bill in result.subscribers.iter() {
                        tr { key: "{bill.full_name}",
                            td { "{bill.full_name}" }
                            td { "{format_usd(bill.amount_due)}" }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! { p { class: "form-error", "{e}" } },
        None => rsx! { p { class: "muted", "Loading..." } },
    };

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Dashboard" }

            div { class: "picker-row",
                MonthSelect { value: month(), onchange: move |m| month.set(m) }
                YearSelect {
                    value: year(),
                    current_year,
                    onchange: move |y| year.set(y),
                }
            }

            div { class: "stat-grid",
                div { class: "card stat-card",
                    div { class: "stat-label",
                        "Expected income — {month_name_en(month())} {year()}"
                    }
                    div { class: "stat-value", {month_value} }
                }
                div { class: "card stat-card",
                    div { class: "stat-label", "Expected income — {year()}" }
                    div { class: "stat-value", {year_value} }
                }
            }

            div { class: "card",
                h2 { class: "section-title", "Outstanding bills" }
                {bills_body}
            }
        }
    }
}
