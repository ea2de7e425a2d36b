//! Month and year selectors shared by the dashboard, billing, and dues
//! pages. English labels on the admin pages, Arabic on the subscriber-facing
//! ones.

use dioxus::prelude::*;

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

pub fn month_name_en(month: u32) -> &'static str {
    MONTHS_EN
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("?")
}

pub fn month_name_ar(month: u32) -> &'static str {
    MONTHS_AR
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("?")
}

/// Five-year window centered just past the current year, matching the
/// pickers on every page: two years back through two years ahead.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (current_year - 2..current_year + 3).collect()
}

#[component]
pub fn MonthSelect(
    value: u32,
    #[props(default = false)] arabic: bool,
    onchange: EventHandler<u32>,
) -> Element {
    rsx! {
        select {
            class: "select",
            value: "{value}",
            onchange: move |evt| {
                if let Ok(month) = evt.value().parse::<u32>() {
                    onchange.call(month);
                }
            },
            for month in 1u32..=12 {
                option {
                    value: "{month}",
                    selected: month == value,
                    if arabic { "{month_name_ar(month)}" } else { "{month_name_en(month)}" }
                }
            }
        }
    }
}

#[component]
pub fn YearSelect(value: i32, current_year: i32, onchange: EventHandler<i32>) -> Element {
    rsx! {
        select {
            class: "select",
            value: "{value}",
            onchange: move |evt| {
                if let Ok(year) = evt.value().parse::<i32>() {
                    onchange.call(year);
                }
            },
            for year in year_options(current_year) {
                option {
                    value: "{year}",
                    selected: year == value,
                    "{year}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(month_name_en(1), "January");
        assert_eq!(month_name_en(12), "December");
        assert_eq!(month_name_ar(1), "يناير");
    }

    #[test]
    fn test_out_of_range_months() {
        assert_eq!(month_name_en(0), "?");
        assert_eq!(month_name_en(13), "?");
        assert_eq!(month_name_ar(0), "?");
        assert_eq!(month_name_ar(13), "?");
    }

    #[test]
    fn test_year_window() {
        assert_eq!(year_options(2024), vec![2022, 2023, 2024, 2025, 2026]);
        assert_eq!(year_options(2024).len(), 5);
    }
}
