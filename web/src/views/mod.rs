mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod claim;
pub use claim::Claim;

mod profile_setup;
pub use profile_setup::ProfileSetup;

mod shell;
pub use shell::Shell;

mod access_denied;
pub use access_denied::AccessDenied;

mod operations;
pub use operations::Operations;

mod dashboard;
pub use dashboard::Dashboard;

mod subscribers;
pub use subscribers::Subscribers;

mod billing;
pub use billing::Billing;

mod my_dues;
pub use my_dues::MyDues;

/// Current (year, month) for the date pickers' defaults.
pub(crate) fn current_year_month() -> (i32, u32) {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        (date.get_full_year() as i32, date.get_month() + 1)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use chrono::Datelike;
        let now = chrono::Utc::now();
        (now.year(), now.month())
    }
}

/// Today as a `YYYY-MM-DD` string for date inputs.
pub(crate) fn today_date_input() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let iso: String = js_sys::Date::new_0().to_iso_string().into();
        iso.chars().take(10).collect()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Utc::now().date_naive().to_string()
    }
}

/// Convert a `YYYY-MM-DD` date-input value to a nanosecond epoch at UTC
/// midnight. `None` when the string does not parse.
pub(crate) fn date_input_to_ns(value: &str) -> Option<i64> {
    #[cfg(target_arch = "wasm32")]
    {
        let ms = js_sys::Date::parse(value);
        if ms.is_nan() {
            return None;
        }
        Some((ms as i64) * 1_000_000)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let date = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
        let midnight = date.and_hms_opt(0, 0, 0)?;
        Some(midnight.and_utc().timestamp_nanos_opt()?)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_date_input_to_ns() {
        // 2024-01-01T00:00:00Z
        assert_eq!(date_input_to_ns("2024-01-01"), Some(1_704_067_200_000_000_000));
        assert_eq!(date_input_to_ns("not-a-date"), None);
    }
}
