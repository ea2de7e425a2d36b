//! # Billing operations
//!
//! The billing grid stores one `{due, paid}` row per (phone, year, month);
//! months without a row are implicitly not due. `set_month_billing_status`
//! replaces the whole month atomically — there is no partial-field update —
//! and normalizes `paid` to false whenever `due` is false, so `paid ⇒ due`
//! holds in storage no matter what the client sends.
//!
//! Totals and reports are computed here, server-side; clients only display
//! them.

use dioxus::prelude::*;

use crate::models::{
    BillingYear, CallerPaymentDue, MonthStatus, MonthlyBillsResult, SubscriberBillingSummary,
    SubscriberMonthlyBill,
};

/// Full billing record set for one subscriber, grouped by year. Admin only.
#[cfg(feature = "server")]
#[get("/api/billing/state", session: tower_sessions::Session)]
pub async fn get_billing_state(phone: String) -> Result<Vec<BillingYear>, ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<(i32, i32, bool, bool)> = sqlx::query_as(
        "SELECT year, month, due, paid FROM billing_status
         WHERE phone = $1 ORDER BY year, month",
    )
    .bind(&phone)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let mut years: Vec<BillingYear> = Vec::new();
    for (year, month, due, paid) in rows {
        let status = MonthStatus {
            month: month as u32,
            due,
            paid,
        };
        match years.last_mut() {
            Some(entry) if entry.year == year => entry.months.push(status),
            _ => years.push(BillingYear {
                year,
                months: vec![status],
            }),
        }
    }

    Ok(years)
}

#[cfg(not(feature = "server"))]
#[get("/api/billing/state")]
pub async fn get_billing_state(phone: String) -> Result<Vec<BillingYear>, ServerFnError> {
    Ok(Vec::new())
}

/// Atomically replace one month's status for a subscriber. Admin only.
/// A month that is not due can never be paid; the write is normalized
/// rather than rejected so toggling due off also clears paid.
#[cfg(feature = "server")]
#[post("/api/billing/set-month", session: tower_sessions::Session)]
pub async fn set_month_billing_status(
    phone: String,
    year: i32,
    month: u32,
    due: bool,
    paid: bool,
) -> Result<(), ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    if !(1..=12).contains(&month) {
        return Err(ServerFnError::new("Month must be between 1 and 12"));
    }

    let (due, paid) = crate::models::normalize_month_status(due, paid);

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM subscribers WHERE phone = $1)")
        .bind(&phone)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if !exists.0 {
        return Err(ServerFnError::new("No such subscriber"));
    }

    sqlx::query(
        "INSERT INTO billing_status (phone, year, month, due, paid)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (phone, year, month) DO UPDATE SET
            due = $4,
            paid = $5",
    )
    .bind(&phone)
    .bind(year)
    .bind(month as i32)
    .bind(due)
    .bind(paid)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/billing/set-month")]
pub async fn set_month_billing_status(
    phone: String,
    year: i32,
    month: u32,
    due: bool,
    paid: bool,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sum of package prices over active subscribers that are due and unpaid for
/// the given month, in cents. Admin only.
#[cfg(feature = "server")]
#[get("/api/billing/total-month", session: tower_sessions::Session)]
pub async fn get_total_due_for_month(year: i32, month: u32) -> Result<i64, ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let total: (i64,) = sqlx::query_as(
        "SELECT COALESCE(SUM(p.price_usd), 0)
         FROM billing_status b
         JOIN subscribers s ON s.phone = b.phone
         JOIN packages p ON p.id = s.package_id
         WHERE s.active AND b.due AND NOT b.paid AND b.year = $1 AND b.month = $2",
    )
    .bind(year)
    .bind(month as i32)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(total.0)
}

#[cfg(not(feature = "server"))]
#[get("/api/billing/total-month")]
pub async fn get_total_due_for_month(year: i32, month: u32) -> Result<i64, ServerFnError> {
    Ok(0)
}

/// Same as [`get_total_due_for_month`] across all months of a year.
#[cfg(feature = "server")]
#[get("/api/billing/total-year", session: tower_sessions::Session)]
pub async fn get_total_due_for_year(year: i32) -> Result<i64, ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let total: (i64,) = sqlx::query_as(
        "SELECT COALESCE(SUM(p.price_usd), 0)
         FROM billing_status b
         JOIN subscribers s ON s.phone = b.phone
         JOIN packages p ON p.id = s.package_id
         WHERE s.active AND b.due AND NOT b.paid AND b.year = $1",
    )
    .bind(year)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(total.0)
}

#[cfg(not(feature = "server"))]
#[get("/api/billing/total-year")]
pub async fn get_total_due_for_year(year: i32) -> Result<i64, ServerFnError> {
    Ok(0)
}

/// Aggregate history for one subscriber. Admin only.
#[cfg(feature = "server")]
#[get("/api/billing/summary", session: tower_sessions::Session)]
pub async fn get_subscriber_billing_summary(
    phone: String,
) -> Result<SubscriberBillingSummary, ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let subscriber: Option<(String, i64)> = sqlx::query_as(
        "SELECT s.full_name, p.price_usd
         FROM subscribers s JOIN packages p ON p.id = s.package_id
         WHERE s.phone = $1",
    )
    .bind(&phone)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some((full_name, price_usd)) = subscriber else {
        return Err(ServerFnError::new("No such subscriber"));
    };

    let (months_due, months_paid, months_outstanding): (i64, i64, i64) = sqlx::query_as(
        "SELECT COUNT(*) FILTER (WHERE due),
                COUNT(*) FILTER (WHERE paid),
                COUNT(*) FILTER (WHERE due AND NOT paid)
         FROM billing_status WHERE phone = $1",
    )
    .bind(&phone)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(SubscriberBillingSummary {
        phone,
        full_name,
        months_due,
        months_paid,
        total_due_cents: months_outstanding * price_usd,
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/billing/summary")]
pub async fn get_subscriber_billing_summary(
    phone: String,
) -> Result<SubscriberBillingSummary, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Everything outstanding for one month, one line per subscriber. Admin only.
#[cfg(feature = "server")]
#[get("/api/billing/monthly-bills", session: tower_sessions::Session)]
pub async fn fetch_monthly_bills(
    year: i32,
    month: u32,
) -> Result<MonthlyBillsResult, ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<(String, i64)> = sqlx::query_as(
        "SELECT s.full_name, p.price_usd
         FROM billing_status b
         JOIN subscribers s ON s.phone = b.phone
         JOIN packages p ON p.id = s.package_id
         WHERE s.active AND b.due AND NOT b.paid AND b.year = $1 AND b.month = $2
         ORDER BY s.full_name",
    )
    .bind(year)
    .bind(month as i32)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(MonthlyBillsResult {
        year,
        month,
        subscribers: rows
            .into_iter()
            .map(|(full_name, amount_due)| SubscriberMonthlyBill {
                full_name,
                amount_due,
            })
            .collect(),
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/billing/monthly-bills")]
pub async fn fetch_monthly_bills(
    year: i32,
    month: u32,
) -> Result<MonthlyBillsResult, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// What the calling subscriber owes for a month. Resolves the caller's
/// claimed subscription; the error strings here are matched by the dues page
/// to show its "not linked" notice.
#[cfg(feature = "server")]
#[get("/api/billing/my-due", session: tower_sessions::Session)]
pub async fn get_caller_monthly_due(
    year: i32,
    month: u32,
) -> Result<CallerPaymentDue, ServerFnError> {
    use crate::auth::require_user;
    use crate::db::get_pool;

    let user_id = require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile: Option<(String,)> =
        sqlx::query_as("SELECT phone FROM user_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some((profile_phone,)) = profile else {
        return Err(ServerFnError::new("Caller does not have a user profile"));
    };

    // Claimed link first, profile phone as fallback.
    let subscriber: Option<(String, i64)> = sqlx::query_as(
        "SELECT s.phone, p.price_usd
         FROM subscribers s JOIN packages p ON p.id = s.package_id
         WHERE s.active AND (s.claimed_by = $1 OR s.phone = $2)
         ORDER BY (s.claimed_by = $1) DESC
         LIMIT 1",
    )
    .bind(user_id)
    .bind(&profile_phone)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some((phone, price_usd)) = subscriber else {
        return Err(ServerFnError::new(
            "Caller does not have an active subscription",
        ));
    };

    let status: Option<(bool, bool)> = sqlx::query_as(
        "SELECT due, paid FROM billing_status WHERE phone = $1 AND year = $2 AND month = $3",
    )
    .bind(&phone)
    .bind(year)
    .bind(month as i32)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (due, paid) = status.unwrap_or((false, false));

    Ok(CallerPaymentDue {
        year,
        month,
        amount_cents: if due && !paid { price_usd } else { 0 },
        paid,
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/billing/my-due")]
pub async fn get_caller_monthly_due(
    year: i32,
    month: u32,
) -> Result<CallerPaymentDue, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
