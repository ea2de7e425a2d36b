//! # Subscriber claim flow
//!
//! Links an authenticated identity to an existing subscriber record in one
//! transaction: the subscriber row gets `claimed_by`, a placeholder phone is
//! promoted to the real number, the caller's profile is created from the
//! subscriber, and a guest account is promoted to the `user` role. The
//! client only re-fetches afterwards.

use dioxus::prelude::*;

use crate::models::{ClaimRequest, ClaimedSubscriber};

/// Claim a subscriber by phone. Match order: an existing row carrying the
/// real phone, then the pinned `subscriber_id` if it is still unclaimed with
/// a placeholder phone, then an unclaimed placeholder row matching `name`.
#[cfg(feature = "server")]
#[post("/api/claim", session: tower_sessions::Session)]
pub async fn login_claim_subscriber(
    request: ClaimRequest,
) -> Result<ClaimedSubscriber, ServerFnError> {
    use crate::auth::require_user;
    use crate::db::get_pool;
    use crate::models::Subscriber;
    use crate::phone::{is_valid_phone, sanitize_phone};

    let user_id = require_user(&session).await?;

    let phone = sanitize_phone(&request.phone);
    if !is_valid_phone(&phone) {
        return Err(ServerFnError::new("رقم الهاتف غير صالح"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    const COLUMNS: &str = "id, full_name, phone, package_id, subscription_start_date, active";

    let mut subscriber: Option<Subscriber> = sqlx::query_as(&format!(
        "SELECT {COLUMNS}, claimed_by FROM subscribers WHERE phone = $1 AND active FOR UPDATE"
    ))
    .bind(&phone)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    if subscriber.is_none() {
        if let Some(id) = request.subscriber_id {
            subscriber = sqlx::query_as(&format!(
                "SELECT {COLUMNS} FROM subscribers
                 WHERE id = $1 AND active AND claimed_by IS NULL
                   AND phone LIKE 'placeholder-%' FOR UPDATE"
            ))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        }
    }

    if subscriber.is_none() && !request.name.trim().is_empty() {
        subscriber = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM subscribers
             WHERE full_name = $1 AND active AND claimed_by IS NULL
               AND phone LIKE 'placeholder-%'
             ORDER BY id LIMIT 1 FOR UPDATE"
        ))
        .bind(request.name.trim())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    }

    let Some(subscriber) = subscriber else {
        return Err(ServerFnError::new("لا يوجد مشترك بهذا الرقم"));
    };

    let claimed_by: Option<(Option<uuid::Uuid>,)> =
        sqlx::query_as("SELECT claimed_by FROM subscribers WHERE id = $1")
            .bind(subscriber.id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if let Some((Some(owner),)) = claimed_by {
        if owner != user_id {
            return Err(ServerFnError::new("هذا الاشتراك مرتبط بحساب آخر"));
        }
    }

    // Promote the placeholder phone and take ownership in one statement.
    let subscriber: Subscriber = sqlx::query_as(&format!(
        "UPDATE subscribers SET phone = $1, claimed_by = $2 WHERE id = $3 RETURNING {COLUMNS}"
    ))
    .bind(&phone)
    .bind(user_id)
    .bind(subscriber.id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO user_profiles (user_id, name, phone)
         VALUES ($1, $2, $3)
         ON CONFLICT (user_id) DO UPDATE SET name = $2, phone = $3, updated_at = NOW()",
    )
    .bind(user_id)
    .bind(&subscriber.full_name)
    .bind(&phone)
    .execute(&mut *tx)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE users SET role = 'user', updated_at = NOW() WHERE id = $1 AND role = 'guest'")
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tx.commit()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(subscriber = subscriber.id, "subscriber claimed");

    Ok(ClaimedSubscriber {
        claimed_phone: subscriber.phone.clone(),
        subscriber,
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/claim")]
pub async fn login_claim_subscriber(
    request: ClaimRequest,
) -> Result<ClaimedSubscriber, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
