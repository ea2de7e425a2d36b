//! # Subscriber operations
//!
//! Phone is the natural key: updates and lookups address a subscriber by
//! phone, never by id, and the phone itself is immutable through
//! `update_subscriber`. Admin only throughout.
//!
//! Bulk import takes a newline-separated blob of names and creates one row
//! per non-blank line; each row gets a synthetic `placeholder-{id}` phone
//! that the claim flow later promotes to a real number.

use dioxus::prelude::*;

use crate::models::{
    BulkImportInput, BulkImportOutcome, BulkImportStatus, DeleteAllSubscribersResult, Subscriber,
};

/// All active subscribers, ordered by name.
#[cfg(feature = "server")]
#[get("/api/subscribers", session: tower_sessions::Session)]
pub async fn get_all_active_subscribers() -> Result<Vec<Subscriber>, ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let subscribers: Vec<Subscriber> = sqlx::query_as(
        "SELECT id, full_name, phone, package_id, subscription_start_date, active
         FROM subscribers WHERE active ORDER BY full_name, id",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(subscribers)
}

#[cfg(not(feature = "server"))]
#[get("/api/subscribers")]
pub async fn get_all_active_subscribers() -> Result<Vec<Subscriber>, ServerFnError> {
    Ok(Vec::new())
}

/// A single subscriber by phone.
#[cfg(feature = "server")]
#[get("/api/subscribers/by-phone", session: tower_sessions::Session)]
pub async fn get_subscriber(phone: String) -> Result<Subscriber, ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let subscriber: Option<Subscriber> = sqlx::query_as(
        "SELECT id, full_name, phone, package_id, subscription_start_date, active
         FROM subscribers WHERE phone = $1",
    )
    .bind(&phone)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    subscriber.ok_or_else(|| ServerFnError::new("No such subscriber"))
}

#[cfg(not(feature = "server"))]
#[get("/api/subscribers/by-phone")]
pub async fn get_subscriber(phone: String) -> Result<Subscriber, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a subscriber. Admin only.
#[cfg(feature = "server")]
#[post("/api/subscribers", session: tower_sessions::Session)]
pub async fn create_subscriber(
    full_name: String,
    phone: String,
    package_id: i64,
    subscription_start_date: i64,
) -> Result<Subscriber, ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let full_name = full_name.trim().to_string();
    let phone = phone.trim().to_string();
    if full_name.is_empty() {
        return Err(ServerFnError::new("Full name is required"));
    }
    if phone.is_empty() {
        return Err(ServerFnError::new("Phone is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let taken: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM subscribers WHERE phone = $1)")
        .bind(&phone)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if taken.0 {
        return Err(ServerFnError::new("Phone number is already taken"));
    }

    let subscriber: Subscriber = sqlx::query_as(
        "INSERT INTO subscribers (full_name, phone, package_id, subscription_start_date, active)
         VALUES ($1, $2, $3, $4, TRUE)
         RETURNING id, full_name, phone, package_id, subscription_start_date, active",
    )
    .bind(&full_name)
    .bind(&phone)
    .bind(package_id)
    .bind(subscription_start_date)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(phone = %subscriber.phone, "subscriber created");

    Ok(subscriber)
}

#[cfg(not(feature = "server"))]
#[post("/api/subscribers")]
pub async fn create_subscriber(
    full_name: String,
    phone: String,
    package_id: i64,
    subscription_start_date: i64,
) -> Result<Subscriber, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update a subscriber's name, package, or active flag. The phone addresses
/// the row and cannot change here. Admin only.
#[cfg(feature = "server")]
#[post("/api/subscribers/update", session: tower_sessions::Session)]
pub async fn update_subscriber(
    phone: String,
    full_name: String,
    package_id: i64,
    active: bool,
) -> Result<Subscriber, ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let full_name = full_name.trim().to_string();
    if full_name.is_empty() {
        return Err(ServerFnError::new("Full name is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let subscriber: Option<Subscriber> = sqlx::query_as(
        "UPDATE subscribers SET full_name = $1, package_id = $2, active = $3
         WHERE phone = $4
         RETURNING id, full_name, phone, package_id, subscription_start_date, active",
    )
    .bind(&full_name)
    .bind(package_id)
    .bind(active)
    .bind(&phone)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    subscriber.ok_or_else(|| ServerFnError::new("No such subscriber"))
}

#[cfg(not(feature = "server"))]
#[post("/api/subscribers/update")]
pub async fn update_subscriber(
    phone: String,
    full_name: String,
    package_id: i64,
    active: bool,
) -> Result<Subscriber, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Import one subscriber per non-blank line of `input.names`. Each outcome
/// is tagged per name; a duplicate active name fails that line without
/// aborting the rest. Admin only.
#[cfg(feature = "server")]
#[post("/api/subscribers/bulk", session: tower_sessions::Session)]
pub async fn bulk_create_subscribers(
    input: BulkImportInput,
) -> Result<Vec<BulkImportOutcome>, ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let mut outcomes = Vec::new();

    for line in input.names.lines() {
        let name = line.trim();
        if name.is_empty() {
            continue;
        }

        let duplicate: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM subscribers WHERE full_name = $1 AND active)",
        )
        .bind(name)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

        if duplicate.0 {
            outcomes.push(BulkImportOutcome {
                name: name.to_string(),
                status: BulkImportStatus::Failed(
                    "An active subscriber with this name already exists".to_string(),
                ),
            });
            continue;
        }

        // nextval runs before currval in the same VALUES row, so the
        // placeholder phone always matches the generated id.
        let inserted: Result<Subscriber, sqlx::Error> = sqlx::query_as(
            "INSERT INTO subscribers (id, full_name, phone, package_id, subscription_start_date, active)
             VALUES (nextval('subscribers_id_seq'),
                     $1,
                     'placeholder-' || currval('subscribers_id_seq'),
                     $2, $3, TRUE)
             RETURNING id, full_name, phone, package_id, subscription_start_date, active",
        )
        .bind(name)
        .bind(input.package_id)
        .bind(input.subscription_start_date)
        .fetch_one(pool)
        .await;

        match inserted {
            Ok(subscriber) => outcomes.push(BulkImportOutcome {
                name: name.to_string(),
                status: BulkImportStatus::Created(subscriber),
            }),
            Err(e) => outcomes.push(BulkImportOutcome {
                name: name.to_string(),
                status: BulkImportStatus::Failed(e.to_string()),
            }),
        }
    }

    tracing::info!(imported = outcomes.len(), "bulk import finished");

    Ok(outcomes)
}

#[cfg(not(feature = "server"))]
#[post("/api/subscribers/bulk")]
pub async fn bulk_create_subscribers(
    input: BulkImportInput,
) -> Result<Vec<BulkImportOutcome>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete every subscriber and their billing records. Admin only.
#[cfg(feature = "server")]
#[post("/api/subscribers/delete-all", session: tower_sessions::Session)]
pub async fn delete_all_subscribers() -> Result<DeleteAllSubscribersResult, ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM billing_status")
        .execute(&mut *tx)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let deleted = sqlx::query("DELETE FROM subscribers")
        .execute(&mut *tx)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tx.commit()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::warn!(deleted = deleted.rows_affected(), "all subscribers deleted");

    Ok(DeleteAllSubscribersResult {
        subscribers_deleted: deleted.rows_affected(),
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/subscribers/delete-all")]
pub async fn delete_all_subscribers() -> Result<DeleteAllSubscribersResult, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Whether a phone already belongs to a subscriber. Admin only.
#[cfg(feature = "server")]
#[get("/api/subscribers/phone-taken", session: tower_sessions::Session)]
pub async fn is_phone_number_taken(phone: String) -> Result<bool, ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let taken: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM subscribers WHERE phone = $1)")
        .bind(&phone)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(taken.0)
}

#[cfg(not(feature = "server"))]
#[get("/api/subscribers/phone-taken")]
pub async fn is_phone_number_taken(phone: String) -> Result<bool, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
