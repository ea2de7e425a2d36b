//! # API crate — shared fullstack server functions for TAHA @NET
//!
//! This crate is the backbone of the subscriber-management fullstack
//! architecture. It defines every Dioxus server function the web frontend
//! calls, along with the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Password hashing (Argon2id), session key, caller guards |
//! | [`billing`] | — | Per-month due/paid grid, totals, reports, caller dues |
//! | [`claim`] | — | Linking an authenticated identity to a subscriber by phone |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Domain models and their client-safe projections |
//! | [`money`] | — | Cent-denominated USD formatting |
//! | [`packages`] | — | Subscription tier CRUD |
//! | [`phone`] | — | Phone sanitization/validation, placeholder detection |
//! | [`profile`] | — | Caller profile and role operations |
//! | [`subscribers`] | — | Subscriber CRUD, bulk import, wipe |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` annotated with `#[get(...)]` or `#[post(...)]` is
//! a Dioxus server function, compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that
//! forwards the call over HTTP.
//!
//! This file holds the identity surface: `get_current_user`, `register`,
//! `login_password`, `logout`. The domain surfaces live in their modules.

use dioxus::prelude::*;

pub mod auth;
pub mod billing;
pub mod claim;
pub mod db;
pub mod models;
pub mod money;
pub mod packages;
pub mod phone;
pub mod profile;
pub mod subscribers;

pub use models::{
    BillingYear, BulkImportInput, BulkImportOutcome, BulkImportStatus, CallerPaymentDue,
    ClaimRequest, ClaimedSubscriber, DeleteAllSubscribersResult, MonthStatus, MonthlyBillsResult,
    Package, Subscriber, SubscriberBillingSummary, SubscriberMonthlyBill, UserInfo, UserProfile,
    UserRole,
};

/// Get the current authenticated account from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::user::Account;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let account: Option<Account> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(account.map(|a| a.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new account with email and password. The very first account
/// becomes the admin; everyone after starts as a guest until they claim a
/// subscription or an admin assigns a role.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::user::Account;

    let email = email.trim().to_lowercase();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new("Password must be at least 8 characters"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i64,)> = sqlx::query_as("SELECT 1 as n FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(ServerFnError::new)?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let role = if count == 0 {
        models::UserRole::Admin
    } else {
        models::UserRole::Guest
    };

    let account: Account = sqlx::query_as(
        "INSERT INTO users (email, password_hash, role) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&email)
    .bind(&password_hash)
    .bind(role.as_str())
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, account.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(email = %account.email, role = %role, "account registered");

    Ok(account.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login-password", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::user::Account;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let account: Option<Account> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(account) = account else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid =
        auth::verify_password(&password, &account.password_hash).map_err(ServerFnError::new)?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, account.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(account.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}
