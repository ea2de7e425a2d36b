//! # Caller profile and role operations
//!
//! - `get_caller_user_profile` / `save_caller_user_profile` — the name/phone
//!   record created during the setup step; its absence drives the
//!   profile-setup gate.
//! - `get_caller_user_role` / `is_caller_admin` — role resolution for the
//!   gate, `Guest` when unauthenticated.
//! - `assign_user_role` / `get_user_profile` — admin-only role assignment
//!   and profile lookup by account id.

use dioxus::prelude::*;

use crate::models::{UserProfile, UserRole};

/// Get the calling user's profile, `None` when none has been saved yet.
#[cfg(feature = "server")]
#[get("/api/profile/me", session: tower_sessions::Session)]
pub async fn get_caller_user_profile() -> Result<Option<UserProfile>, ServerFnError> {
    use crate::auth::require_user;
    use crate::db::get_pool;

    let user_id = require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile: Option<UserProfile> =
        sqlx::query_as("SELECT name, phone FROM user_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(profile)
}

#[cfg(not(feature = "server"))]
#[get("/api/profile/me")]
pub async fn get_caller_user_profile() -> Result<Option<UserProfile>, ServerFnError> {
    Ok(None)
}

/// Create or replace the calling user's profile.
#[cfg(feature = "server")]
#[post("/api/profile/me", session: tower_sessions::Session)]
pub async fn save_caller_user_profile(profile: UserProfile) -> Result<(), ServerFnError> {
    use crate::auth::require_user;
    use crate::db::get_pool;

    let user_id = require_user(&session).await?;

    let name = profile.name.trim().to_string();
    let phone = profile.phone.trim().to_string();
    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }
    if phone.is_empty() {
        return Err(ServerFnError::new("Phone is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO user_profiles (user_id, name, phone)
         VALUES ($1, $2, $3)
         ON CONFLICT (user_id) DO UPDATE SET
            name = $2,
            phone = $3,
            updated_at = NOW()",
    )
    .bind(user_id)
    .bind(&name)
    .bind(&phone)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/profile/me")]
pub async fn save_caller_user_profile(profile: UserProfile) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Role of the calling user; `Guest` when unauthenticated.
#[cfg(feature = "server")]
#[get("/api/profile/role", session: tower_sessions::Session)]
pub async fn get_caller_user_role() -> Result<UserRole, ServerFnError> {
    crate::auth::caller_role(&session).await
}

#[cfg(not(feature = "server"))]
#[get("/api/profile/role")]
pub async fn get_caller_user_role() -> Result<UserRole, ServerFnError> {
    Ok(UserRole::Guest)
}

/// Whether the calling user is an admin.
#[cfg(feature = "server")]
#[get("/api/profile/is-admin", session: tower_sessions::Session)]
pub async fn is_caller_admin() -> Result<bool, ServerFnError> {
    Ok(crate::auth::caller_role(&session).await?.is_admin())
}

#[cfg(not(feature = "server"))]
#[get("/api/profile/is-admin")]
pub async fn is_caller_admin() -> Result<bool, ServerFnError> {
    Ok(false)
}

/// Assign a role to an account. Admin only.
#[cfg(feature = "server")]
#[post("/api/profile/assign-role", session: tower_sessions::Session)]
pub async fn assign_user_role(user_id: String, role: UserRole) -> Result<(), ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let target =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query("UPDATE users SET role = $1, updated_at = NOW() WHERE id = $2")
        .bind(role.as_str())
        .bind(target)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("No such user"));
    }

    tracing::info!(user = %target, role = %role, "role assigned");

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/profile/assign-role")]
pub async fn assign_user_role(user_id: String, role: UserRole) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Look up another account's profile by id. Admin only.
#[cfg(feature = "server")]
#[get("/api/profile/:user_id", session: tower_sessions::Session)]
pub async fn get_user_profile(user_id: String) -> Result<Option<UserProfile>, ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let target =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile: Option<UserProfile> =
        sqlx::query_as("SELECT name, phone FROM user_profiles WHERE user_id = $1")
            .bind(target)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(profile)
}

#[cfg(not(feature = "server"))]
#[get("/api/profile/:user_id")]
pub async fn get_user_profile(user_id: String) -> Result<Option<UserProfile>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
