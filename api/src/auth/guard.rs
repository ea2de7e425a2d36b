//! Caller guards shared by the gated server functions.
//!
//! Every gated call starts by pulling the account id out of the session;
//! admin-only calls additionally load the role from the database rather than
//! trusting anything client-side.

use dioxus::prelude::ServerFnError;
use tower_sessions::Session;
use uuid::Uuid;

use crate::db::get_pool;
use crate::models::UserRole;

use super::SESSION_USER_ID_KEY;

/// Errors produced by the guards, mapped to `ServerFnError` at the boundary.
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Access denied")]
    AccessDenied,
    #[error("{0}")]
    Internal(String),
}

impl From<GuardError> for ServerFnError {
    fn from(e: GuardError) -> Self {
        ServerFnError::new(e.to_string())
    }
}

async fn session_user_id(session: &Session) -> Result<Option<Uuid>, GuardError> {
    let user_id: Option<String> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| GuardError::Internal(e.to_string()))?;

    match user_id {
        Some(id) => Uuid::parse_str(&id)
            .map(Some)
            .map_err(|e| GuardError::Internal(e.to_string())),
        None => Ok(None),
    }
}

/// The authenticated caller's account id, or `NotAuthenticated`.
pub async fn require_user(session: &Session) -> Result<Uuid, ServerFnError> {
    session_user_id(session)
        .await?
        .ok_or(GuardError::NotAuthenticated)
        .map_err(Into::into)
}

/// The caller's role as stored in the database; `Guest` when no session or
/// the account no longer exists.
pub async fn caller_role(session: &Session) -> Result<UserRole, ServerFnError> {
    let Some(user_id) = session_user_id(session).await? else {
        return Ok(UserRole::Guest);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let role: Option<(String,)> = sqlx::query_as("SELECT role FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(role
        .and_then(|(r,)| r.parse().ok())
        .unwrap_or(UserRole::Guest))
}

/// The caller's account id, provided the stored role is `admin`.
pub async fn require_admin(session: &Session) -> Result<Uuid, ServerFnError> {
    let user_id = require_user(session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let role: Option<(String,)> = sqlx::query_as("SELECT role FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let is_admin = role
        .and_then(|(r,)| r.parse::<UserRole>().ok())
        .map(|r| r.is_admin())
        .unwrap_or(false);

    if !is_admin {
        return Err(GuardError::AccessDenied.into());
    }

    Ok(user_id)
}
