//! # Account, profile, and role models
//!
//! Two representations of an authenticated account:
//!
//! - [`Account`] (server only) — the full `users` row, loaded via
//!   [`sqlx::FromRow`]. Carries the Argon2 password hash and audit
//!   timestamps; never crosses the server/client boundary.
//! - [`UserInfo`] — the client-safe projection produced by
//!   [`Account::to_info`]: id as a string (WASM-friendly), email, and the
//!   parsed [`UserRole`].
//!
//! [`UserProfile`] is the separate name/phone record an authenticated user
//! creates during the setup step; its absence is what drives the
//! profile-setup gate state. [`UserRole`] is stored as text in the database
//! and parsed through [`std::str::FromStr`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Access level of an account. One per identity; assigned by an admin-only
/// operation, except for the bootstrap admin and the claim flow promoting
/// guests to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Guest,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Guest => "guest",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "user" => Ok(UserRole::User),
            "guest" => Ok(UserRole::Guest),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

/// Full account record from the `users` table.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Account {
    /// Convert to the client-safe projection. An unparseable role column
    /// degrades to `Guest` rather than failing the whole call.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            role: self.role.parse().unwrap_or(UserRole::Guest),
        }
    }
}

/// Account information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub role: UserRole,
}

/// The name/phone profile a user fills in once after first login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(FromRow))]
pub struct UserProfile {
    pub name: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::Admin, UserRole::User, UserRole::Guest] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert!("owner".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_only_admin_is_admin() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::User.is_admin());
        assert!(!UserRole::Guest.is_admin());
    }
}
