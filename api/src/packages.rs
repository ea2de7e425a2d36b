//! Subscription tier (package) operations. Reads are open to any
//! authenticated caller; writes are admin only.

use dioxus::prelude::*;

use crate::models::Package;

/// All packages, ordered by id.
#[cfg(feature = "server")]
#[get("/api/packages", session: tower_sessions::Session)]
pub async fn get_all_packages() -> Result<Vec<Package>, ServerFnError> {
    use crate::auth::require_user;
    use crate::db::get_pool;

    require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let packages: Vec<Package> = sqlx::query_as("SELECT * FROM packages ORDER BY id")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(packages)
}

#[cfg(not(feature = "server"))]
#[get("/api/packages")]
pub async fn get_all_packages() -> Result<Vec<Package>, ServerFnError> {
    Ok(Vec::new())
}

/// A single package by id.
#[cfg(feature = "server")]
#[get("/api/packages/:id", session: tower_sessions::Session)]
pub async fn get_package(id: i64) -> Result<Package, ServerFnError> {
    use crate::auth::require_user;
    use crate::db::get_pool;

    require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let package: Option<Package> = sqlx::query_as("SELECT * FROM packages WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    package.ok_or_else(|| ServerFnError::new("No such package"))
}

#[cfg(not(feature = "server"))]
#[get("/api/packages/:id")]
pub async fn get_package(id: i64) -> Result<Package, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a package. Admin only.
#[cfg(feature = "server")]
#[post("/api/packages", session: tower_sessions::Session)]
pub async fn create_package(name: String, price_usd: i64) -> Result<Package, ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ServerFnError::new("Package name is required"));
    }
    if price_usd < 0 {
        return Err(ServerFnError::new("Price cannot be negative"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let package: Package =
        sqlx::query_as("INSERT INTO packages (name, price_usd) VALUES ($1, $2) RETURNING *")
            .bind(&name)
            .bind(price_usd)
            .fetch_one(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(package)
}

#[cfg(not(feature = "server"))]
#[post("/api/packages")]
pub async fn create_package(name: String, price_usd: i64) -> Result<Package, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Rename or reprice a package. Admin only.
#[cfg(feature = "server")]
#[post("/api/packages/update", session: tower_sessions::Session)]
pub async fn update_package(
    id: i64,
    name: String,
    price_usd: i64,
) -> Result<Package, ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ServerFnError::new("Package name is required"));
    }
    if price_usd < 0 {
        return Err(ServerFnError::new("Price cannot be negative"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let package: Option<Package> = sqlx::query_as(
        "UPDATE packages SET name = $1, price_usd = $2 WHERE id = $3 RETURNING *",
    )
    .bind(&name)
    .bind(price_usd)
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    package.ok_or_else(|| ServerFnError::new("No such package"))
}

#[cfg(not(feature = "server"))]
#[post("/api/packages/update")]
pub async fn update_package(
    id: i64,
    name: String,
    price_usd: i64,
) -> Result<Package, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
