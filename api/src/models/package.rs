use serde::{Deserialize, Serialize};

/// A subscription tier with a fixed monthly price, in cents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Package {
    pub id: i64,
    pub name: String,
    pub price_usd: i64,
}
