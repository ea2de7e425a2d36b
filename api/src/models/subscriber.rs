//! # Subscriber models
//!
//! [`Subscriber`] is the billable customer record. The phone number is the
//! natural key used by every lookup and mutation; the numeric `id` exists
//! only for display ordering and for placeholder phones. Bulk-imported rows
//! carry a `placeholder-{id}` phone until claimed (see
//! [`crate::phone::is_placeholder_phone`]).
//!
//! The bulk import and claim results are proper tagged types rather than the
//! optional-field unions the early interface revisions used.

use serde::{Deserialize, Serialize};

/// A billable customer, keyed by phone number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Subscriber {
    pub id: i64,
    pub full_name: String,
    pub phone: String,
    pub package_id: i64,
    /// Nanosecond epoch.
    pub subscription_start_date: i64,
    pub active: bool,
}

/// Input for the bulk import: one subscriber name per line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkImportInput {
    pub names: String,
    pub package_id: i64,
    /// Nanosecond epoch applied to every imported row.
    pub subscription_start_date: i64,
}

/// Per-name outcome of a bulk import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkImportOutcome {
    pub name: String,
    pub status: BulkImportStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum BulkImportStatus {
    Created(Subscriber),
    Failed(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DeleteAllSubscribersResult {
    pub subscribers_deleted: u64,
}

/// Request to link the calling identity to an existing subscriber.
/// `phone` is the real phone being claimed; `subscriber_id` optionally pins
/// a specific placeholder row, otherwise `name` is used as a fallback match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimRequest {
    pub subscriber_id: Option<i64>,
    pub name: String,
    pub phone: String,
}

/// Successful claim: the linked subscriber and the phone it now carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimedSubscriber {
    pub subscriber: Subscriber,
    pub claimed_phone: String,
}
