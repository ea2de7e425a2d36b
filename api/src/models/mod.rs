pub mod billing;
pub mod package;
pub mod subscriber;
pub mod user;

pub use billing::{
    derive_status, normalize_month_status, paid_toggle_disabled, BillingYear, CallerPaymentDue,
    MonthStatus, MonthlyBillsResult, SubscriberBillingSummary, SubscriberMonthlyBill,
};
pub use package::Package;
pub use subscriber::{
    BulkImportInput, BulkImportOutcome, BulkImportStatus, ClaimRequest, ClaimedSubscriber,
    DeleteAllSubscribersResult, Subscriber,
};
pub use user::{UserInfo, UserProfile, UserRole};
