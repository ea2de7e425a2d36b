//! # Billing state models and derivation
//!
//! A subscriber's billing record set is a list of [`BillingYear`] entries,
//! each holding the months that have an explicit `{due, paid}` status. Months
//! without a record are implicitly not due and not paid — [`derive_status`]
//! encodes that default, and the billing grid renders straight from it.
//!
//! Invariant: `paid` implies `due`. The server normalizes writes (see
//! `set_month_billing_status`) and the UI disables the paid switch whenever
//! the month is not due, via [`paid_toggle_disabled`].

use serde::{Deserialize, Serialize};

/// Status of a single month for one subscriber.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MonthStatus {
    pub month: u32,
    pub due: bool,
    pub paid: bool,
}

impl MonthStatus {
    /// The implicit status of a month with no stored record.
    pub fn unset(month: u32) -> Self {
        Self {
            month,
            due: false,
            paid: false,
        }
    }
}

/// All explicitly recorded months of one year for one subscriber.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillingYear {
    pub year: i32,
    pub months: Vec<MonthStatus>,
}

/// Resolve a subscriber's status for a given year and month, defaulting to
/// not due / not paid when no record exists.
pub fn derive_status(entries: &[BillingYear], year: i32, month: u32) -> MonthStatus {
    entries
        .iter()
        .find(|y| y.year == year)
        .and_then(|y| y.months.iter().find(|m| m.month == month))
        .copied()
        .unwrap_or_else(|| MonthStatus::unset(month))
}

/// The paid switch is operable only while the month is due.
pub fn paid_toggle_disabled(status: &MonthStatus) -> bool {
    !status.due
}

/// Normalize a month write so that `paid` implies `due`: a month that is
/// not due can never be paid. Writes are normalized rather than rejected so
/// toggling due off stays a single operation.
pub fn normalize_month_status(due: bool, paid: bool) -> (bool, bool) {
    (due, paid && due)
}

/// One line of the monthly bills report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriberMonthlyBill {
    pub full_name: String,
    pub amount_due: i64,
}

/// Server-computed report of everything outstanding for one month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyBillsResult {
    pub year: i32,
    pub month: u32,
    pub subscribers: Vec<SubscriberMonthlyBill>,
}

/// What the calling subscriber owes for one month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CallerPaymentDue {
    pub year: i32,
    pub month: u32,
    pub amount_cents: i64,
    pub paid: bool,
}

/// Aggregate view of one subscriber's billing history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriberBillingSummary {
    pub phone: String,
    pub full_name: String,
    pub months_due: i64,
    pub months_paid: i64,
    pub total_due_cents: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<BillingYear> {
        vec![
            BillingYear {
                year: 2023,
                months: vec![MonthStatus {
                    month: 12,
                    due: true,
                    paid: true,
                }],
            },
            BillingYear {
                year: 2024,
                months: vec![
                    MonthStatus {
                        month: 1,
                        due: true,
                        paid: false,
                    },
                    MonthStatus {
                        month: 2,
                        due: true,
                        paid: true,
                    },
                ],
            },
        ]
    }

    #[test]
    fn test_derive_status_missing_record_defaults() {
        let status = derive_status(&sample(), 2024, 3);
        assert!(!status.due);
        assert!(!status.paid);

        let status = derive_status(&[], 2024, 3);
        assert!(!status.due);
        assert!(!status.paid);
    }

    #[test]
    fn test_derive_status_finds_recorded_month() {
        let status = derive_status(&sample(), 2024, 1);
        assert!(status.due);
        assert!(!status.paid);

        let status = derive_status(&sample(), 2023, 12);
        assert!(status.due);
        assert!(status.paid);
    }

    #[test]
    fn test_normalize_clears_paid_when_not_due() {
        assert_eq!(normalize_month_status(false, true), (false, false));
        assert_eq!(normalize_month_status(true, true), (true, true));
        assert_eq!(normalize_month_status(true, false), (true, false));
        assert_eq!(normalize_month_status(false, false), (false, false));
    }

    #[test]
    fn test_paid_toggle_disabled_when_not_due() {
        assert!(paid_toggle_disabled(&MonthStatus::unset(3)));
        assert!(!paid_toggle_disabled(&MonthStatus {
            month: 3,
            due: true,
            paid: false,
        }));
    }
}
