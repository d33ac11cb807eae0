//! Custom Test Assertions
//!
//! Assertion helpers for domain types that give more meaningful error
//! messages than standard assertions.

use core_kernel::Amount;
use domain_billing::{PaymentStatus, SettlementReport};
use infra_store::StoreState;

/// Asserts that an Amount equals an expected number of minor units
pub fn assert_amount(actual: Amount, expected_minor: i64) {
    assert_eq!(
        actual.minor_units(),
        expected_minor,
        "Amount mismatch: actual={actual}, expected={expected_minor}",
    );
}

/// Asserts that the pool's total balance matches an expected value
///
/// Splitting a bill moves no money, so between settlements the total must
/// stay constant; settlement reduces it by exactly the collected shares and
/// reversal restores it.
pub fn assert_total_balance(state: &StoreState, expected_minor: i64) {
    let total = state.total_balance();
    assert_eq!(
        total, expected_minor,
        "Pool balance not conserved: total={total}, expected={expected_minor}",
    );
}

/// Asserts the per-share ceiling split invariant: the covered sum is at
/// least the total and overshoots by fewer than `parts` minor units
pub fn assert_ceiling_split(total: Amount, share: Amount, parts: u32) {
    let covered = share.minor_units() * i64::from(parts);
    let overshoot = covered - total.minor_units();
    assert!(
        (0..i64::from(parts)).contains(&overshoot),
        "Bad split: total={total}, share={share}, parts={parts}, overshoot={overshoot}",
    );
}

/// Asserts that a settlement report's summary agrees with its outcomes
pub fn assert_summary_consistent(report: &SettlementReport) {
    assert_eq!(
        report.summary.total_participants,
        report.results.len(),
        "Summary counts the wrong number of participants",
    );
    assert_eq!(
        report.summary.paid_count + report.summary.pending_count,
        report.summary.total_participants,
        "Summary counts do not add up",
    );
}

/// Asserts that every participant of a transaction has the given status
pub fn assert_participants_all(
    state: &StoreState,
    transaction: core_kernel::TransactionId,
    status: PaymentStatus,
) {
    use domain_billing::BillingStore;

    let participants = state.participants_of(transaction);
    assert!(!participants.is_empty(), "Transaction has no participants");
    for p in participants {
        assert_eq!(
            p.status, status,
            "Participant {} has status {:?}, expected {:?}",
            p.id, p.status, status,
        );
    }
}
