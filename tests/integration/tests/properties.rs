//! Property-based pool invariants
//!
//! Conservation, rounding, and idempotence over randomly generated pools.
//! These run against `StoreState` directly; locking is covered by the
//! scenario tests.

use core_kernel::Amount;
use domain_billing::{
    create_transaction, delete_transaction, process_payments, BillingStore, PaymentOutcome,
};
use domain_member::{unpaid_statement, MemberStore};
use proptest::prelude::*;
use test_utils::{
    assert_ceiling_split, balance_strategy, bill_total_strategy, month_strategy,
    pool_size_strategy, PoolBuilder,
};

/// Builds a single-service pool with the given member balances
fn pool_with_balances(balances: &[Amount]) -> (infra_store::StoreState, core_kernel::ServiceId) {
    let mut builder = PoolBuilder::new().with_service("pool", "The Pool", balances.len() as u32);
    for (i, balance) in balances.iter().enumerate() {
        let name = format!("member{i}");
        builder = builder
            .with_member(&name, *balance)
            .with_subscription(&name, "pool");
    }
    let pool = builder.build();
    let service = pool.service_id("pool");
    (pool.state, service)
}

proptest! {
    #[test]
    fn split_is_ceiling_division(
        total in bill_total_strategy(),
        parts in pool_size_strategy(),
    ) {
        let share = total.split_ceil(parts).unwrap();
        assert_ceiling_split(total, share, parts);
    }

    #[test]
    fn splitting_a_bill_moves_no_money(
        balances in proptest::collection::vec(balance_strategy(), 1..=8),
        total in bill_total_strategy(),
        month in month_strategy(),
    ) {
        let (mut state, service) = pool_with_balances(&balances);
        let before = state.total_balance();

        create_transaction(&mut state, service, month, total, None).unwrap();

        prop_assert_eq!(state.total_balance(), before);
    }

    #[test]
    fn settlement_collects_exactly_the_paid_shares(
        balances in proptest::collection::vec(balance_strategy(), 1..=8),
        total in bill_total_strategy(),
        month in month_strategy(),
    ) {
        let (mut state, service) = pool_with_balances(&balances);
        let before = state.total_balance();

        let tx = create_transaction(&mut state, service, month, total, None)
            .unwrap()
            .transaction
            .id;
        let report = process_payments(&mut state, tx).unwrap();

        let collected: i64 = report
            .results
            .iter()
            .filter_map(|r| match r.outcome {
                PaymentOutcome::Paid { amount, .. } => Some(amount.minor_units()),
                _ => None,
            })
            .sum();

        prop_assert_eq!(state.total_balance(), before - collected);

        // no member went negative from settlement
        for (i, balance) in balances.iter().enumerate() {
            if balance.is_negative() {
                continue;
            }
            let member = MemberStore::member_by_name(&state, &format!("member{i}")).unwrap();
            prop_assert!(!member.balance.is_negative());
        }
    }

    #[test]
    fn rerunning_settlement_changes_nothing(
        balances in proptest::collection::vec(balance_strategy(), 1..=8),
        total in bill_total_strategy(),
        month in month_strategy(),
    ) {
        let (mut state, service) = pool_with_balances(&balances);
        let tx = create_transaction(&mut state, service, month, total, None)
            .unwrap()
            .transaction
            .id;

        let first = process_payments(&mut state, tx).unwrap();
        let total_after_first = state.total_balance();

        let second = process_payments(&mut state, tx).unwrap();

        prop_assert_eq!(state.total_balance(), total_after_first);
        prop_assert_eq!(first.summary.paid_count, second.summary.paid_count);
        prop_assert_eq!(first.summary.pending_count, second.summary.pending_count);
        prop_assert_eq!(first.transaction_status, second.transaction_status);

        // every share collected the first time reports AlreadyPaid now
        for (a, b) in first.results.iter().zip(second.results.iter()) {
            if matches!(a.outcome, PaymentOutcome::Paid { .. }) {
                prop_assert_eq!(&b.outcome, &PaymentOutcome::AlreadyPaid);
            }
        }
    }

    #[test]
    fn reversal_undoes_settlement_exactly(
        balances in proptest::collection::vec(balance_strategy(), 1..=8),
        total in bill_total_strategy(),
        month in month_strategy(),
    ) {
        let (mut state, service) = pool_with_balances(&balances);
        let before = state.total_balance();

        let tx = create_transaction(&mut state, service, month, total, None)
            .unwrap()
            .transaction
            .id;
        process_payments(&mut state, tx).unwrap();
        delete_transaction(&mut state, tx).unwrap();

        prop_assert_eq!(state.total_balance(), before);
        prop_assert!(BillingStore::transaction(&state, tx).is_none());
        prop_assert!(state.participants_of(tx).is_empty());
    }

    #[test]
    fn statement_counts_every_unit_of_debt_once(
        balances in proptest::collection::vec(balance_strategy(), 1..=8),
        total in bill_total_strategy(),
        month in month_strategy(),
    ) {
        let (mut state, service) = pool_with_balances(&balances);
        let tx = create_transaction(&mut state, service, month, total, None)
            .unwrap()
            .transaction
            .id;
        process_payments(&mut state, tx).unwrap();

        for i in 0..balances.len() {
            let member_id = MemberStore::member_by_name(&state, &format!("member{i}"))
                .unwrap()
                .id;
            let statement = unpaid_statement(&state, member_id).unwrap();

            let pending: i64 = statement.items.iter().map(|item| item.share_amount.minor_units()).sum();
            let debt = statement.balance.carried_debt();

            prop_assert_eq!(statement.pending_total.minor_units(), pending);
            prop_assert_eq!(statement.debt_carried, debt);
            prop_assert_eq!(
                statement.total_owed.minor_units(),
                pending + debt.minor_units()
            );
        }
    }
}
