//! Store adapter tests
//!
//! Drives the domain engines through `MemoryStore` the way the interface
//! layer does, checking unit-of-work semantics and the statement join.

use std::sync::Arc;

use core_kernel::{Amount, CoreError, MemberId, ServiceId};
use domain_billing::{create_transaction, delete_transaction, process_payments, PaymentOutcome};
use domain_member::{create_member, deposit, unpaid_statement, MemberStore};
use domain_roster::{create_service, subscribe, RosterStore};
use infra_store::MemoryStore;

async fn seed_pool(store: &MemoryStore) -> (MemberId, MemberId, ServiceId) {
    store
        .transact(|state| {
            let a = create_member(state, "harang", Amount::new(20_000))?;
            let b = create_member(state, "dako", Amount::new(100))?;
            let service = create_service(state, "spotify", "Spotify Premium", 6)?;
            subscribe(state, a.id, service.id)?;
            subscribe(state, b.id, service.id)?;
            Ok((a.id, b.id, service.id))
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn commits_a_successful_unit_of_work() {
    let store = MemoryStore::new();
    let (a, _, _) = seed_pool(&store).await;

    let member = store.read(|state| state.member(a).cloned()).await.unwrap();
    assert_eq!(member.name, "harang");
    assert_eq!(member.balance, Amount::new(20_000));
}

#[tokio::test]
async fn rolls_back_a_failed_unit_of_work() {
    let store = MemoryStore::new();
    seed_pool(&store).await;

    let before = store.read(|state| state.row_counts()).await;

    // the deposit lands in the copy, then the duplicate name fails the whole
    // closure, so neither change may survive
    let err = store
        .transact(|state| {
            let member = state.member_by_name("harang").map(|m| m.id).unwrap();
            deposit(state, member, Amount::new(5_000))?;
            create_member(state, "harang", Amount::ZERO)?;
            Ok(())
        })
        .await
        .unwrap_err();
    assert!(err.is_conflict());

    let after = store.read(|state| state.row_counts()).await;
    assert_eq!(before, after);
    let balance = store
        .read(|state| state.member_by_name("harang").map(|m| m.balance))
        .await
        .unwrap();
    assert_eq!(balance, Amount::new(20_000));
}

#[tokio::test]
async fn settlement_and_reversal_conserve_money() {
    let store = MemoryStore::new();
    let (_, _, service) = seed_pool(&store).await;
    let total_before = store.read(|state| state.total_balance()).await;

    let detail = store
        .transact(|state| {
            create_transaction(
                state,
                service,
                "2025-08".parse().map_err(CoreError::from)?,
                Amount::new(15_890),
                None,
            )
        })
        .await
        .unwrap();
    let tx = detail.transaction.id;

    // splitting creates debt, not money
    assert_eq!(store.read(|state| state.total_balance()).await, total_before);

    let report = store
        .transact(|state| process_payments(state, tx))
        .await
        .unwrap();
    assert_eq!(report.summary.paid_count, 1);
    assert_eq!(report.summary.pending_count, 1);
    // one share of ceil(15890/2) left the pool
    assert_eq!(
        store.read(|state| state.total_balance()).await,
        total_before - 7_945
    );

    let refund = store
        .transact(|state| delete_transaction(state, tx))
        .await
        .unwrap();
    assert_eq!(refund.total_refunded, Amount::new(7_945));
    assert_eq!(store.read(|state| state.total_balance()).await, total_before);
}

#[tokio::test]
async fn statement_join_orders_shares_oldest_first() {
    let store = MemoryStore::new();
    let (a, _, service) = seed_pool(&store).await;

    for month in ["2025-07", "2025-08"] {
        store
            .transact(|state| {
                create_transaction(
                    state,
                    service,
                    month.parse().map_err(CoreError::from)?,
                    Amount::new(100),
                    None,
                )
            })
            .await
            .unwrap();
    }

    let statement = store
        .read(|state| unpaid_statement(state, a))
        .await
        .unwrap();

    assert_eq!(statement.items.len(), 2);
    assert_eq!(statement.items[0].month, "2025-07".parse().unwrap());
    assert_eq!(statement.items[1].month, "2025-08".parse().unwrap());
    assert_eq!(statement.items[0].service_name, "Spotify Premium");
    assert_eq!(statement.items[0].transaction_total, Amount::new(100));
    assert_eq!(statement.pending_total, Amount::new(100));
    assert_eq!(statement.total_owed, Amount::new(100));
}

#[tokio::test]
async fn settled_shares_drop_off_the_statement() {
    let store = MemoryStore::new();
    let (a, _, service) = seed_pool(&store).await;

    let detail = store
        .transact(|state| {
            create_transaction(
                state,
                service,
                "2025-08".parse().map_err(CoreError::from)?,
                Amount::new(100),
                None,
            )
        })
        .await
        .unwrap();
    store
        .transact(|state| process_payments(state, detail.transaction.id))
        .await
        .unwrap();

    let statement = store
        .read(|state| unpaid_statement(state, a))
        .await
        .unwrap();
    assert!(statement.items.is_empty());
    assert!(statement.is_settled());
}

#[tokio::test]
async fn racing_subscribes_fill_the_last_slot_exactly_once() {
    let store = Arc::new(MemoryStore::new());
    let (a, b, service) = store
        .transact(|state| {
            let a = create_member(state, "harang", Amount::ZERO)?;
            let b = create_member(state, "dako", Amount::ZERO)?;
            let service = create_service(state, "solo", "Solo Plan", 1)?;
            Ok((a.id, b.id, service.id))
        })
        .await
        .unwrap();

    let first = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.transact(|state| subscribe(state, a, service)).await }
    });
    let second = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.transact(|state| subscribe(state, b, service)).await }
    });
    let outcomes = [first.await.unwrap(), second.await.unwrap()];

    // the write lock serializes the check-and-insert, so whichever task runs
    // second sees a full service
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    let loser = outcomes.iter().find(|r| r.is_err()).unwrap();
    assert!(loser.as_ref().unwrap_err().is_conflict());
    assert_eq!(
        store
            .read(|state| state.active_subscription_count(service))
            .await,
        1
    );
}

#[tokio::test]
async fn racing_settlements_collect_each_share_once() {
    let store = Arc::new(MemoryStore::new());
    let (a, _, service) = seed_pool(&store).await;
    let tx = store
        .transact(|state| {
            create_transaction(
                state,
                service,
                "2025-08".parse().map_err(CoreError::from)?,
                Amount::new(15_890),
                None,
            )
        })
        .await
        .unwrap()
        .transaction
        .id;

    let first = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.transact(|state| process_payments(state, tx)).await }
    });
    let second = tokio::spawn({
        let store = Arc::clone(&store);
        async move { store.transact(|state| process_payments(state, tx)).await }
    });
    let reports = [
        first.await.unwrap().unwrap(),
        second.await.unwrap().unwrap(),
    ];

    // harang's share of ceil(15890/2) was debited exactly once
    let balance = store
        .read(|state| state.member(a).map(|m| m.balance))
        .await
        .unwrap();
    assert_eq!(balance, Amount::new(20_000 - 7_945));

    // one run moved the money; the other saw the share already collected
    let collected = reports
        .iter()
        .flat_map(|report| report.results.iter())
        .filter(|result| {
            result.member_id == a && matches!(result.outcome, PaymentOutcome::Paid { .. })
        })
        .count();
    assert_eq!(collected, 1);
}
