//! End-to-end pool scenarios
//!
//! Drives member, roster, and billing flows through the shared store the
//! way the API layer does.

use core_kernel::{Amount, CoreError};
use domain_billing::{
    create_transaction, delete_transaction, process_payments, PaymentOutcome, PaymentStatus,
    TransactionStatus,
};
use domain_billing::BillingStore;
use domain_member::{deposit, unpaid_statement};
use domain_roster::{list_services, subscribe, unsubscribe};
use test_utils::{
    assert_participants_all, assert_summary_consistent, assert_total_balance, AmountFixtures,
    MonthFixtures, PoolBuilder,
};

#[tokio::test]
async fn two_member_pool_splits_a_bill_of_100() {
    let (store, pool) = PoolBuilder::new()
        .with_member("a", Amount::ZERO)
        .with_member("b", Amount::ZERO)
        .with_service("duo", "Duo Plan", 2)
        .with_subscription("a", "duo")
        .with_subscription("b", "duo")
        .build_store();

    let detail = store
        .transact(|s| {
            create_transaction(s, pool.service_id("duo"), MonthFixtures::august(), Amount::new(100), None)
        })
        .await
        .unwrap();

    assert_eq!(detail.transaction.status, TransactionStatus::Pending);
    assert_eq!(detail.participants.len(), 2);
    for p in &detail.participants {
        assert_eq!(p.participant.share_amount, Amount::new(50));
    }
}

#[tokio::test]
async fn three_way_split_of_101_rounds_up_to_34() {
    let (store, pool) = PoolBuilder::new()
        .with_member("a", Amount::ZERO)
        .with_member("b", Amount::ZERO)
        .with_member("c", Amount::ZERO)
        .with_service("trio", "Trio Plan", 3)
        .with_subscription("a", "trio")
        .with_subscription("b", "trio")
        .with_subscription("c", "trio")
        .build_store();

    let detail = store
        .transact(|s| {
            create_transaction(
                s,
                pool.service_id("trio"),
                MonthFixtures::august(),
                AmountFixtures::awkward_total(),
                None,
            )
        })
        .await
        .unwrap();

    for p in &detail.participants {
        assert_eq!(p.participant.share_amount, Amount::new(34));
    }
    assert_eq!(detail.transaction.status, TransactionStatus::Pending);
}

#[tokio::test]
async fn short_balance_records_the_shortage_and_stays_pending() {
    let (store, pool) = PoolBuilder::new()
        .with_member("short", Amount::new(30))
        .with_service("solo", "Solo Plan", 1)
        .with_subscription("short", "solo")
        .build_store();

    let tx = store
        .transact(|s| {
            create_transaction(s, pool.service_id("solo"), MonthFixtures::august(), Amount::new(50), None)
        })
        .await
        .unwrap()
        .transaction
        .id;

    let report = store.transact(|s| process_payments(s, tx)).await.unwrap();

    assert_summary_consistent(&report);
    assert_eq!(
        report.results[0].outcome,
        PaymentOutcome::InsufficientBalance {
            current_balance: Amount::new(30),
            required_amount: Amount::new(50),
            shortage: Amount::new(20),
        }
    );
    assert_eq!(report.transaction_status, TransactionStatus::Pending);
}

#[tokio::test]
async fn exact_balance_pays_in_full_and_completes_the_transaction() {
    let (store, pool) = PoolBuilder::new()
        .with_member("exact", Amount::new(50))
        .with_service("solo", "Solo Plan", 1)
        .with_subscription("exact", "solo")
        .build_store();

    let tx = store
        .transact(|s| {
            create_transaction(s, pool.service_id("solo"), MonthFixtures::august(), Amount::new(50), None)
        })
        .await
        .unwrap()
        .transaction
        .id;

    let report = store.transact(|s| process_payments(s, tx)).await.unwrap();

    assert_eq!(report.transaction_status, TransactionStatus::Paid);
    store
        .read(|s| {
            assert_participants_all(s, tx, PaymentStatus::Paid);
            let transaction = s.transaction(tx).unwrap();
            assert!(transaction.paid_at.is_some());
            assert_eq!(s.member(pool.member_id("exact")).unwrap().balance, Amount::ZERO);
        })
        .await;
}

#[tokio::test]
async fn deleting_a_paid_transaction_restores_the_balance() {
    let (store, pool) = PoolBuilder::new()
        .with_member("payer", Amount::new(120))
        .with_service("solo", "Solo Plan", 1)
        .with_subscription("payer", "solo")
        .build_store();

    let tx = store
        .transact(|s| {
            create_transaction(s, pool.service_id("solo"), MonthFixtures::august(), Amount::new(50), None)
        })
        .await
        .unwrap()
        .transaction
        .id;
    store.transact(|s| process_payments(s, tx)).await.unwrap();

    let report = store.transact(|s| delete_transaction(s, tx)).await.unwrap();

    assert_eq!(report.refunds.len(), 1);
    assert_eq!(report.refunds[0].member_id, pool.member_id("payer"));
    assert_eq!(report.refunds[0].refunded_amount, Amount::new(50));
    store
        .read(|s| {
            assert_eq!(s.member(pool.member_id("payer")).unwrap().balance, Amount::new(120));
            assert!(s.transaction(tx).is_none());
            assert!(s.participants_of(tx).is_empty());
        })
        .await;
}

#[tokio::test]
async fn double_subscribe_conflicts_and_leaves_the_count_alone() {
    let (store, pool) = PoolBuilder::seeded().build_store();
    let spotify = pool.service_id("spotify");
    let harang = pool.member_id("harang");

    let occupancy_before = store
        .read(|s| {
            list_services(s)
                .into_iter()
                .find(|summary| summary.service.id == spotify)
                .map(|summary| summary.current_members)
        })
        .await
        .unwrap();

    let err = store
        .transact(|s| subscribe(s, harang, spotify))
        .await
        .unwrap_err();
    assert!(err.is_conflict());

    let occupancy_after = store
        .read(|s| {
            list_services(s)
                .into_iter()
                .find(|summary| summary.service.id == spotify)
                .map(|summary| summary.current_members)
        })
        .await
        .unwrap();
    assert_eq!(occupancy_before, occupancy_after);
}

#[tokio::test]
async fn leaving_and_rejoining_reuses_the_subscription_row() {
    let (store, pool) = PoolBuilder::seeded().build_store();
    let spotify = pool.service_id("spotify");
    let dako = pool.member_id("dako");

    let original = store
        .transact(|s| unsubscribe(s, dako, spotify))
        .await
        .unwrap();
    assert!(original.left_at.is_some());

    let rejoined = store.transact(|s| subscribe(s, dako, spotify)).await.unwrap();
    assert_eq!(rejoined.id, original.id);
    assert!(rejoined.left_at.is_none());
}

#[tokio::test]
async fn a_month_of_pool_life() {
    // Seeded pool: harang 50_000, dako 10, baek 10_000, tuna -11_677; all
    // four on spotify.
    let (store, pool) = PoolBuilder::seeded().build_store();
    let spotify = pool.service_id("spotify");
    let total_before = store.read(|s| s.total_balance()).await;

    // bill spotify for august: ceil(15890/4) = 3973 each
    let tx = store
        .transact(|s| {
            create_transaction(
                s,
                spotify,
                MonthFixtures::august(),
                AmountFixtures::spotify_total(),
                None,
            )
        })
        .await
        .unwrap()
        .transaction
        .id;
    store.read(|s| assert_total_balance(s, total_before)).await;

    // harang and baek cover their shares; dako and tuna cannot
    let report = store.transact(|s| process_payments(s, tx)).await.unwrap();
    assert_summary_consistent(&report);
    assert_eq!(report.summary.paid_count, 2);
    assert_eq!(report.summary.pending_count, 2);
    store
        .read(|s| assert_total_balance(s, total_before - 2 * 3_973))
        .await;

    // dako tops up and the rerun collects without touching paid rows
    let dako = pool.member_id("dako");
    store
        .transact(|s| deposit(s, dako, AmountFixtures::deposit()))
        .await
        .unwrap();
    let report = store.transact(|s| process_payments(s, tx)).await.unwrap();
    assert_eq!(report.summary.pending_count, 1);
    store
        .read(|s| assert_total_balance(s, total_before + 10_000 - 3 * 3_973))
        .await;

    // tuna's statement folds the imported debt in exactly once
    let statement = store
        .read(|s| unpaid_statement(s, pool.member_id("tuna")))
        .await
        .unwrap();
    assert_eq!(statement.pending_total, Amount::new(3_973));
    assert_eq!(statement.debt_carried, Amount::new(11_677));
    assert_eq!(statement.total_owed, Amount::new(3_973 + 11_677));
}

#[tokio::test]
async fn failed_unit_of_work_rolls_back_partial_writes() {
    let (store, pool) = PoolBuilder::seeded().build_store();
    let spotify = pool.service_id("spotify");
    let counts_before = store.read(|s| s.row_counts()).await;

    // transaction creation succeeds inside the closure, then the duplicate
    // month fails the whole unit
    let err = store
        .transact(|s| {
            create_transaction(s, spotify, MonthFixtures::july(), Amount::new(100), None)?;
            create_transaction(s, spotify, MonthFixtures::july(), Amount::new(200), None)?;
            Ok::<_, CoreError>(())
        })
        .await
        .unwrap_err();
    assert!(err.is_conflict());

    assert_eq!(store.read(|s| s.row_counts()).await, counts_before);
}
