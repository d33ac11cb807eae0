//! Settlement engine
//!
//! Attempts to collect each participant's share from the member ledger.
//! This is the only mutator of balances during automatic processing.
//!
//! # State machine
//!
//! Per participant: PENDING -> PAID (terminal). Per transaction:
//! PENDING -> PAID (terminal, requires all participants PAID). There is no
//! reverse transition in this engine; only a full reversal removes PAID
//! state, by deleting the rows outright.

use chrono::Utc;
use core_kernel::{Amount, CoreError, MemberId, ParticipantId, TransactionId};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ports::BillingStore;
use crate::transaction::TransactionStatus;

/// What happened to one participant during a settlement run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PaymentOutcome {
    /// The share was collected in this run
    Paid {
        amount: Amount,
        remaining_balance: Amount,
    },
    /// The share had been collected in a previous run; no side effect
    AlreadyPaid,
    /// The member's balance does not cover the share; the row stays PENDING
    InsufficientBalance {
        current_balance: Amount,
        required_amount: Amount,
        shortage: Amount,
    },
}

/// A participant outcome with identity for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantOutcome {
    pub participant_id: ParticipantId,
    pub member_id: MemberId,
    pub member_name: String,
    #[serde(flatten)]
    pub outcome: PaymentOutcome,
}

/// Aggregate counts for a settlement run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementSummary {
    pub total_participants: usize,
    /// Participants PAID after this run (collected now or previously)
    pub paid_count: usize,
    /// Participants still PENDING after this run
    pub pending_count: usize,
}

/// The result of one `process_payments` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementReport {
    pub transaction_id: TransactionId,
    /// Transaction status after the run
    pub transaction_status: TransactionStatus,
    pub results: Vec<ParticipantOutcome>,
    pub summary: SettlementSummary,
}

/// Runs automatic settlement for one transaction
///
/// Participants are processed in creation order. A participant is debited
/// only when the member's balance covers the full share, so settlement
/// never drives a balance negative. Re-running is safe: PAID rows are
/// skipped, and with no intervening deposits a second run reproduces the
/// first run's final state.
///
/// # Errors
///
/// Returns `NotFound` when the transaction does not exist.
pub fn process_payments<S: BillingStore>(
    store: &mut S,
    transaction_id: TransactionId,
) -> Result<SettlementReport, CoreError> {
    store
        .transaction(transaction_id)
        .ok_or_else(|| CoreError::not_found("transaction", transaction_id))?;

    // Snapshot (id, member, share, paid) in participant order; mutation
    // happens through the port below.
    let worklist: Vec<(ParticipantId, MemberId, Amount, bool)> = store
        .participants_of(transaction_id)
        .iter()
        .map(|p| (p.id, p.member_id, p.share_amount, p.is_paid()))
        .collect();

    let now = Utc::now();
    let mut results = Vec::with_capacity(worklist.len());
    let mut pending_count = 0usize;

    for (participant_id, member_id, share, already_paid) in worklist {
        let member = store
            .member(member_id)
            .ok_or_else(|| CoreError::not_found("member", member_id))?;
        let member_name = member.name.clone();

        let outcome = if already_paid {
            PaymentOutcome::AlreadyPaid
        } else if member.can_cover(share) {
            let remaining = store
                .member_mut(member_id)
                .ok_or_else(|| CoreError::not_found("member", member_id))?
                .debit(share)?;
            store
                .participant_mut(participant_id)
                .ok_or_else(|| CoreError::not_found("participant", participant_id))?
                .mark_paid(now);

            info!(
                transaction = %transaction_id,
                member = %member_id,
                amount = %share,
                remaining = %remaining,
                "share collected"
            );
            PaymentOutcome::Paid {
                amount: share,
                remaining_balance: remaining,
            }
        } else {
            let balance = member.balance;
            pending_count += 1;
            PaymentOutcome::InsufficientBalance {
                current_balance: balance,
                required_amount: share,
                shortage: share.checked_sub(balance)?,
            }
        };

        results.push(ParticipantOutcome {
            participant_id,
            member_id,
            member_name,
            outcome,
        });
    }

    // All shares collected: flip the aggregate status exactly once.
    if pending_count == 0 {
        store
            .transaction_mut(transaction_id)
            .ok_or_else(|| CoreError::not_found("transaction", transaction_id))?
            .mark_paid(now);
        info!(transaction = %transaction_id, "transaction fully paid");
    }

    let transaction_status = store
        .transaction(transaction_id)
        .ok_or_else(|| CoreError::not_found("transaction", transaction_id))?
        .status;

    let total = results.len();
    Ok(SettlementReport {
        transaction_id,
        transaction_status,
        summary: SettlementSummary {
            total_participants: total,
            paid_count: total - pending_count,
            pending_count,
        },
        results,
    })
}
